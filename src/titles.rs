//! Personalized headlines for the age card.

/// Relationship options offered on the age card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Friend,
    Wife,
    Husband,
    Brother,
    Sister,
    Mother,
    Father,
    Son,
    Daughter,
    Girlfriend,
    Boyfriend,
    Partner,
}

impl Relationship {
    /// Lenient parse; unknown or empty input means "no relationship" and
    /// falls back to the generic headline.
    pub fn parse(value: &str) -> Option<Relationship> {
        match value.trim().to_lowercase().as_str() {
            "friend" => Some(Relationship::Friend),
            "wife" => Some(Relationship::Wife),
            "husband" => Some(Relationship::Husband),
            "brother" => Some(Relationship::Brother),
            "sister" => Some(Relationship::Sister),
            "mother" => Some(Relationship::Mother),
            "father" => Some(Relationship::Father),
            "son" => Some(Relationship::Son),
            "daughter" => Some(Relationship::Daughter),
            "girlfriend" => Some(Relationship::Girlfriend),
            "boyfriend" => Some(Relationship::Boyfriend),
            "partner" => Some(Relationship::Partner),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Friend => "friend",
            Relationship::Wife => "wife",
            Relationship::Husband => "husband",
            Relationship::Brother => "brother",
            Relationship::Sister => "sister",
            Relationship::Mother => "mother",
            Relationship::Father => "father",
            Relationship::Son => "son",
            Relationship::Daughter => "daughter",
            Relationship::Girlfriend => "girlfriend",
            Relationship::Boyfriend => "boyfriend",
            Relationship::Partner => "partner",
        }
    }
}

/// Headline and tagline rendered at the top of the age card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTitle {
    pub title: String,
    pub subtitle: &'static str,
}

/// Builds the card headline from an optional name and relationship.
pub fn card_title(name: Option<&str>, relationship: Option<Relationship>) -> CardTitle {
    let name = name.map(str::trim).filter(|n| !n.is_empty());

    let Some(name) = name else {
        return CardTitle {
            title: "✨ Your Life's Journey ✨".to_string(),
            subtitle: "Every second is a new milestone",
        };
    };

    let (title, subtitle) = match relationship {
        Some(Relationship::Friend) => (
            format!("🤝 {name}'s Friendship Journey"),
            "A bond that grows stronger with every passing day",
        ),
        Some(Relationship::Wife) => (
            format!("💖 {name}'s Beautiful Life"),
            "My beloved wife, my eternal companion",
        ),
        Some(Relationship::Husband) => (
            format!("💙 {name}'s Amazing Journey"),
            "My loving husband, my life partner",
        ),
        Some(Relationship::Brother) => (
            format!("👨‍👦 {name}'s Brotherly Bond"),
            "A brother is a friend given by nature",
        ),
        Some(Relationship::Sister) => (
            format!("👩‍👧 {name}'s Sisterly Love"),
            "A sister is a gift to the heart",
        ),
        Some(Relationship::Mother) => (
            format!("🤱 {name}'s Motherly Grace"),
            "A mother's love knows no bounds",
        ),
        Some(Relationship::Father) => (
            format!("👨‍👧‍👦 {name}'s Fatherly Strength"),
            "A father is a daughter's first hero",
        ),
        Some(Relationship::Son) => (
            format!("👦 {name}'s Growing Years"),
            "A son is a mother's pride and joy",
        ),
        Some(Relationship::Daughter) => (
            format!("👧 {name}'s Precious Life"),
            "A daughter is a little girl who grows up to be your best friend",
        ),
        Some(Relationship::Girlfriend) => (
            format!("💕 {name}'s Sweet Journey"),
            "My girlfriend, my happiness",
        ),
        Some(Relationship::Boyfriend) => (
            format!("💙 {name}'s Special Path"),
            "My boyfriend, my joy",
        ),
        Some(Relationship::Partner) => (
            format!("💫 {name}'s Life Partnership"),
            "Together we create beautiful memories",
        ),
        None => (
            format!("✨ {name}'s Life Details"),
            "Every moment counts in this beautiful journey",
        ),
    };

    CardTitle { title, subtitle }
}
