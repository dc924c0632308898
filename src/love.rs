//! The love compatibility engine. Entertainment only.
//!
//! The score is a deterministic function of the two names plus a bounded
//! random boost, so repeated runs for the same couple wander a little. The
//! wandering is contractual; callers wanting repeatability inject a fixed
//! [`BoostSource`].

use rand::Rng;

use crate::error::InvalidInput;

/// Source of the random boost added to every score, in `1..=20`. Injected
/// so tests can pin the sequence.
pub trait BoostSource {
    fn boost(&mut self) -> u32;
}

/// Production boost: a uniform draw from the thread RNG.
pub struct RandomBoost;

impl BoostSource for RandomBoost {
    fn boost(&mut self) -> u32 {
        rand::thread_rng().gen_range(1..=20)
    }
}

/// Fixed boost value, for deterministic scoring.
pub struct FixedBoost(pub u32);

impl BoostSource for FixedBoost {
    fn boost(&mut self) -> u32 {
        self.0
    }
}

/// One of the seven compatibility tiers, keyed by inclusive lower-bound
/// score thresholds. Uniquely determined by the score: no overlap, no gap
/// across `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    PerfectMatch,
    ExcellentMatch,
    GreatMatch,
    GoodMatch,
    AverageMatch,
    ChallengingMatch,
    DifferentPaths,
}

impl Tier {
    /// Threshold table, evaluated highest first.
    pub fn for_score(score: u8) -> Tier {
        match score {
            s if s >= 90 => Tier::PerfectMatch,
            s if s >= 80 => Tier::ExcellentMatch,
            s if s >= 70 => Tier::GreatMatch,
            s if s >= 60 => Tier::GoodMatch,
            s if s >= 50 => Tier::AverageMatch,
            s if s >= 30 => Tier::ChallengingMatch,
            _ => Tier::DifferentPaths,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::PerfectMatch => "Perfect Match",
            Tier::ExcellentMatch => "Excellent Match",
            Tier::GreatMatch => "Great Match",
            Tier::GoodMatch => "Good Match",
            Tier::AverageMatch => "Average Match",
            Tier::ChallengingMatch => "Challenging Match",
            Tier::DifferentPaths => "Different Paths",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::PerfectMatch => "💕",
            Tier::ExcellentMatch => "💖",
            Tier::GreatMatch => "❤️",
            Tier::GoodMatch => "💗",
            Tier::AverageMatch => "💛",
            Tier::ChallengingMatch => "💙",
            Tier::DifferentPaths => "💜",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::PerfectMatch => {
                "You two are absolutely perfect for each other! True love at its finest!"
            }
            Tier::ExcellentMatch => {
                "Amazing compatibility! You have a wonderful connection together!"
            }
            Tier::GreatMatch => {
                "Great potential for love! You complement each other beautifully!"
            }
            Tier::GoodMatch => {
                "Good compatibility! With effort, this could bloom into something beautiful!"
            }
            Tier::AverageMatch => {
                "There's potential here! Love can grow with understanding and patience."
            }
            Tier::ChallengingMatch => {
                "It might require extra work, but love can overcome many obstacles!"
            }
            Tier::DifferentPaths => {
                "You may be better as friends, but who knows? Love works in mysterious ways!"
            }
        }
    }
}

/// A computed match. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityResult {
    /// Always in `1..=100`.
    pub score: u8,
    pub tier: Tier,
    /// The inputs as given, trimmed.
    pub name_a: String,
    pub name_b: String,
}

impl CompatibilityResult {
    /// Filled hearts on the five-heart meter, one per started 20 points.
    pub fn filled_hearts(&self) -> usize {
        (self.score / 20) as usize
    }
}

/// Scores a couple with the production boost source.
pub fn compute_compatibility(
    name_a: &str,
    name_b: &str,
) -> Result<CompatibilityResult, InvalidInput> {
    compute_compatibility_with(name_a, name_b, &mut RandomBoost)
}

/// Scores a couple with an explicit boost source.
pub fn compute_compatibility_with(
    name_a: &str,
    name_b: &str,
    boost: &mut impl BoostSource,
) -> Result<CompatibilityResult, InvalidInput> {
    let a = name_a.trim();
    let b = name_b.trim();
    if a.is_empty() || b.is_empty() {
        return Err(InvalidInput::EmptyName);
    }

    let score = (base_score(a, b) % 100 + boost.boost()).clamp(1, 100) as u8;

    Ok(CompatibilityResult {
        score,
        tier: Tier::for_score(score),
        name_a: a.to_string(),
        name_b: b.to_string(),
    })
}

/// The deterministic part of the score: shared letters (scanned over `a`
/// only, so the operands are not interchangeable), the length gap, and the
/// raw character codes of both normalized names.
fn base_score(name_a: &str, name_b: &str) -> u32 {
    let a = normalize(name_a);
    let b = normalize(name_b);

    let mut score = 0u32;
    for c in a.chars() {
        if b.contains(c) {
            score += 10;
        }
    }

    score += 2 * a.len().abs_diff(b.len()) as u32;

    for c in a.chars().chain(b.chars()) {
        score += c as u32;
    }

    score
}

/// Lowercases and keeps only `a`..`z`.
fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}
