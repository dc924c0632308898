//! Share links and share copy for result cards.
//!
//! A result serializes into a query string on the configured site URL, and
//! each supported platform gets a prefilled intent link. Nothing here talks
//! to the network.

use url::Url;

use crate::age::AgeResult;
use crate::love::CompatibilityResult;
use crate::svg::group_thousands;
use crate::titles::CardTitle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Copy,
    Whatsapp,
    Facebook,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Copy,
        Platform::Whatsapp,
        Platform::Facebook,
        Platform::Twitter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Copy => "copy",
            Platform::Whatsapp => "whatsapp",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
        }
    }
}

/// Serializes an age result onto the site URL.
pub fn age_share_url(base: &Url, result: &AgeResult, name: &str, relationship: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("type", "age")
        .append_pair("name", name)
        .append_pair("relationship", relationship)
        .append_pair("years", &result.years.to_string())
        .append_pair("months", &result.months.to_string())
        .append_pair("days", &result.days.to_string())
        .append_pair("totalDays", &result.total_days.to_string())
        .append_pair("nextBirthday", &result.days_to_next_birthday.to_string());
    url
}

/// Serializes a love result onto the site URL.
pub fn love_share_url(base: &Url, result: &CompatibilityResult) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("type", "love")
        .append_pair("name1", &result.name_a)
        .append_pair("name2", &result.name_b)
        .append_pair("percentage", &result.score.to_string())
        .append_pair("category", result.tier.label());
    url
}

/// Share copy for an age result.
pub fn age_share_text(result: &AgeResult, title: &CardTitle, app_name: &str) -> String {
    format!(
        "🎂 {title}\n\n\
         ✨ Age: {years} years, {months} months, {days} days\n\
         📅 Total days lived: {total}\n\
         🎉 Next birthday in {next} days!\n\n\
         Calculated with {app_name}",
        title = title.title,
        years = result.years,
        months = result.months,
        days = result.days,
        total = group_thousands(result.total_days),
        next = result.days_to_next_birthday,
    )
}

/// Share copy for a love result.
pub fn love_share_text(result: &CompatibilityResult, app_name: &str) -> String {
    format!(
        "💘 Love Calculator Result\n\n\
         {a} ♥ {b}\n\n\
         {emoji} {score}% Love Match!\n\
         ✨ {category}\n\n\
         {message}\n\n\
         Calculated with {app_name}",
        a = result.name_a,
        b = result.name_b,
        emoji = result.tier.emoji(),
        score = result.score,
        category = result.tier.label(),
        message = result.tier.message(),
    )
}

/// The copy-paste block: text plus the link.
pub fn copy_block(text: &str, url: &Url) -> String {
    format!("{text}\n\n🔗 {url}")
}

/// Prefilled intent link for a platform; `Copy` has none.
pub fn platform_link(platform: Platform, share_url: &Url, text: &str) -> Option<Url> {
    let link = match platform {
        Platform::Copy => return None,
        Platform::Whatsapp => Url::parse_with_params(
            "https://wa.me/",
            [("text", format!("{text}\n\n🔗 {share_url}"))],
        ),
        Platform::Facebook => Url::parse_with_params(
            "https://www.facebook.com/sharer/sharer.php",
            [("u", share_url.as_str().to_string()), ("quote", text.to_string())],
        ),
        Platform::Twitter => Url::parse_with_params(
            "https://twitter.com/intent/tweet",
            [("text", text.to_string()), ("url", share_url.as_str().to_string())],
        ),
    };

    Some(link.expect("static share endpoints parse"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{NaiveDate, NaiveTime};

    use crate::age::compute_age;
    use crate::love::{FixedBoost, compute_compatibility_with};
    use crate::titles::card_title;

    use super::*;

    fn base() -> Url {
        Url::parse("https://agelove.example/").unwrap()
    }

    fn pairs(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn age_url_round_trips_its_fields() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_time(NaiveTime::MIN);
        let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_time(NaiveTime::MIN);
        let result = compute_age(birth, reference).unwrap();

        let url = age_share_url(&base(), &result, "Maya", "sister");
        let pairs = pairs(&url);

        assert_eq!(pairs["type"], "age");
        assert_eq!(pairs["name"], "Maya");
        assert_eq!(pairs["relationship"], "sister");
        assert_eq!(pairs["years"], "25");
        assert_eq!(pairs["totalDays"], "9132");
        assert_eq!(pairs["nextBirthday"], "0");
    }

    #[test]
    fn love_url_round_trips_its_fields() {
        let result = compute_compatibility_with("Ann", "Bob", &mut FixedBoost(20)).unwrap();
        let url = love_share_url(&base(), &result);
        let pairs = pairs(&url);

        assert_eq!(pairs["type"], "love");
        assert_eq!(pairs["name1"], "Ann");
        assert_eq!(pairs["name2"], "Bob");
        assert_eq!(pairs["percentage"], "44");
        assert_eq!(pairs["category"], "Challenging Match");
    }

    #[test]
    fn platform_links_carry_the_share_url() {
        let result = compute_compatibility_with("Ann", "Bob", &mut FixedBoost(1)).unwrap();
        let share_url = love_share_url(&base(), &result);
        let text = love_share_text(&result, "Age & Love Calculator");

        assert_eq!(platform_link(Platform::Copy, &share_url, &text), None);

        let wa = platform_link(Platform::Whatsapp, &share_url, &text).unwrap();
        assert_eq!(wa.host_str(), Some("wa.me"));
        assert!(pairs(&wa)["text"].contains(share_url.as_str()));

        let fb = platform_link(Platform::Facebook, &share_url, &text).unwrap();
        assert_eq!(pairs(&fb)["u"], share_url.as_str());

        let tw = platform_link(Platform::Twitter, &share_url, &text).unwrap();
        assert_eq!(pairs(&tw)["url"], share_url.as_str());
        assert!(pairs(&tw)["text"].contains("Love Calculator Result"));
    }

    #[test]
    fn share_text_reads_like_the_card() {
        let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap().and_time(NaiveTime::MIN);
        let reference = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_time(NaiveTime::MIN);
        let result = compute_age(birth, reference).unwrap();
        let title = card_title(Some("Maya"), None);

        let text = age_share_text(&result, &title, "Age & Love Calculator");
        assert!(text.contains("33 years, 8 months, 24 days"));
        assert!(text.contains("12,322"));
        assert!(text.ends_with("Calculated with Age & Love Calculator"));
    }
}
