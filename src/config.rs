//! Application configuration.
//!
//! All knobs come from `AGELOVE_*` environment variables, read once at
//! startup into an explicit value that gets passed down. Nothing global.

use std::env;

use tracing::warn;
use url::Url;

/// AdSense slot ids by placement.
#[derive(Debug, Clone, Default)]
pub struct AdSlots {
    pub header: Option<String>,
    pub sidebar: Option<String>,
    pub footer: Option<String>,
    pub mobile: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    /// Site the share links point at.
    pub domain: String,
    pub analytics_id: Option<String>,
    pub analytics_secret: Option<String>,
    pub enable_analytics: bool,
    pub adsense_client_id: Option<String>,
    pub ad_slots: AdSlots,
    pub enable_adsense: bool,
    pub enable_social_sharing: bool,
    pub production: bool,
}

impl AppConfig {
    pub fn from_env() -> AppConfig {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Split out from [`AppConfig::from_env`] so tests can feed a fixed
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
        let truthy = |key: &str| matches!(lookup(key).as_deref(), Some("true"));

        let production = matches!(lookup("AGELOVE_ENV").as_deref(), Some("production"));
        if production {
            let missing: Vec<&str> = [
                "AGELOVE_ANALYTICS_ID",
                "AGELOVE_ADSENSE_CLIENT_ID",
                "AGELOVE_DOMAIN",
            ]
            .into_iter()
            .filter(|key| lookup(key).is_none())
            .collect();

            if !missing.is_empty() {
                warn!(?missing, "missing required environment variables");
            }
        }

        AppConfig {
            app_name: lookup("AGELOVE_APP_NAME")
                .unwrap_or_else(|| "Age & Love Calculator".to_string()),
            domain: lookup("AGELOVE_DOMAIN").unwrap_or_else(|| "localhost".to_string()),
            analytics_id: lookup("AGELOVE_ANALYTICS_ID"),
            analytics_secret: lookup("AGELOVE_ANALYTICS_SECRET"),
            enable_analytics: truthy("AGELOVE_ENABLE_ANALYTICS"),
            adsense_client_id: lookup("AGELOVE_ADSENSE_CLIENT_ID"),
            ad_slots: AdSlots {
                header: lookup("AGELOVE_ADSENSE_HEADER_SLOT"),
                sidebar: lookup("AGELOVE_ADSENSE_SIDEBAR_SLOT"),
                footer: lookup("AGELOVE_ADSENSE_FOOTER_SLOT"),
                mobile: lookup("AGELOVE_ADSENSE_MOBILE_SLOT"),
            },
            enable_adsense: truthy("AGELOVE_ENABLE_ADSENSE"),
            // On unless explicitly turned off.
            enable_social_sharing: !matches!(
                lookup("AGELOVE_ENABLE_SOCIAL_SHARING").as_deref(),
                Some("false")
            ),
            production,
        }
    }

    /// Base URL the share links hang their query strings on.
    pub fn share_base_url(&self) -> Result<Url, url::ParseError> {
        let scheme = if self.production { "https" } else { "http" };
        Url::parse(&format!("{scheme}://{}/", self.domain))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(move |key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_on_an_empty_environment() {
        let config = AppConfig::from_lookup(|_| None);

        assert_eq!(config.app_name, "Age & Love Calculator");
        assert_eq!(config.domain, "localhost");
        assert!(!config.enable_analytics);
        assert!(!config.enable_adsense);
        assert!(config.enable_social_sharing);
        assert!(!config.production);
        assert_eq!(config.share_base_url().unwrap().as_str(), "http://localhost/");
    }

    #[test]
    fn flags_parse_strictly() {
        let config = from_pairs(&[
            ("AGELOVE_ENABLE_ANALYTICS", "true"),
            ("AGELOVE_ENABLE_ADSENSE", "yes"),
            ("AGELOVE_ENABLE_SOCIAL_SHARING", "false"),
        ]);

        assert!(config.enable_analytics);
        // Anything but the literal "true" stays off.
        assert!(!config.enable_adsense);
        assert!(!config.enable_social_sharing);
    }

    #[test]
    fn production_uses_https_share_links() {
        let config = from_pairs(&[
            ("AGELOVE_ENV", "production"),
            ("AGELOVE_DOMAIN", "agelove.example"),
        ]);

        assert!(config.production);
        assert_eq!(
            config.share_base_url().unwrap().as_str(),
            "https://agelove.example/"
        );
    }
}
