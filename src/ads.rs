//! Ad-slot placements.
//!
//! Slots only resolve when the AdSense flag is on and a client id is
//! configured; the terminal rendition prints the development placeholder
//! where a real ad unit would mount.

use crate::config::AppConfig;

/// Named ad placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Header,
    Sidebar,
    Footer,
    Mobile,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Header => "header",
            Placement::Sidebar => "sidebar",
            Placement::Footer => "footer",
            Placement::Mobile => "mobile",
        }
    }
}

/// Slot id for a placement, or `None` when ads are disabled, the client id
/// is missing, or the slot is unconfigured.
pub fn slot(config: &AppConfig, placement: Placement) -> Option<&str> {
    if !config.enable_adsense || config.adsense_client_id.is_none() {
        return None;
    }

    let slots = &config.ad_slots;
    match placement {
        Placement::Header => slots.header.as_deref(),
        Placement::Sidebar => slots.sidebar.as_deref(),
        Placement::Footer => slots.footer.as_deref(),
        Placement::Mobile => slots.mobile.as_deref(),
    }
}

/// Development placeholder, stands in where a real ad unit would render.
pub fn placeholder(placement: Placement, slot_id: &str) -> String {
    format!(
        "┌──────────────────────────────────────────┐\n\
         │          📢 Advertisement Space          │\n\
         │      Replace with your AdSense code      │\n\
         │        placement={} slot={:<12}│\n\
         └──────────────────────────────────────────┘",
        placement.as_str(),
        slot_id,
    )
}
