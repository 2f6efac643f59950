//! Configuration
//!
//! Page tunables and the API location.

use wasm_bindgen::JsCast;

/// Grid page size for both inventory views
pub const ITEMS_PER_PAGE: usize = 50;

/// Share of requested Robux lost to marketplace tax
pub const ROBUX_TAX_RATE: f64 = 0.30;

/// Catalog items with fewer premium copies are hidden when the filter is on
pub const PREMIUM_COPIES_THRESHOLD: f64 = 350.0;

/// Default for the amount-to-send input
pub const DEFAULT_AMOUNT_TO_SEND: i64 = 100;

/// Filled request slots at which a row shows its warning
pub const REQUEST_WARNING_SLOTS: usize = 3;

/// Item slots on each side of a trade row
pub const SLOTS_PER_SIDE: usize = 4;

/// Demand filter choices (value, label)
pub const DEMAND_LEVELS: &[(i64, &str)] = &[
    (0, "Terrible"),
    (1, "Low"),
    (2, "Normal"),
    (3, "High"),
    (4, "Amazing"),
];

/// How long a status notice stays on screen
pub const NOTICE_DISMISS_MS: u32 = 4_000;

pub const DEFAULT_API_BASE: &str = "/TradeUI/api";
pub const ITEM_IMAGE_BASE: &str = "/ItemImages";

/// Host page may point the UI elsewhere with this meta tag
const API_BASE_META: &str = "trade-ui-api-base";

/// Backend endpoint locations
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base: DEFAULT_API_BASE.to_string() }
    }
}

impl ApiConfig {
    pub fn new(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        if base.is_empty() {
            return Self::default();
        }
        Self { base: base.to_string() }
    }

    /// Read the `<meta name="trade-ui-api-base">` override, else the default
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{}\"]", API_BASE_META);
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| Self::new(&meta.content()))
            .unwrap_or_default()
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}
