//! Frontend Models
//!
//! Data structures matching the backend JSON payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Marketplace item as served by `my_inventory` and `all_items`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    #[serde(rename = "assetId", default, deserialize_with = "loose_id")]
    pub asset_id: String,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Value", default, deserialize_with = "loose_number")]
    pub value: f64,
    #[serde(rename = "RAP", default, deserialize_with = "loose_number")]
    pub rap: f64,
    /// Only owned (unique) copies carry this
    #[serde(rename = "userAssetId", default, deserialize_with = "loose_opt_id")]
    pub user_asset_id: Option<String>,
    /// None only when the field is absent; an explicit null rates as 0
    #[serde(rename = "Demand", default, deserialize_with = "loose_rating")]
    pub demand: Option<f64>,
    #[serde(rename = "Premium Copies", default, deserialize_with = "loose_rating")]
    pub premium_copies: Option<f64>,
}

impl Item {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Which collection the inventory panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InventoryKind {
    #[default]
    MyInventory,
    AllItems,
}

impl InventoryKind {
    pub fn label(self) -> &'static str {
        match self {
            InventoryKind::MyInventory => "My Inventory",
            InventoryKind::AllItems => "All Items",
        }
    }
}

/// One trade as posted to `save_trades`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSubmission {
    pub offer: Vec<String>,
    pub request: Vec<String>,
    pub robux_offer: i64,
    pub robux_request: i64,
    pub amount: i64,
}

/// Body returned by `save_trades`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveTradesResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// ========================
// Lenient field parsing
// ========================

/// Fields the backend sends either as JSON numbers or as strings
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
}

impl Loose {
    fn into_number(self) -> Option<f64> {
        match self {
            Loose::Number(n) => Some(n),
            Loose::Text(s) => parse_float(&s),
        }
    }

    fn into_id(self) -> String {
        match self {
            Loose::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => format!("{}", n as i64),
            Loose::Number(n) => n.to_string(),
            Loose::Text(s) => s,
        }
    }
}

fn loose_number<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    Ok(Option::<Loose>::deserialize(de)?
        .and_then(Loose::into_number)
        .unwrap_or(0.0))
}

/// Only called for fields present in the payload, so null maps to 0
fn loose_rating<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Loose>::deserialize(de)? {
        None => Some(0.0),
        Some(raw) => raw.into_number(),
    })
}

fn loose_id<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<Loose>::deserialize(de)?
        .map(Loose::into_id)
        .unwrap_or_default())
}

fn loose_opt_id<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Loose>::deserialize(de)?
        .map(Loose::into_id)
        .filter(|id| !id.is_empty()))
}

/// Longest numeric prefix of `input`, like a browser's `parseFloat`
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut seen_digit = end > digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || seen_digit {
            seen_digit |= frac_end > frac_start;
            end = frac_end;
        }
    }
    if !seen_digit {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok()
}

/// Leading integer of `input`, like a browser's `parseInt(_, 10)`
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_accepts_numbers_and_strings() {
        let json = r#"[
            {"assetId": 1365767, "Name": "Valkyrie Helm", "Value": 190000, "RAP": "175432.5", "userAssetId": 88123},
            {"assetId": "20573078", "Name": "Shaggy", "Value": "12000", "RAP": 9800, "Demand": 3, "Premium Copies": 410}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();

        assert_eq!(items[0].asset_id, "1365767");
        assert_eq!(items[0].rap, 175432.5);
        assert_eq!(items[0].user_asset_id.as_deref(), Some("88123"));
        assert_eq!(items[0].demand, None);

        assert_eq!(items[1].asset_id, "20573078");
        assert_eq!(items[1].value, 12000.0);
        assert_eq!(items[1].user_asset_id, None);
        assert_eq!(items[1].demand, Some(3.0));
        assert_eq!(items[1].premium_copies, Some(410.0));
    }

    #[test]
    fn missing_and_null_fields_fall_back() {
        let json = r#"{"assetId": 5, "Name": null, "Value": null, "userAssetId": null}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.display_name(), "");
        assert_eq!(item.value, 0.0);
        assert_eq!(item.rap, 0.0);
        assert_eq!(item.user_asset_id, None);
    }

    #[test]
    fn null_rating_differs_from_missing() {
        let json = r#"[
            {"assetId": 1, "Demand": null, "Premium Copies": null},
            {"assetId": 2},
            {"assetId": 3, "Demand": "n/a"}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].demand, Some(0.0));
        assert_eq!(items[0].premium_copies, Some(0.0));
        assert_eq!(items[1].demand, None);
        assert_eq!(items[1].premium_copies, None);
        assert_eq!(items[2].demand, None);
    }

    #[test]
    fn submission_wire_shape() {
        let trade = TradeSubmission {
            offer: vec!["1".into(), "2".into()],
            request: vec!["3".into()],
            robux_offer: 0,
            robux_request: 500,
            amount: 100,
        };
        let value = serde_json::to_value(&trade).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "offer": ["1", "2"],
                "request": ["3"],
                "robux_offer": 0,
                "robux_request": 500,
                "amount": 100
            })
        );
    }

    #[test]
    fn browser_style_number_parsing() {
        assert_eq!(parse_float("12.5k"), Some(12.5));
        assert_eq!(parse_float("  -3"), Some(-3.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("7."), Some(7.0));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("2.5E-1x"), Some(0.25));
        assert_eq!(parse_float("4e"), Some(4.0));
        assert_eq!(parse_float("4e+"), Some(4.0));

        assert_eq!(parse_int("42.9"), Some(42));
        assert_eq!(parse_int("-7x"), Some(-7));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("x1"), None);
    }
}
