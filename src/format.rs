//! Display Formatting
//!
//! Number grouping for totals and item image URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::ITEM_IMAGE_BASE;

/// Characters that cannot appear raw inside one URL path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Group thousands with commas, at most three fraction digits (`1,234.568`)
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let sign = if n < 0.0 && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Profit is shown as a rounded whole number
pub fn format_profit(profit: f64) -> String {
    // Half-way values round up, negative ones included
    format_number((profit + 0.5).floor())
}

/// `12.34%`, or `0%` when there is nothing to compare against
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.2}%", p),
        None => "0%".to_string(),
    }
}

pub fn item_image_url(asset_id: &str) -> String {
    format!("{}/{}.webp", ITEM_IMAGE_BASE, utf8_percent_encode(asset_id, SEGMENT_ENCODE_SET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(-25000.0), "-25,000");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(12.34567), "12.346");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn profit_rounds_to_whole_units() {
        assert_eq!(format_profit(1499.5), "1,500");
        assert_eq!(format_profit(-1499.5), "-1,499");
        assert_eq!(format_profit(-0.2), "0");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(Some(12.346)), "12.35%");
        assert_eq!(format_percent(Some(-100.0)), "-100.00%");
        assert_eq!(format_percent(None), "0%");
    }

    #[test]
    fn image_url_encodes_segment() {
        assert_eq!(item_image_url("1365767"), "/ItemImages/1365767.webp");
        assert_eq!(item_image_url("a/b c"), "/ItemImages/a%2Fb%20c.webp");
    }
}
