//! Item Filtering
//!
//! Catalog filters and name search over item collections.

use crate::config::PREMIUM_COPIES_THRESHOLD;
use crate::models::Item;

/// Filters offered on the catalog view only
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Hide items with few premium copies
    pub hide_low_premium: bool,
    pub min_demand: Option<i64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl CatalogFilter {
    /// Items missing a rated field are never dropped by that field's rule.
    /// A rating sent as null arrives as 0 and is compared like any other.
    pub fn matches(&self, item: &Item) -> bool {
        if self.hide_low_premium {
            if let Some(copies) = item.premium_copies {
                if copies < PREMIUM_COPIES_THRESHOLD {
                    return false;
                }
            }
        }
        if let (Some(min), Some(demand)) = (self.min_demand, item.demand) {
            if demand < min as f64 {
                return false;
            }
        }
        if let Some(min) = self.min_value {
            if item.value < min {
                return false;
            }
        }
        if let Some(max) = self.max_value {
            if item.value > max {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive substring match on the item name
pub fn matches_query(item: &Item, query_lower: &str) -> bool {
    match item.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_lowercase().contains(query_lower),
        _ => false,
    }
}

/// Apply the optional catalog filter, then the search query.
/// Matches keep their index into `items`.
pub fn filter_items<'a>(items: &'a [Item], catalog: Option<&CatalogFilter>, query: &str) -> Vec<(usize, &'a Item)> {
    let query = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| catalog.map_or(true, |f| f.matches(item)))
        .filter(|(_, item)| matches_query(item, &query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(name: &str, value: f64, demand: Option<f64>, premium_copies: Option<f64>) -> Item {
        Item {
            asset_id: format!("{}", name.len()),
            name: Some(name.to_string()),
            value,
            rap: value * 0.9,
            user_asset_id: None,
            demand,
            premium_copies,
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let items = vec![
            make_item("Dominus Empyreus", 1_000_000.0, None, None),
            make_item("Sparkle Time Fedora", 120_000.0, None, None),
        ];
        let found = filter_items(&items, None, "DOMINUS");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, 0);
        assert_eq!(found[0].1.display_name(), "Dominus Empyreus");
        assert_eq!(filter_items(&items, None, "").len(), 2);
    }

    #[test]
    fn nameless_items_never_match() {
        let mut nameless = make_item("x", 1.0, None, None);
        nameless.name = None;
        assert!(filter_items(&[nameless], None, "").is_empty());
    }

    #[test]
    fn low_premium_copies_hidden_only_when_known() {
        let filter = CatalogFilter { hide_low_premium: true, ..Default::default() };
        assert!(!filter.matches(&make_item("a", 10.0, None, Some(349.0))));
        assert!(filter.matches(&make_item("b", 10.0, None, Some(350.0))));
        assert!(filter.matches(&make_item("c", 10.0, None, None)));
    }

    #[test]
    fn demand_floor_skips_unrated_items() {
        let filter = CatalogFilter { min_demand: Some(2), ..Default::default() };
        assert!(!filter.matches(&make_item("a", 10.0, Some(1.0), None)));
        assert!(filter.matches(&make_item("b", 10.0, Some(2.0), None)));
        assert!(filter.matches(&make_item("c", 10.0, None, None)));
    }

    #[test]
    fn null_ratings_count_as_zero() {
        let item: Item = serde_json::from_str(r#"{"assetId": 9, "Name": "Clockwork Shades", "Value": 5000, "Demand": null, "Premium Copies": null}"#).unwrap();

        let demand = CatalogFilter { min_demand: Some(2), ..Default::default() };
        assert!(!demand.matches(&item));
        let premium = CatalogFilter { hide_low_premium: true, ..Default::default() };
        assert!(!premium.matches(&item));
        assert!(CatalogFilter::default().matches(&item));
    }

    #[test]
    fn value_bounds_are_inclusive() {
        let filter = CatalogFilter { min_value: Some(100.0), max_value: Some(500.0), ..Default::default() };
        assert!(!filter.matches(&make_item("a", 99.0, None, None)));
        assert!(filter.matches(&make_item("b", 100.0, None, None)));
        assert!(filter.matches(&make_item("c", 500.0, None, None)));
        assert!(!filter.matches(&make_item("d", 501.0, None, None)));
    }
}
