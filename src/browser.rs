//! Inventory Browser State
//!
//! Active view, search, catalog filters and per-view pagination.

use crate::config::ITEMS_PER_PAGE;
use crate::filter::{filter_items, CatalogFilter};
use crate::models::{InventoryKind, Item};

/// One rendered page of the active view
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice {
    /// Items with their index in the source collection
    pub items: Vec<(usize, Item)>,
    /// Page actually shown (1-based)
    pub page: usize,
    /// Never less than 1
    pub total_pages: usize,
    pub total_items: usize,
}

impl PageSlice {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Number of pages needed for `total_items`, at least one
pub fn total_pages(total_items: usize) -> usize {
    total_items.div_ceil(ITEMS_PER_PAGE).max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryBrowser {
    pub view: InventoryKind,
    pub query: String,
    pub catalog_filter: CatalogFilter,
    my_inventory_page: usize,
    all_items_page: usize,
}

impl Default for InventoryBrowser {
    fn default() -> Self {
        Self {
            view: InventoryKind::MyInventory,
            query: String::new(),
            catalog_filter: CatalogFilter::default(),
            my_inventory_page: 1,
            all_items_page: 1,
        }
    }
}

impl InventoryBrowser {
    pub fn page(&self, kind: InventoryKind) -> usize {
        match kind {
            InventoryKind::MyInventory => self.my_inventory_page,
            InventoryKind::AllItems => self.all_items_page,
        }
    }

    fn page_mut(&mut self, kind: InventoryKind) -> &mut usize {
        match kind {
            InventoryKind::MyInventory => &mut self.my_inventory_page,
            InventoryKind::AllItems => &mut self.all_items_page,
        }
    }

    /// Returns false when `kind` was already showing
    pub fn switch_view(&mut self, kind: InventoryKind) -> bool {
        if self.view == kind {
            return false;
        }
        self.view = kind;
        true
    }

    /// New search text restarts the active view at page 1
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        *self.page_mut(self.view) = 1;
    }

    /// New catalog filters restart the catalog at page 1
    pub fn set_catalog_filter(&mut self, filter: CatalogFilter) {
        if self.catalog_filter != filter {
            self.catalog_filter = filter;
            self.all_items_page = 1;
        }
    }

    /// Move the active view `delta` pages away from the page on screen, never below 1.
    /// `shown` is the clamped page from [`Self::visible`], which can lag the stored one.
    pub fn step_page(&mut self, shown: usize, delta: isize) {
        *self.page_mut(self.view) = shown.saturating_add_signed(delta).max(1);
    }

    /// Filter and slice `items` for the active view
    pub fn visible(&self, items: &[Item]) -> PageSlice {
        let catalog = match self.view {
            InventoryKind::AllItems => Some(&self.catalog_filter),
            InventoryKind::MyInventory => None,
        };
        let filtered = filter_items(items, catalog, &self.query);
        let total_items = filtered.len();
        let total_pages = total_pages(total_items);
        let page = self.page(self.view).clamp(1, total_pages);
        let start = (page - 1) * ITEMS_PER_PAGE;

        PageSlice {
            items: filtered
                .into_iter()
                .skip(start)
                .take(ITEMS_PER_PAGE)
                .map(|(index, item)| (index, item.clone()))
                .collect(),
            page,
            total_pages,
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_items(count: usize) -> Vec<Item> {
        (0..count)
            .map(|i| Item {
                asset_id: i.to_string(),
                name: Some(format!("Item {}", i)),
                value: i as f64,
                rap: i as f64,
                user_asset_id: None,
                demand: None,
                premium_copies: None,
            })
            .collect()
    }

    #[test]
    fn page_count_rounds_up_with_minimum_one() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(50), 1);
        assert_eq!(total_pages(51), 2);
        assert_eq!(total_pages(120), 3);
    }

    #[test]
    fn slices_fifty_per_page() {
        let items = make_items(120);
        let mut browser = InventoryBrowser::default();

        let first = browser.visible(&items);
        assert_eq!(first.items.len(), 50);
        assert_eq!(first.label(), "Page 1 of 3");
        assert!(!first.has_prev());
        assert!(first.has_next());

        browser.step_page(1, 1);
        browser.step_page(2, 1);
        let last = browser.visible(&items);
        assert_eq!(last.items.len(), 20);
        assert_eq!(last.items[0].0, 100);
        assert_eq!(last.items[0].1.asset_id, "100");
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn pages_are_tracked_per_view() {
        let mut browser = InventoryBrowser::default();
        browser.step_page(1, 1);
        assert!(browser.switch_view(InventoryKind::AllItems));
        assert_eq!(browser.page(InventoryKind::AllItems), 1);
        browser.step_page(1, -1);
        assert_eq!(browser.page(InventoryKind::AllItems), 1);
        assert!(browser.switch_view(InventoryKind::MyInventory));
        assert_eq!(browser.page(InventoryKind::MyInventory), 2);
        assert!(!browser.switch_view(InventoryKind::MyInventory));
    }

    #[test]
    fn search_resets_only_active_page() {
        let mut browser = InventoryBrowser::default();
        browser.step_page(1, 2);
        browser.switch_view(InventoryKind::AllItems);
        browser.step_page(1, 1);
        browser.set_query("item 1".to_string());
        assert_eq!(browser.page(InventoryKind::AllItems), 1);
        assert_eq!(browser.page(InventoryKind::MyInventory), 3);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let items = make_items(10);
        let mut browser = InventoryBrowser::default();
        browser.step_page(1, 4);
        let slice = browser.visible(&items);
        assert_eq!(slice.page, 1);
        assert_eq!(slice.items.len(), 10);
        assert!(!slice.has_prev());

        // Stepping starts from what is on screen, not the stale stored page
        browser.step_page(slice.page, 1);
        assert_eq!(browser.page(InventoryKind::MyInventory), 2);
    }

    #[test]
    fn catalog_filter_applies_to_catalog_view_only() {
        let items = make_items(10);
        let mut browser = InventoryBrowser::default();
        browser.set_catalog_filter(CatalogFilter { min_value: Some(5.0), ..Default::default() });
        assert_eq!(browser.visible(&items).total_items, 10);

        browser.switch_view(InventoryKind::AllItems);
        assert_eq!(browser.visible(&items).total_items, 5);
    }

    #[test]
    fn catalog_filter_change_restarts_catalog_page() {
        let items = make_items(200);
        let mut browser = InventoryBrowser::default();
        browser.step_page(1, 1);
        browser.switch_view(InventoryKind::AllItems);
        browser.step_page(1, 2);
        assert_eq!(browser.visible(&items).page, 3);

        let filter = CatalogFilter { min_value: Some(10.0), ..Default::default() };
        browser.set_catalog_filter(filter.clone());
        assert_eq!(browser.page(InventoryKind::AllItems), 1);
        assert_eq!(browser.page(InventoryKind::MyInventory), 2);

        // Re-applying the same filter keeps the reader where they are
        browser.step_page(1, 1);
        browser.set_catalog_filter(filter);
        assert_eq!(browser.page(InventoryKind::AllItems), 2);
    }
}
