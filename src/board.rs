//! Trade Board
//!
//! All trade rows plus the slot currently waiting for an item.

use crate::models::{InventoryKind, Item, TradeSubmission};
use crate::trade::{FillError, Side, SlotItem, SlotRef, TradeRow};

/// Result of clicking a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClick {
    /// A filled slot was emptied
    Cleared,
    /// An empty slot is now selected; show this collection
    Selected(InventoryKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeBoard {
    pub rows: Vec<TradeRow>,
    pub selected: Option<SlotRef>,
    next_row_id: u32,
}

impl Default for TradeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TradeBoard {
    pub fn new() -> Self {
        Self {
            rows: vec![TradeRow::new(1)],
            selected: None,
            next_row_id: 2,
        }
    }

    pub fn row(&self, id: u32) -> Option<&TradeRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn row_mut(&mut self, id: u32) -> Option<&mut TradeRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    pub fn row_ids(&self) -> Vec<u32> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn is_filled(&self, slot: SlotRef) -> bool {
        self.row(slot.row)
            .is_some_and(|row| row.is_filled(slot.side, slot.index))
    }

    /// Empty a filled slot, or select an empty one
    pub fn click_slot(&mut self, slot: SlotRef) -> SlotClick {
        if self.is_filled(slot) {
            if let Some(row) = self.row_mut(slot.row) {
                row.clear_slot(slot.side, slot.index);
            }
            if self.selected == Some(slot) {
                self.selected = None;
            }
            return SlotClick::Cleared;
        }
        self.selected = Some(slot);
        let view = match slot.side {
            Side::Offer => InventoryKind::MyInventory,
            Side::Request => InventoryKind::AllItems,
        };
        SlotClick::Selected(view)
    }

    /// Put `item` in the selected slot. The selection is consumed either way.
    /// Returns the slot that was targeted, or None when nothing was selected.
    pub fn pick_item(&mut self, item: &Item) -> Option<(SlotRef, Result<(), FillError>)> {
        let slot = self.selected.take()?;
        Some((slot, self.fill(slot, item)))
    }

    /// Drag-and-drop straight onto `slot`
    pub fn drop_item(&mut self, slot: SlotRef, item: &Item) -> Result<(), FillError> {
        if self.selected == Some(slot) {
            self.selected = None;
        }
        self.fill(slot, item)
    }

    fn fill(&mut self, slot: SlotRef, item: &Item) -> Result<(), FillError> {
        let row = self.row_mut(slot.row).ok_or(FillError::NoSuchSlot)?;
        row.fill_slot(slot.side, slot.index, SlotItem::from(item))
    }

    /// Append a blank row, returning its id
    pub fn add_row(&mut self) -> u32 {
        let id = self.next_row_id;
        self.next_row_id += 1;
        self.rows.push(TradeRow::new(id));
        id
    }

    /// The last remaining row is kept
    pub fn remove_row(&mut self, id: u32) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        if self.selected.is_some_and(|s| s.row == id) {
            self.selected = None;
        }
        self.rows.len() != before
    }

    /// Every row with something entered, in display order
    pub fn collect_trades(&self) -> Vec<TradeSubmission> {
        self.rows.iter().filter_map(TradeRow::submission).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(asset_id: &str, value: f64, uaid: Option<&str>) -> Item {
        Item {
            asset_id: asset_id.to_string(),
            name: Some(format!("Item {}", asset_id)),
            value,
            rap: value,
            user_asset_id: uaid.map(str::to_string),
            demand: None,
            premium_copies: None,
        }
    }

    fn offer(row: u32, index: usize) -> SlotRef {
        SlotRef { row, side: Side::Offer, index }
    }

    fn request(row: u32, index: usize) -> SlotRef {
        SlotRef { row, side: Side::Request, index }
    }

    #[test]
    fn selecting_slot_picks_matching_collection() {
        let mut board = TradeBoard::new();
        assert_eq!(board.click_slot(offer(1, 0)), SlotClick::Selected(InventoryKind::MyInventory));
        assert_eq!(board.selected, Some(offer(1, 0)));
        assert_eq!(board.click_slot(request(1, 2)), SlotClick::Selected(InventoryKind::AllItems));
        assert_eq!(board.selected, Some(request(1, 2)));
    }

    #[test]
    fn pick_without_selection_does_nothing() {
        let mut board = TradeBoard::new();
        assert!(board.pick_item(&make_item("1", 10.0, None)).is_none());
        assert!(board.collect_trades().is_empty());
    }

    #[test]
    fn pick_fills_selected_slot_and_clears_selection() {
        let mut board = TradeBoard::new();
        board.click_slot(offer(1, 1));
        let (slot, result) = board.pick_item(&make_item("9", 10.0, Some("u9"))).unwrap();
        assert_eq!(slot, offer(1, 1));
        assert!(result.is_ok());
        assert!(board.is_filled(offer(1, 1)));
        assert_eq!(board.selected, None);
    }

    #[test]
    fn duplicate_pick_still_consumes_selection() {
        let mut board = TradeBoard::new();
        board.click_slot(offer(1, 0));
        board.pick_item(&make_item("9", 10.0, Some("u9")));
        board.click_slot(offer(1, 1));
        let (_, result) = board.pick_item(&make_item("9", 10.0, Some("u9"))).unwrap();
        assert_eq!(result, Err(FillError::AlreadyInTrade));
        assert_eq!(board.selected, None);
        assert!(!board.is_filled(offer(1, 1)));
    }

    #[test]
    fn same_copy_allowed_in_different_rows() {
        let mut board = TradeBoard::new();
        let second = board.add_row();
        let item = make_item("9", 10.0, Some("u9"));
        assert!(board.drop_item(offer(1, 0), &item).is_ok());
        assert!(board.drop_item(offer(second, 0), &item).is_ok());
    }

    #[test]
    fn clicking_filled_slot_clears_it() {
        let mut board = TradeBoard::new();
        board.drop_item(request(1, 0), &make_item("3", 50.0, None)).unwrap();
        board.click_slot(offer(1, 0));
        assert_eq!(board.click_slot(request(1, 0)), SlotClick::Cleared);
        assert!(!board.is_filled(request(1, 0)));
        // Selection elsewhere survives
        assert_eq!(board.selected, Some(offer(1, 0)));
    }

    #[test]
    fn drop_on_selected_slot_clears_selection() {
        let mut board = TradeBoard::new();
        board.click_slot(request(1, 3));
        board.drop_item(request(1, 3), &make_item("3", 50.0, None)).unwrap();
        assert_eq!(board.selected, None);
    }

    #[test]
    fn rows_get_fresh_ids_and_last_row_stays() {
        let mut board = TradeBoard::new();
        let second = board.add_row();
        let third = board.add_row();
        assert_eq!(board.row_ids(), vec![1, second, third]);
        assert!(board.remove_row(second));
        assert!(board.remove_row(1));
        assert!(!board.remove_row(third));
        assert_eq!(board.row_ids(), vec![third]);
        assert_eq!(board.add_row(), third + 1);
    }

    #[test]
    fn collect_skips_empty_rows() {
        let mut board = TradeBoard::new();
        let second = board.add_row();
        let third = board.add_row();
        board.drop_item(offer(second, 0), &make_item("100", 10.0, Some("a"))).unwrap();
        board.row_mut(third).unwrap().robux_offer = "40".to_string();

        let trades = board.collect_trades();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].offer, vec!["100".to_string()]);
        assert_eq!(trades[1].robux_offer, 40);
        assert_eq!(trades[1].amount, 100);
    }
}
