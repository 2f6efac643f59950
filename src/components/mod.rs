//! UI Components
//!
//! Leptos components for the inventory browser and the trade board.

mod inventory_panel;
mod catalog_filters;
mod item_card;
mod pagination;
mod trade_row;
mod trade_slot;
mod trade_controls;

pub use inventory_panel::InventoryPanel;
pub use catalog_filters::CatalogFilters;
pub use item_card::ItemCard;
pub use pagination::Pagination;
pub use trade_row::TradeRowView;
pub use trade_slot::TradeSlot;
pub use trade_controls::TradeControls;
