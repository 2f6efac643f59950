//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{SlotClick, TradeBoard};
use crate::browser::InventoryBrowser;
use crate::models::{InventoryKind, Item};
use crate::trade::{FillError, SlotRef};

/// Page-lifetime state; rebuilt from the backend on every reload
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items the user owns
    pub my_inventory: Vec<Item>,
    /// Every tradable item
    pub all_items: Vec<Item>,
    pub board: TradeBoard,
    pub browser: InventoryBrowser,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace one collection after a fetch
pub fn store_set_items(store: &AppStore, kind: InventoryKind, items: Vec<Item>) {
    match kind {
        InventoryKind::MyInventory => *store.my_inventory().write() = items,
        InventoryKind::AllItems => *store.all_items().write() = items,
    }
}

/// Click on a slot; switches the inventory view when a slot gets selected
pub fn store_click_slot(store: &AppStore, slot: SlotRef) -> SlotClick {
    let outcome = store.board().write().click_slot(slot);
    if let SlotClick::Selected(view) = outcome {
        store.browser().write().switch_view(view);
    }
    outcome
}

/// Look up an item of the given collection by its index there
pub fn store_item(store: &AppStore, kind: InventoryKind, index: usize) -> Option<Item> {
    match kind {
        InventoryKind::MyInventory => store.my_inventory().read_untracked().get(index).cloned(),
        InventoryKind::AllItems => store.all_items().read_untracked().get(index).cloned(),
    }
}

/// Fill the selected slot with `item`; None when no slot is selected
pub fn store_pick_item(store: &AppStore, item: &Item) -> Option<Result<(), FillError>> {
    store.board().write().pick_item(item).map(|(_, result)| result)
}

pub fn store_drop_item(store: &AppStore, slot: SlotRef, item: &Item) -> Result<(), FillError> {
    store.board().write().drop_item(slot, item)
}
