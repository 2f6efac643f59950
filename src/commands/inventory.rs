//! Inventory Commands
//!
//! Fetches the user's inventory and the full item catalog.

use crate::config::ApiConfig;
use crate::models::{InventoryKind, Item};
use super::get_json;

fn endpoint(kind: InventoryKind) -> &'static str {
    match kind {
        InventoryKind::MyInventory => "my_inventory",
        InventoryKind::AllItems => "all_items",
    }
}

pub async fn list_items(api: &ApiConfig, kind: InventoryKind) -> Result<Vec<Item>, String> {
    get_json(&api.endpoint(endpoint(kind))).await
}
