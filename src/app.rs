//! Trade UI App
//!
//! Main application component: inventory browser on the left, trade rows on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::commands;
use crate::components::{InventoryPanel, TradeControls, TradeRowView};
use crate::config::ApiConfig;
use crate::context::{AppContext, NoticeKind};
use crate::models::InventoryKind;
use crate::store::{store_drop_item, store_item, store_set_items, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let api = ApiConfig::from_document();
    web_sys::console::log_1(&format!("[APP] Using API base {}", api.base).into());

    let notice = signal(None);
    let dnd = create_dnd_signals();
    let ctx = AppContext::new(api, notice, dnd);
    provide_context(ctx);

    // Dropping a dragged card fills the slot under the pointer
    bind_global_mouseup(dnd, move |(kind, index), slot| {
        let Some(item) = store_item(&store, kind, index) else {
            web_sys::console::warn_1(&format!("[DND] Dragged item {:?}#{} is gone", kind, index).into());
            return;
        };
        web_sys::console::log_1(&format!("[DND] Drop {} on {:?}", item.asset_id, slot).into());
        if let Err(err) = store_drop_item(&store, slot, &item) {
            web_sys::console::log_1(&format!("[DND] {}", err).into());
            ctx.notify(NoticeKind::Info, err.to_string());
        }
    });

    // Load both collections on mount, in parallel
    for kind in [InventoryKind::MyInventory, InventoryKind::AllItems] {
        spawn_local(async move {
            match commands::list_items(&ctx.api(), kind).await {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[FETCH] {}: {} items", kind.label(), items.len()).into());
                    store_set_items(&store, kind, items);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FETCH] Error fetching data for {}: {}", kind.label(), err).into());
                }
            }
        });
    }

    let row_ids = move || store.board().read().row_ids();

    view! {
        <div class="app-layout">
            // Left: inventory browser
            <InventoryPanel />

            // Right: trade rows and controls
            <main class="trade-panel">
                <div id="trade-container" class="trade-container">
                    <For
                        each=row_ids
                        key=|id| *id
                        children=move |id| view! { <TradeRowView row_id=id /> }
                    />
                </div>
                <TradeControls />
            </main>
        </div>
    }
}
