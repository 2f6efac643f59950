//! Inventory Panel Component
//!
//! View tabs, search box, catalog filters, item grid and pagination.

use leptos::prelude::*;

use crate::browser::PageSlice;
use crate::components::{CatalogFilters, ItemCard, Pagination};
use crate::models::InventoryKind;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryPanel() -> impl IntoView {
    let store = use_app_store();

    let active_view = Memo::new(move |_| store.browser().read().view);

    // Current page of whichever collection is showing
    let page = Memo::new(move |_| -> PageSlice {
        let field = store.browser();
        let browser = field.read();
        match browser.view {
            InventoryKind::MyInventory => browser.visible(&store.my_inventory().read()),
            InventoryKind::AllItems => browser.visible(&store.all_items().read()),
        }
    });

    let switch_to = move |kind: InventoryKind| {
        if store.browser().write().switch_view(kind) {
            web_sys::console::log_1(&format!("[APP] Switched inventory view to {}", kind.label()).into());
        }
    };

    let tab = move |kind: InventoryKind, id: &'static str| {
        view! {
            <button
                id=id
                class=move || if active_view.get() == kind { "inventory-tab active" } else { "inventory-tab" }
                on:click=move |_| switch_to(kind)
            >
                {kind.label()}
            </button>
        }
    };

    let cards = move || {
        let kind = active_view.get();
        page.get()
            .items
            .into_iter()
            .map(|(index, item)| (kind, index, item))
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="inventory-panel">
            <div class="inventory-tabs">
                {tab(InventoryKind::MyInventory, "show-my-inventory-btn")}
                {tab(InventoryKind::AllItems, "show-all-items-btn")}
            </div>

            <input
                id="search-input"
                type="text"
                placeholder="Search items..."
                autocomplete="off"
                prop:value=move || store.browser().read().query.clone()
                on:input=move |ev| store.browser().write().set_query(event_target_value(&ev))
            />

            <Show when=move || active_view.get() == InventoryKind::AllItems>
                <CatalogFilters />
            </Show>

            <div class="inventory-grid">
                <For
                    each=cards
                    key=|(kind, index, item)| (*kind, *index, item.asset_id.clone())
                    children=move |(kind, index, item)| view! { <ItemCard kind=kind index=index item=item /> }
                />
            </div>

            <Pagination page=page />
        </aside>
    }
}
