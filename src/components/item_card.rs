//! Item Card Component
//!
//! One item in the inventory grid. Click fills the selected slot; drag drops onto any slot.

use leptos::prelude::*;
use leptos_dragdrop::make_on_mousedown;

use crate::context::{use_app_context, NoticeKind};
use crate::format::{format_number, item_image_url};
use crate::models::{InventoryKind, Item};
use crate::store::{store_pick_item, use_app_store};

#[component]
pub fn ItemCard(
    kind: InventoryKind,
    /// Position in the source collection
    index: usize,
    item: Item,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let on_mousedown = make_on_mousedown(dnd, (kind, index));

    let picked = item.clone();
    let on_click = move |_| {
        // The click that trails a drop is not a pick
        if dnd.click_suppressed() {
            return;
        }
        match store_pick_item(&store, &picked) {
            None => {
                web_sys::console::log_1(&"[BOARD] No destination slot selected.".into());
                ctx.notify(NoticeKind::Info, "Select a trade slot first.");
            }
            Some(Ok(())) => {
                web_sys::console::log_1(&format!("[BOARD] Filled slot with {}", picked.asset_id).into());
            }
            Some(Err(err)) => {
                web_sys::console::log_1(&format!("[BOARD] {}", err).into());
                ctx.notify(NoticeKind::Info, err.to_string());
            }
        }
    };

    let name = item.display_name().to_string();

    view! {
        <div
            class=move || if dnd.is_dragging((kind, index)) { "item-card dragging" } else { "item-card" }
            data-asset-id=item.asset_id.clone()
            on:mousedown=on_mousedown
            on:click=on_click
        >
            <img src=item_image_url(&item.asset_id) alt=name.clone() draggable="false" />
            <div class="name">{name}</div>
            <div class="rap">"RAP: " {format_number(item.rap)}</div>
            <div class="value">"Value: " {format_number(item.value)}</div>
        </div>
    }
}
