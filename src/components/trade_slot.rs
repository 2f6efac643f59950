//! Trade Slot Component
//!
//! A single offer/request slot. Clicking an empty slot selects it; clicking a filled one empties it.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter};

use crate::board::SlotClick;
use crate::context::use_app_context;
use crate::format::item_image_url;
use crate::store::{store_click_slot, use_app_store, AppStateStoreFields};
use crate::trade::{Side, SlotRef};

#[component]
pub fn TradeSlot(slot_ref: SlotRef) -> impl IntoView {
    let slot = slot_ref;
    let store = use_app_store();
    let dnd = use_app_context().dnd;

    let content = Memo::new(move |_| {
        store.board().read()
            .row(slot.row)
            .and_then(|row| row.slot(slot.side, slot.index).cloned())
    });
    let is_selected = move || store.board().read().selected == Some(slot);

    let slot_class = move || {
        let mut c = String::from("slot");
        if content.get().is_some() { c.push_str(" filled"); }
        if is_selected() { c.push_str(" selected-item"); }
        if dnd.is_over(slot) { c.push_str(" drop-target"); }
        c
    };

    let on_click = move |_| match store_click_slot(&store, slot) {
        SlotClick::Cleared => {
            web_sys::console::log_1(&format!("[BOARD] Cleared {:?}", slot).into());
        }
        SlotClick::Selected(view) => {
            web_sys::console::log_1(&format!("[BOARD] Selected {:?}, showing {}", slot, view.label()).into());
        }
    };

    let slot_type = match slot.side {
        Side::Offer => "offer",
        Side::Request => "request",
    };

    view! {
        <div
            class=slot_class
            data-slot-type=slot_type
            on:click=on_click
            on:mouseenter=make_on_target_mouseenter(dnd, slot)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            {move || content.get().map(|item| view! {
                <img src=item_image_url(&item.asset_id) alt=item.name.clone() title=item.name draggable="false" />
            })}
        </div>
    }
}
