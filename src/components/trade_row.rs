//! Trade Row Component
//!
//! Offer and request sections of one trade, with totals and profit.

use leptos::prelude::*;

use crate::components::TradeSlot;
use crate::config::{REQUEST_WARNING_SLOTS, SLOTS_PER_SIDE};
use crate::format::{format_number, format_percent, format_profit};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::trade::{ProfitTone, RowTotals, Side, SlotRef, TradeRow};

#[component]
pub fn TradeRowView(row_id: u32) -> impl IntoView {
    let store = use_app_store();

    let row = Memo::new(move |_| store.board().read().row(row_id).cloned());
    let totals = Memo::new(move |_| row.get().as_ref().map(TradeRow::totals));
    let can_remove = move || store.board().read().rows.len() > 1;

    // Free-typed number fields; seed once so half-typed input like "1e" survives
    let initial = row.get_untracked();
    let input_text = |get: fn(&TradeRow) -> &String| initial.as_ref().map(|r| get(r).clone()).unwrap_or_default();
    let set_input = move |apply: fn(&mut TradeRow, String), value: String| {
        if let Some(r) = store.board().write().row_mut(row_id) {
            apply(r, value);
        }
    };
    let total = move |pick: fn(&RowTotals) -> f64| {
        move || totals.get().map(|t| format_number(pick(&t))).unwrap_or_else(|| "0".to_string())
    };
    let tone_color = move || totals.get().map_or(ProfitTone::Even, |t| t.tone).color();

    let slots = move |side: Side| {
        (0..SLOTS_PER_SIDE)
            .map(|index| {
                let slot = SlotRef { row: row_id, side, index };
                view! { <TradeSlot slot_ref=slot /> }
            })
            .collect_view()
    };

    // A pending "Remove?" is dropped once the row's items change under it
    let (confirming, set_confirming) = signal(false);
    let slot_contents = Memo::new(move |_| row.get().as_ref().map(TradeRow::items));
    Effect::new(move |_| {
        slot_contents.track();
        set_confirming.set(false);
    });

    let remove_row = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if store.board().write().remove_row(row_id) {
            web_sys::console::log_1(&format!("[BOARD] Removed trade row {}", row_id).into());
        }
    };

    view! {
        <div class="trade-row">
            <section class="offer-section">
                <h3>"Offer"</h3>
                <div class="slots">{slots(Side::Offer)}</div>
                <div class="section-totals">
                    <span>"Value: " <span class="offer-value-total">{total(|t| t.offer_value)}</span></span>
                    <span>"RAP: " <span class="offer-rap-total">{total(|t| t.offer_rap)}</span></span>
                </div>
                <label>
                    "Robux offer "
                    <input
                        class="robux-offer-input"
                        type="number"
                        min="0"
                        prop:value=input_text(|r| &r.robux_offer)
                        on:input=move |ev| set_input(|r, v| r.robux_offer = v, event_target_value(&ev))
                    />
                </label>
                <label>
                    "Amount to send "
                    <input
                        class="amount-to-send-input"
                        type="number"
                        min="1"
                        prop:value=input_text(|r| &r.amount_to_send)
                        on:input=move |ev| set_input(|r, v| r.amount_to_send = v, event_target_value(&ev))
                    />
                </label>
            </section>

            <section class="request-section">
                <h3>"Request"</h3>
                <div class="slots">{slots(Side::Request)}</div>
                <div class="section-totals">
                    <span>"Value: " <span class="request-value-total">{total(|t| t.request_value)}</span></span>
                    <span>"RAP: " <span class="request-rap-total">{total(|t| t.request_rap)}</span></span>
                </div>
                <label>
                    "Robux request "
                    <input
                        class="robux-request-input"
                        type="number"
                        min="0"
                        prop:value=input_text(|r| &r.robux_request)
                        on:input=move |ev| set_input(|r, v| r.robux_request = v, event_target_value(&ev))
                    />
                </label>
            </section>

            <div class="profit">
                "Profit: "
                <span class="profit-value" style:color=tone_color>
                    {move || totals.get().map(|t| format_profit(t.profit)).unwrap_or_else(|| "0".to_string())}
                </span>
                " ("
                <span class="profit-percent-value" style:color=tone_color>
                    {move || format_percent(totals.get().and_then(|t| t.profit_percent))}
                </span>
                ")"
            </div>

            <Show when=move || totals.get().is_some_and(|t| t.show_warning)>
                <div class="trade-warning">
                    {format!("Requesting {} or more items: this trade is likely to be declined.", REQUEST_WARNING_SLOTS)}
                </div>
            </Show>

            <Show when=move || can_remove() && !confirming.get()>
                <button
                    class="remove-row-btn"
                    title="Remove trade"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "×"
                </button>
            </Show>
            <Show when=move || can_remove() && confirming.get()>
                <span class="remove-confirm">
                    <span class="remove-confirm-text">"Remove?"</span>
                    <button class="confirm-btn" on:click=remove_row>"✓"</button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            </Show>
        </div>
    }
}
