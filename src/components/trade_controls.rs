//! Trade Controls Component
//!
//! Add-row and submit buttons plus the status notice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{use_app_context, NoticeKind};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TradeControls() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (submitting, set_submitting) = signal(false);

    let add_row = move |_| {
        let id = store.board().write().add_row();
        web_sys::console::log_1(&format!("[BOARD] Added trade row {}", id).into());
    };

    let submit = move |_| {
        let trades = store.board().read_untracked().collect_trades();
        if trades.is_empty() {
            ctx.notify(NoticeKind::Info, "No items have been added to any trade.");
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            web_sys::console::log_1(&format!("[SUBMIT] Saving {} trades", trades.len()).into());
            match commands::save_trades(&ctx.api(), &trades).await {
                Ok(message) => {
                    if let Some(message) = message {
                        web_sys::console::log_1(&format!("[SUBMIT] {}", message).into());
                    }
                    ctx.notify(NoticeKind::Success, "Trades saved successfully!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[SUBMIT] Error saving trades: {}", err).into());
                    ctx.notify(NoticeKind::Error, "An error occurred while saving trades.");
                }
            }
            set_submitting.set(false);
        });
    };

    let notice_class = move || match ctx.notice.get().map(|n| n.kind) {
        Some(NoticeKind::Success) => "notice success",
        Some(NoticeKind::Error) => "notice error",
        _ => "notice",
    };

    view! {
        <div class="trade-controls">
            <button id="add-slot-btn" on:click=add_row>"Add Trade"</button>
            <button
                id="submit-trade"
                disabled=move || submitting.get()
                on:click=submit
            >
                {move || if submitting.get() { "Saving..." } else { "Submit Trades" }}
            </button>

            {move || ctx.notice.get().map(|notice| view! {
                <div class=notice_class role="status" on:click=move |_| ctx.dismiss()>
                    {notice.text}
                </div>
            })}
        </div>
    }
}
