//! Pagination Component

use leptos::prelude::*;

use crate::browser::PageSlice;
use crate::store::{use_app_store, AppStateStoreFields};

/// Prev / "Page X of Y" / next for the active view
#[component]
pub fn Pagination(page: Memo<PageSlice>) -> impl IntoView {
    let store = use_app_store();
    let step = move |delta: isize| {
        let shown = page.get_untracked().page;
        store.browser().write().step_page(shown, delta);
    };

    view! {
        <div class="pagination">
            <button
                id="prev-page-btn"
                disabled=move || !page.get().has_prev()
                on:click=move |_| step(-1)
            >
                "Prev"
            </button>
            <span id="page-info">{move || page.get().label()}</span>
            <button
                id="next-page-btn"
                disabled=move || !page.get().has_next()
                on:click=move |_| step(1)
            >
                "Next"
            </button>
        </div>
    }
}
