//! Catalog Filters Component
//!
//! Value range, demand floor and premium-copies toggle for the All Items view.

use leptos::prelude::*;

use crate::config::DEMAND_LEVELS;
use crate::filter::CatalogFilter;
use crate::models::{parse_float, parse_int};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CatalogFilters() -> impl IntoView {
    let store = use_app_store();

    let update_filter = move |apply: &dyn Fn(&mut CatalogFilter)| {
        let field = store.browser();
        let mut browser = field.write();
        let mut filter = browser.catalog_filter.clone();
        apply(&mut filter);
        browser.set_catalog_filter(filter);
    };

    let current = move || store.browser().read().catalog_filter.clone();
    // Bounds are free-typed; seed them once instead of re-rendering mid-edit
    let initial = store.browser().read_untracked().catalog_filter.clone();
    let bound_text = |bound: Option<f64>| bound.map(|v| v.to_string()).unwrap_or_default();

    view! {
        <div id="request-filters" class="catalog-filters">
            <label>
                "Min value "
                <input
                    id="filter-min-value"
                    type="number"
                    min="0"
                    prop:value=bound_text(initial.min_value)
                    on:input=move |ev| {
                        let min = parse_float(&event_target_value(&ev));
                        update_filter(&|f: &mut CatalogFilter| f.min_value = min);
                    }
                />
            </label>
            <label>
                "Max value "
                <input
                    id="filter-max-value"
                    type="number"
                    min="0"
                    prop:value=bound_text(initial.max_value)
                    on:input=move |ev| {
                        let max = parse_float(&event_target_value(&ev));
                        update_filter(&|f: &mut CatalogFilter| f.max_value = max);
                    }
                />
            </label>
            <label>
                "Min demand "
                <select
                    id="filter-demand"
                    on:change=move |ev| {
                        let demand = parse_int(&event_target_value(&ev));
                        update_filter(&|f: &mut CatalogFilter| f.min_demand = demand);
                    }
                >
                    <option value="" selected=move || current().min_demand.is_none()>"Any"</option>
                    {DEMAND_LEVELS.iter().map(|(level, label)| {
                        let level = *level;
                        view! {
                            <option
                                value=level.to_string()
                                selected=move || current().min_demand == Some(level)
                            >
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <label class="checkbox">
                <input
                    id="filter-premium-copies"
                    type="checkbox"
                    prop:checked=move || current().hide_low_premium
                    on:change=move |ev| {
                        let hide = event_target_checked(&ev);
                        update_filter(&|f: &mut CatalogFilter| f.hide_low_premium = hide);
                    }
                />
                " Hide low premium copies"
            </label>
        </div>
    }
}
