//! Category Bar Component
//!
//! One button per derived category; the active one is highlighted.

use leptos::prelude::*;

use crate::store::{use_menu_store, MenuStateStoreFields};

#[component]
pub fn CategoryBar() -> impl IntoView {
    let store = use_menu_store();

    view! {
        <div class="category-filter">
            <h2>"Categories"</h2>
            <div class="category-buttons">
                {move || store.categories().get().into_iter().map(|category| {
                    let label = category.to_string();
                    let selected = category.clone();
                    let is_active = move || store.selected_category().get() == category;
                    view! {
                        <button
                            class=move || if is_active() { "active" } else { "" }
                            on:click=move |_| *store.selected_category().write() = selected.clone()
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
