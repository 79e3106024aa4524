//! Error Banner Component

use leptos::prelude::*;

use crate::store::{store_dismiss_error, use_menu_store, MenuStateStoreFields};

/// Dismissible banner for the last failed operation
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_menu_store();

    move || {
        store.error().get().map(|message| {
            view! {
                <div class="error">
                    {message}
                    <button class="error-close" on:click=move |_| store_dismiss_error(&store)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
