//! Delete Confirm Button Component
//!
//! Two-step delete for an item card.

use leptos::prelude::*;

/// Prompt shown before an item is deleted
const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// "Delete" button that swaps in the prompt with Yes/No.
///
/// "Yes" closes the prompt and runs `on_confirm`; "No" closes it and
/// issues nothing.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    let answer = move |confirmed: bool| {
        set_asking.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button class="delete-btn" on:click=move |_| set_asking.set(true)>
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{DELETE_PROMPT}</span>
                <button class="confirm-btn" on:click=move |_| answer(true)>"Yes"</button>
                <button class="cancel-btn" on:click=move |_| answer(false)>"No"</button>
            </span>
        </Show>
    }
}
