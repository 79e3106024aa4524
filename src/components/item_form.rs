//! Item Form Component
//!
//! Overlay form for adding a new item or editing an existing one.

use leptos::prelude::*;

use crate::models::ItemDraft;

/// Add/edit form bound to `draft`
#[component]
pub fn ItemForm(
    draft: RwSignal<ItemDraft>,
    #[prop(into)] is_editing: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="form-overlay">
            <div class="form-container">
                <h2>{move || if is_editing.get() { "Edit Item" } else { "Add New Item" }}</h2>
                <form on:submit=submit>
                    <div class="form-group">
                        <label>"Category:"</label>
                        <input
                            type="text"
                            name="categoryName"
                            required=true
                            prop:value=move || draft.with(|d| d.category_name.clone())
                            on:input=move |ev| draft.update(|d| d.category_name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Name:"</label>
                        <input
                            type="text"
                            name="name"
                            required=true
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Image URL:"</label>
                        <input
                            type="url"
                            name="imgUrl"
                            required=true
                            prop:value=move || draft.with(|d| d.img_url.clone())
                            on:input=move |ev| draft.update(|d| d.img_url = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Description:"</label>
                        <textarea
                            name="description"
                            rows="3"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="save-btn">
                            {move || if is_editing.get() { "Update Item" } else { "Add Item" }}
                        </button>
                        <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
