//! Item Card Component
//!
//! One grid cell: image, name, category badge, description, and admin actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{Item, ItemId};

#[component]
pub fn ItemCard(
    item: Item,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_delete: Callback<ItemId>,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id.clone();
    let edit_target = item.clone();

    view! {
        <div class="item-card">
            <div class="item-image">
                <img src=item.img_url.clone() alt=item.name.clone() />
            </div>
            <div class="item-content">
                <h3>{item.name.clone()}</h3>
                <span class="category-badge">{item.category_name.clone()}</span>
                <p>{item.description.clone().unwrap_or_default()}</p>
                <Show when=move || ctx.signed_in.get()>
                    <div class="item-actions">
                        <button
                            class="edit-btn"
                            on:click={
                                let edit_target = edit_target.clone();
                                move |_| on_edit.run(edit_target.clone())
                            }
                        >
                            "Edit"
                        </button>
                        <DeleteConfirmButton on_confirm={
                            let id = id.clone();
                            move |_: ()| on_delete.run(id.clone())
                        } />
                    </div>
                </Show>
            </div>
        </div>
    }
}
