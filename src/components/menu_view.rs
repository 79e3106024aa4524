//! Menu View
//!
//! Item grid with category filter and the admin add/edit/delete flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, MenuError};
use crate::catalog::filter_by_category;
use crate::components::{CategoryBar, ErrorBanner, ItemCard, ItemForm, MenuHeader};
use crate::context::use_app_context;
use crate::models::{Item, ItemDraft, ItemId};
use crate::store::{store_begin_load, store_set_items, store_show_error, use_menu_store, MenuStateStoreFields};

#[component]
pub fn MenuView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_menu_store();

    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<Item>>(None);
    let draft = RwSignal::new(ItemDraft::default());

    // The login page may have changed the flag
    ctx.refresh_session();

    // Load items on mount
    Effect::new(move |_| {
        store_begin_load(&store);
        spawn_local(async move {
            match actions::load_items(&ctx.api()).await {
                Ok(items) => store_set_items(&store, items),
                Err(err) => store_show_error(&store, &err),
            }
            *store.loading().write() = false;
        });
    });

    let visible_items = Memo::new(move |_| {
        filter_by_category(&store.items().get(), &store.selected_category().get())
    });

    let reset_form = move || {
        set_show_form.set(false);
        set_editing.set(None);
        draft.set(ItemDraft::default());
    };

    let open_add = move |_: ()| {
        set_editing.set(None);
        draft.set(ItemDraft::default());
        set_show_form.set(true);
    };

    let open_edit = move |item: Item| {
        draft.set(ItemDraft::from(&item));
        set_editing.set(Some(item));
        set_show_form.set(true);
    };

    let submit = move |_: ()| {
        let target = editing.get_untracked().map(|item| item.id);
        let payload = draft.get_untracked();
        spawn_local(async move {
            match actions::save_item(&ctx.api(), target.as_ref(), &payload).await {
                Ok(items) => {
                    reset_form();
                    store_set_items(&store, items);
                }
                // Keep the form open so the user can retry
                Err(err @ MenuError::Save(_)) => store_show_error(&store, &err),
                Err(err) => {
                    reset_form();
                    store_show_error(&store, &err);
                }
            }
        });
    };

    let remove = move |id: ItemId| {
        spawn_local(async move {
            match actions::delete_item(&ctx.api(), &id).await {
                Ok(items) => store_set_items(&store, items),
                Err(err) => store_show_error(&store, &err),
            }
        });
    };

    view! {
        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <div class="app">
                <MenuHeader on_add=open_add />
                <ErrorBanner />

                <Show when=move || show_form.get()>
                    <ItemForm
                        draft=draft
                        is_editing=Signal::derive(move || editing.get().is_some())
                        on_submit=submit
                        on_cancel=move |_: ()| reset_form()
                    />
                </Show>

                <CategoryBar />

                <div class="items-container">
                    <div class="items-grid">
                        {move || {
                            let items = visible_items.get();
                            if items.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>{format!("No items found in {} category", store.selected_category().get())}</p>
                                    </div>
                                }.into_any()
                            } else {
                                items.into_iter().map(|item| view! {
                                    <ItemCard item=item on_edit=open_edit on_delete=remove />
                                }).collect_view().into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
