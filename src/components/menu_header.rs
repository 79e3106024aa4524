//! Menu Header Component
//!
//! Title plus the session-dependent actions (add, logout, login).

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn MenuHeader(
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="header">
            <h1>"🍕 Food Menu"</h1>
            <div class="header-actions">
                <Show
                    when=move || ctx.signed_in.get()
                    fallback=|| view! { <a class="login-btn" href="/login">"Login"</a> }
                >
                    <button class="add-btn" on:click=move |_| on_add.run(())>
                        "+ Add Item"
                    </button>
                    <button class="logout-btn" on:click=move |_| ctx.sign_out()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
