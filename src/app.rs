//! Food Menu App
//!
//! Root component: shared context plus client-side routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{LoginPage, MenuView};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::MenuState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(ApiConfig::from_env()));
    provide_context(Store::new(MenuState::new()));

    view! {
        <Router>
            // Unknown paths fall through to the menu
            <Routes fallback=|| view! { <MenuView /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/") view=MenuView />
            </Routes>
        </Router>
    }
}
