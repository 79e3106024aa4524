//! Login Page
//!
//! Admin login form. On success the session flag is set and the user is
//! sent back to the menu.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use log::warn;

use crate::context::use_app_context;
use crate::session::{Credentials, LOGIN_HINT};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let credentials = RwSignal::new(Credentials::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.sign_in(&credentials.get_untracked()) {
            Ok(()) => navigate("/", Default::default()),
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let go_back = move |_| {
        match web_sys::window().map(|w| w.history()) {
            Some(Ok(history)) => {
                if let Err(err) = history.back() {
                    warn!("history.back failed: {:?}", err);
                }
            }
            Some(Err(err)) => warn!("History unavailable: {:?}", err),
            None => warn!("No window to navigate back in"),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-form">
                <h2>"Admin Login"</h2>
                <p class="login-subtitle">"Login to manage menu items"</p>

                <form on:submit=on_login>
                    <div class="form-group">
                        <label>"Username:"</label>
                        <input
                            type="text"
                            name="username"
                            required=true
                            placeholder="Enter username"
                            prop:value=move || credentials.with(|c| c.username.clone())
                            on:input=move |ev| credentials.update(|c| c.username = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Password:"</label>
                        <input
                            type="password"
                            name="password"
                            required=true
                            placeholder="Enter password"
                            prop:value=move || credentials.with(|c| c.password.clone())
                            on:input=move |ev| credentials.update(|c| c.password = event_target_value(&ev))
                        />
                    </div>

                    {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}

                    <div class="form-actions">
                        <button type="submit" class="login-submit-btn">"Login"</button>
                        <button type="button" class="login-cancel-btn" on:click=go_back>
                            "Back to Menu"
                        </button>
                    </div>
                </form>

                <div class="login-hint">
                    <p>{LOGIN_HINT}</p>
                </div>
            </div>
        </div>
    }
}
