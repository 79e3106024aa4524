//! Application Context
//!
//! Shared session state and API settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpItemsApi;
use crate::config::ApiConfig;
use crate::session::{BrowserStorage, Credentials, FlagStore, LoginError, Session};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext<S = BrowserStorage> {
    /// Whether the admin session is active - read
    pub signed_in: ReadSignal<bool>,
    /// Whether the admin session is active - write
    set_signed_in: WriteSignal<bool>,
    session: Session<S>,
    api_config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(api_config: ApiConfig) -> Self {
        Self::with_session(Session::new(BrowserStorage), api_config)
    }
}

impl<S: FlagStore> AppContext<S> {
    pub fn with_session(session: Session<S>, api_config: ApiConfig) -> Self {
        let (signed_in, set_signed_in) = signal(session.is_active());
        Self {
            signed_in,
            set_signed_in,
            session,
            api_config: StoredValue::new(api_config),
        }
    }

    /// Re-read the persisted flag
    pub fn refresh_session(&self) {
        self.set_signed_in.set(self.session.is_active());
    }

    pub fn sign_in(&self, credentials: &Credentials) -> Result<(), LoginError> {
        self.session.sign_in(credentials)?;
        self.set_signed_in.set(true);
        Ok(())
    }

    pub fn sign_out(&self) {
        self.session.sign_out();
        self.set_signed_in.set(false);
    }

    /// Client for the configured API
    pub fn api(&self) -> HttpItemsApi {
        self.api_config.with_value(HttpItemsApi::new)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStore, SESSION_KEY};

    fn admin() -> Credentials {
        Credentials {
            username: "super admin".to_string(),
            password: "super admin".to_string(),
        }
    }

    fn leaked_store() -> &'static MemoryStore {
        Box::leak(Box::default())
    }

    #[test]
    fn test_sign_in_reveals_admin_controls() {
        Owner::new().with(|| {
            let store = leaked_store();
            let ctx = AppContext::with_session(Session::new(store), ApiConfig::default());
            assert!(!ctx.signed_in.get_untracked());

            let wrong = Credentials {
                username: "admin".to_string(),
                password: "admin".to_string(),
            };
            assert_eq!(ctx.sign_in(&wrong), Err(LoginError::InvalidCredentials));
            assert!(!ctx.signed_in.get_untracked());

            ctx.sign_in(&admin()).unwrap();
            assert!(ctx.signed_in.get_untracked());
            assert_eq!(store.get(SESSION_KEY).as_deref(), Some("true"));

            ctx.sign_out();
            assert!(!ctx.signed_in.get_untracked());
            assert_eq!(store.get(SESSION_KEY), None);
        });
    }

    #[test]
    fn test_refresh_picks_up_flag_written_elsewhere() {
        Owner::new().with(|| {
            let store = leaked_store();
            let ctx = AppContext::with_session(Session::new(store), ApiConfig::default());

            store.set(SESSION_KEY, "true");
            assert!(!ctx.signed_in.get_untracked());
            ctx.refresh_session();
            assert!(ctx.signed_in.get_untracked());

            store.remove(SESSION_KEY);
            ctx.refresh_session();
            assert!(!ctx.signed_in.get_untracked());
        });
    }

    #[test]
    fn test_session_restored_at_startup() {
        Owner::new().with(|| {
            let store = leaked_store();
            store.set(SESSION_KEY, "true");

            let ctx = AppContext::with_session(Session::new(store), ApiConfig::default());
            assert!(ctx.signed_in.get_untracked());
        });
    }
}
