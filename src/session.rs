//! Session Gate
//!
//! UI-only admin session. The credential check and the persisted flag are
//! visible to the end user; they gate affordances, not access.

use log::{info, warn};
use thiserror::Error;

/// Browser storage key holding the session flag
pub const SESSION_KEY: &str = "isLoggedIn";

const ADMIN_USERNAME: &str = "super admin";
const ADMIN_PASSWORD: &str = "super admin";

pub const LOGIN_HINT: &str = "Hint: Use \"super admin\" for both username and password";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid credentials. Use \"super admin\" for both username and password.")]
    InvalidCredentials,
}

/// Login form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Exact comparison, no trimming or case folding
    pub fn verify(&self) -> Result<(), LoginError> {
        if self.username == ADMIN_USERNAME && self.password == ADMIN_PASSWORD {
            Ok(())
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }
}

/// String key-value store backing the session flag
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

impl<T: FlagStore + ?Sized> FlagStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        (**self).remove(key)
    }
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl FlagStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// Session lifecycle over a [`FlagStore`]: issued by `sign_in`, ended by `sign_out`
#[derive(Debug, Clone, Copy, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: FlagStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn is_active(&self) -> bool {
        self.store.get(SESSION_KEY).as_deref() == Some("true")
    }

    /// Verify credentials and persist the flag on success
    pub fn sign_in(&self, credentials: &Credentials) -> Result<(), LoginError> {
        if let Err(err) = credentials.verify() {
            warn!("Rejected login for {:?}", credentials.username);
            return Err(err);
        }
        if !self.store.set(SESSION_KEY, "true") {
            warn!("Session flag could not be persisted");
        }
        info!("Admin session started");
        Ok(())
    }

    pub fn sign_out(&self) {
        if !self.store.remove(SESSION_KEY) {
            warn!("Session flag could not be cleared");
        }
        info!("Admin session ended");
    }
}

/// In-memory [`FlagStore`] for host tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl FlagStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .lock()
            .map(|mut entries| entries.insert(key.to_string(), value.to_string()))
            .is_ok()
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.lock().map(|mut entries| entries.remove(key)).is_ok()
    }
}
