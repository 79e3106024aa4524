//! API Configuration
//!
//! Base URL of the menu API, fixed at build time.

use log::info;

/// Build-time override, e.g. `MENU_API_URL=https://menu.example trunk build`
const API_URL_ENV: Option<&str> = option_env!("MENU_API_URL");

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::resolve(API_URL_ENV)
    }

    fn resolve(configured: Option<&str>) -> Self {
        match configured.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => {
                info!("Using API base URL {url}");
                Self::new(url)
            }
            None => {
                info!("MENU_API_URL not set, using default: {DEFAULT_API_URL}");
                Self::new(DEFAULT_API_URL)
            }
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
