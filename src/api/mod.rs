//! Menu API Client
//!
//! REST bindings to the external item service, organized by resource.

mod items;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Item, ItemDraft, ItemId};

pub use items::HttpItemsApi;

/// Failure of a single API request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Item collection operations
///
/// Futures are not `Send`: the browser fetch backend is single-threaded.
#[async_trait(?Send)]
pub trait ItemsApi {
    /// GET /items
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// POST /items
    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<()>;

    /// PUT /items/{id}
    async fn update_item(&self, id: &ItemId, draft: &ItemDraft) -> ApiResult<()>;

    /// DELETE /items/{id}
    async fn delete_item(&self, id: &ItemId) -> ApiResult<()>;
}
