//! Menu Actions
//!
//! Request sequences behind the menu view. Every successful write is
//! followed by a full re-fetch; there is no optimistic merge.

use std::error::Error as _;

use log::{error, info};
use thiserror::Error;

use crate::api::{ApiError, ItemsApi};
use crate::models::{Item, ItemDraft, ItemId};

/// Failed menu operation. `Display` is the banner text shown to the user.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Failed to fetch items")]
    Fetch(#[source] ApiError),

    #[error("Failed to save item")]
    Save(#[source] ApiError),

    #[error("Failed to delete item")]
    Delete(#[source] ApiError),
}

impl MenuError {
    /// Send the underlying cause to the developer console
    pub fn report(&self) {
        match self.source() {
            Some(cause) => error!("{}: {}", self, cause),
            None => error!("{}", self),
        }
    }
}

/// Fetch the full item list
pub async fn load_items<A: ItemsApi + ?Sized>(api: &A) -> Result<Vec<Item>, MenuError> {
    let items = api.list_items().await.map_err(MenuError::Fetch)?;
    info!("Loaded {} items", items.len());
    Ok(items)
}

/// Create (no edit target) or update `editing`, then re-fetch
pub async fn save_item<A: ItemsApi + ?Sized>(
    api: &A,
    editing: Option<&ItemId>,
    draft: &ItemDraft,
) -> Result<Vec<Item>, MenuError> {
    match editing {
        Some(id) => {
            api.update_item(id, draft).await.map_err(MenuError::Save)?;
            info!("Updated item {}", id);
        }
        None => {
            api.create_item(draft).await.map_err(MenuError::Save)?;
            info!("Created item {:?}", draft.name);
        }
    }
    load_items(api).await
}

/// Delete `id`, then re-fetch
pub async fn delete_item<A: ItemsApi + ?Sized>(api: &A, id: &ItemId) -> Result<Vec<Item>, MenuError> {
    api.delete_item(id).await.map_err(MenuError::Delete)?;
    info!("Deleted item {}", id);
    load_items(api).await
}
