//! Item Endpoints
//!
//! `reqwest` implementation of [`ItemsApi`].

use async_trait::async_trait;
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response};

use super::{ApiError, ApiResult, ItemsApi};
use crate::config::ApiConfig;
use crate::models::{Item, ItemDraft, ItemId};

/// Characters escaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    client: Client,
    base_url: String,
}

impl HttpItemsApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: &ItemId) -> String {
        format!("{}/items/{}", self.base_url, utf8_percent_encode(&id.0, PATH_SEGMENT))
    }
}

fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let response = self.client.get(self.collection_url()).send().await?;
        let items: Vec<Item> = check_status(response)?.json().await?;
        debug!("GET /items returned {} items", items.len());
        Ok(items)
    }

    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<()> {
        let response = self.client.post(self.collection_url()).json(draft).send().await?;
        let body = check_status(response)?.text().await?;
        debug!("POST /items -> {}", body);
        Ok(())
    }

    async fn update_item(&self, id: &ItemId, draft: &ItemDraft) -> ApiResult<()> {
        let response = self.client.put(self.item_url(id)).json(draft).send().await?;
        check_status(response)?;
        debug!("PUT /items/{} ok", id);
        Ok(())
    }

    async fn delete_item(&self, id: &ItemId) -> ApiResult<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        check_status(response)?;
        debug!("DELETE /items/{} ok", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_use_configured_base() {
        let api = HttpItemsApi::new(&ApiConfig::new("https://menu.example.com/"));

        assert_eq!(api.collection_url(), "https://menu.example.com/items");
        assert_eq!(
            api.item_url(&ItemId::from("665f1c2a")),
            "https://menu.example.com/items/665f1c2a"
        );
    }

    #[test]
    fn test_item_url_escapes_id() {
        let api = HttpItemsApi::new(&ApiConfig::default());

        assert_eq!(
            api.item_url(&ItemId::from("a/b c")),
            "http://localhost:8000/items/a%2Fb%20c"
        );
    }
}
