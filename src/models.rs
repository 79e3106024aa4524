//! Frontend Models
//!
//! Data structures matching the menu API payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item identifier assigned by the API (opaque string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Menu item (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Mongo-backed servers send `_id`
    #[serde(alias = "_id")]
    pub id: ItemId,
    pub category_name: String,
    pub name: String,
    pub img_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Add/edit form contents, also the create/update request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub category_name: String,
    pub name: String,
    pub img_url: String,
    pub description: String,
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            category_name: item.category_name.clone(),
            name: item.name.clone(),
            img_url: item.img_url.clone(),
            description: item.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_accepts_mongo_id() {
        let item: Item = serde_json::from_value(json!({
            "_id": "665f1c2a",
            "categoryName": "Pizza",
            "name": "Margherita",
            "imgUrl": "http://x/m.png"
        }))
        .unwrap();

        assert_eq!(item.id, ItemId::from("665f1c2a"));
        assert_eq!(item.category_name, "Pizza");
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = ItemDraft {
            category_name: "Drinks".to_string(),
            name: "Cola".to_string(),
            img_url: "http://x/y.png".to_string(),
            description: String::new(),
        };

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "categoryName": "Drinks",
                "name": "Cola",
                "imgUrl": "http://x/y.png",
                "description": ""
            })
        );
    }

    #[test]
    fn test_draft_from_item_fills_missing_description() {
        let item = Item {
            id: ItemId::from("7"),
            category_name: "Drinks".to_string(),
            name: "Tea".to_string(),
            img_url: "http://x/t.png".to_string(),
            description: None,
        };

        let draft = ItemDraft::from(&item);
        assert_eq!(draft.name, "Tea");
        assert_eq!(draft.description, "");
    }
}
