//! Global Menu State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::MenuError;
use crate::catalog::{derive_categories, Category};
use crate::models::Item;

/// Menu state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Items from the last successful fetch
    pub items: Vec<Item>,
    /// `All` plus the distinct categories of `items`
    pub categories: Vec<Category>,
    pub selected_category: Category,
    /// Set while the item list is being fetched
    pub loading: bool,
    /// Dismissible banner text
    pub error: Option<String>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            categories: vec![Category::All],
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Fresh view state for a newly mounted menu; items stay until the fetch lands
pub fn store_begin_load(store: &MenuStore) {
    *store.loading().write() = true;
    *store.error().write() = None;
    *store.selected_category().write() = Category::All;
}

/// Replace the item list and recompute categories
pub fn store_set_items(store: &MenuStore, items: Vec<Item>) {
    *store.categories().write() = derive_categories(&items);
    *store.items().write() = items;
}

/// Log the failure and show its banner text
pub fn store_show_error(store: &MenuStore, err: &MenuError) {
    err.report();
    *store.error().write() = Some(err.to_string());
}

pub fn store_dismiss_error(store: &MenuStore) {
    *store.error().write() = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::ItemId;

    fn pizza() -> Item {
        Item {
            id: ItemId::from("1"),
            category_name: "Pizza".to_string(),
            name: "Margherita".to_string(),
            img_url: "http://x/m.png".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_remount_clears_stale_error_and_selection() {
        Owner::new().with(|| {
            let store = Store::new(MenuState::new());
            store_show_error(&store, &MenuError::Fetch(ApiError::Status(503)));
            *store.selected_category().write() = Category::Named("Pizza".to_string());

            store_begin_load(&store);
            assert!(store.loading().get_untracked());
            store_set_items(&store, vec![pizza()]);

            assert_eq!(store.error().get_untracked(), None);
            assert_eq!(store.selected_category().get_untracked(), Category::All);
            assert_eq!(
                store.categories().get_untracked(),
                vec![Category::All, Category::Named("Pizza".to_string())]
            );
        });
    }

    #[test]
    fn test_show_and_dismiss_error() {
        Owner::new().with(|| {
            let store = Store::new(MenuState::new());

            store_show_error(&store, &MenuError::Save(ApiError::Status(500)));
            assert_eq!(store.error().get_untracked().as_deref(), Some("Failed to save item"));

            store_dismiss_error(&store);
            assert_eq!(store.error().get_untracked(), None);
        });
    }
}
