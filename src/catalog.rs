//! Category Utilities
//!
//! Category derivation and filtering for the menu grid.

use std::collections::HashSet;
use std::fmt;

use crate::models::Item;

/// Category selection; `All` is the synthetic sentinel shown first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => item.category_name == *name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str("All"),
            Category::Named(name) => f.write_str(name),
        }
    }
}

/// `All` followed by each distinct category name in first-seen order
pub fn derive_categories(items: &[Item]) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut categories = vec![Category::All];
    for item in items {
        if seen.insert(item.category_name.as_str()) {
            categories.push(Category::Named(item.category_name.clone()));
        }
    }
    categories
}

/// Items visible under `selected`, in list order
pub fn filter_by_category(items: &[Item], selected: &Category) -> Vec<Item> {
    items.iter().filter(|item| selected.matches(item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    fn make_item(id: &str, category: &str) -> Item {
        Item {
            id: ItemId::from(id),
            category_name: category.to_string(),
            name: format!("Item {}", id),
            img_url: format!("http://img/{}.png", id),
            description: None,
        }
    }

    fn labels(categories: &[Category]) -> Vec<String> {
        categories.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_derive_categories_dedupes() {
        let items = vec![
            make_item("1", "A"),
            make_item("2", "B"),
            make_item("3", "A"),
            make_item("4", "B"),
        ];

        assert_eq!(labels(&derive_categories(&items)), vec!["All", "A", "B"]);
    }

    #[test]
    fn test_derive_categories_empty_list() {
        assert_eq!(derive_categories(&[]), vec![Category::All]);
    }

    #[test]
    fn test_filter_named_category() {
        let items = vec![make_item("1", "A"), make_item("2", "B"), make_item("3", "A")];

        let filtered = filter_by_category(&items, &Category::Named("A".to_string()));
        let ids: Vec<&str> = filtered.iter().map(|i| i.id.0.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let items = vec![make_item("1", "A"), make_item("2", "B")];

        assert_eq!(filter_by_category(&items, &Category::All), items);
    }

    #[test]
    fn test_filter_missing_category_is_empty() {
        let items = vec![make_item("1", "A")];

        assert!(filter_by_category(&items, &Category::Named("Desserts".to_string())).is_empty());
    }
}
