//! UI Components
//!
//! Leptos components for the menu and login pages.

mod category_bar;
mod delete_confirm_button;
mod error_banner;
mod item_card;
mod item_form;
mod login_page;
mod menu_header;
mod menu_view;

pub use category_bar::CategoryBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use item_card::ItemCard;
pub use item_form::ItemForm;
pub use login_page::LoginPage;
pub use menu_header::MenuHeader;
pub use menu_view::MenuView;
