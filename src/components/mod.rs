//! UI Components
//!
//! Reusable Leptos components.

mod login_form;
mod catalog_view;
mod search_box;
mod entry_card;
mod loading_indicator;

pub use login_form::LoginForm;
pub use catalog_view::CatalogView;
pub use search_box::SearchBox;
pub use entry_card::EntryCard;
pub use loading_indicator::LoadingIndicator;
