pub mod api;
pub mod navigation;
pub mod store;
pub mod ui;

pub use store::{use_catalog_store, CatalogStore};
