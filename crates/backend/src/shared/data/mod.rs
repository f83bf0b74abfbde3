pub mod catalog_store;
