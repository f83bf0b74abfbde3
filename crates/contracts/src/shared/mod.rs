pub mod catalog_filter;
