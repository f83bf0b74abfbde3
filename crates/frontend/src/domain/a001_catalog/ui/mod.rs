mod breadcrumb_bar;
mod filter_bar;
mod page;
mod product_grid;

pub use breadcrumb_bar::BreadcrumbBar;
pub use filter_bar::FilterBar;
pub use page::CatalogPage;
pub use product_grid::ProductGrid;
