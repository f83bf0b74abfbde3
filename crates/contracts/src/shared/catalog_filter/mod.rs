//! Hierarchical catalog filtering: segment > gender > category > subcategory
//! plus free-text search.

pub mod breadcrumb;
pub mod derivation;
pub mod error;
pub mod index;
pub mod level;
pub mod product_filter;
pub mod state;
pub mod url_sync;
pub mod view;

pub use breadcrumb::{build_breadcrumb, BreadcrumbChip};
pub use derivation::{categories_for_filter, genders_for_segment, subcategories_for_filter};
pub use error::InvalidStateError;
pub use index::CatalogIndex;
pub use level::{FilterLevel, FilterOption, Selection};
pub use product_filter::{filter_products, matches, resolved_gender};
pub use state::{FilterCandidate, FilterState, RestoredFilter, Transition};
pub use url_sync::{read_state, to_query_map, write_param, write_state, QueryMap, QueryParam};
pub use view::{available_options, visible_products};
