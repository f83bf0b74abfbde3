pub mod aggregate;

pub use aggregate::{Category, CategoryId, Product, ProductId, Subcategory, SubcategoryId};

use serde::{Deserialize, Serialize};

/// Полный набор данных каталога (как его отдает сервер и хранит клиент)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    #[serde(default)]
    pub products: Vec<Product>,
}
