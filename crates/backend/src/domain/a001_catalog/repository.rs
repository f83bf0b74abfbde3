use contracts::domain::a001_catalog::{CatalogSnapshot, Category, Product, Subcategory};

use crate::shared::data::catalog_store::get_catalog;

fn snapshot() -> anyhow::Result<&'static CatalogSnapshot> {
    get_catalog().ok_or_else(|| anyhow::anyhow!("catalog is not initialized"))
}

pub async fn list_categories() -> anyhow::Result<Vec<Category>> {
    Ok(snapshot()?.categories.clone())
}

pub async fn list_subcategories() -> anyhow::Result<Vec<Subcategory>> {
    Ok(snapshot()?.subcategories.clone())
}

pub async fn list_products() -> anyhow::Result<Vec<Product>> {
    Ok(snapshot()?.products.clone())
}
