use axum::{http::StatusCode, Json};
use contracts::domain::a001_catalog::{Category, Product, Subcategory};

use crate::domain::a001_catalog;

fn internal_error(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("catalog request failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// GET /api/catalog/categories
pub async fn list_categories() -> Result<Json<Vec<Category>>, (StatusCode, String)> {
    a001_catalog::service::list_categories()
        .await
        .map(Json)
        .map_err(internal_error)
}

/// GET /api/catalog/subcategories
pub async fn list_subcategories() -> Result<Json<Vec<Subcategory>>, (StatusCode, String)> {
    a001_catalog::service::list_subcategories()
        .await
        .map(Json)
        .map_err(internal_error)
}

/// GET /api/catalog/products
pub async fn list_products() -> Result<Json<Vec<Product>>, (StatusCode, String)> {
    a001_catalog::service::list_products()
        .await
        .map(Json)
        .map_err(internal_error)
}
