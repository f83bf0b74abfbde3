use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 CATALOG (read-only, no server-side filtering)
        // ========================================
        .route(
            "/api/catalog/categories",
            get(handlers::a001_catalog::list_categories),
        )
        .route(
            "/api/catalog/subcategories",
            get(handlers::a001_catalog::list_subcategories),
        )
        .route(
            "/api/catalog/products",
            get(handlers::a001_catalog::list_products),
        )
}
