//! Catalog data source: one-shot loading of categories, subcategories and
//! products. Failures never reach the filtering core; a failed resource is
//! replaced with an empty list.

use async_trait::async_trait;
use contracts::domain::a001_catalog::{CatalogSnapshot, Category, Product, Subcategory};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataLoadError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

#[async_trait(?Send)]
pub trait CatalogDataSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>, DataLoadError>;
    async fn fetch_subcategories(&self) -> Result<Vec<Subcategory>, DataLoadError>;
    async fn fetch_products(&self) -> Result<Vec<Product>, DataLoadError>;
}

/// Reads the catalog from the backend `/api/catalog/*` endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpCatalogDataSource;

async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, DataLoadError> {
    let url = api_url(path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| DataLoadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(DataLoadError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| DataLoadError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl CatalogDataSource for HttpCatalogDataSource {
    async fn fetch_categories(&self) -> Result<Vec<Category>, DataLoadError> {
        fetch_json("/api/catalog/categories").await
    }

    async fn fetch_subcategories(&self) -> Result<Vec<Subcategory>, DataLoadError> {
        fetch_json("/api/catalog/subcategories").await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, DataLoadError> {
        fetch_json("/api/catalog/products").await
    }
}

/// Substitute an empty list for a failed resource
pub fn or_empty<T>(resource: &str, result: Result<Vec<T>, DataLoadError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Failed to load {}: {}", resource, e);
            Vec::new()
        }
    }
}

/// Fetch everything the catalog page needs. Never fails.
pub async fn load_catalog<S: CatalogDataSource + ?Sized>(source: &S) -> CatalogSnapshot {
    let categories = or_empty("categories", source.fetch_categories().await);
    let subcategories = or_empty("subcategories", source.fetch_subcategories().await);
    let products = or_empty("products", source.fetch_products().await);

    log::debug!(
        "Catalog loaded: {} categories, {} subcategories, {} products",
        categories.len(),
        subcategories.len(),
        products.len()
    );

    CatalogSnapshot {
        categories,
        subcategories,
        products,
    }
}

/// Ticket for an in-flight load. Only the latest ticket may apply its result,
/// so a superseded load never overwrites a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGeneration(u64);

impl LoadGeneration {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn is_current(&self, ticket: LoadGeneration) -> bool {
        *self == ticket
    }
}
