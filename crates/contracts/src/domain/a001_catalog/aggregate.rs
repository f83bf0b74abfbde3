use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubcategoryId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl CategoryId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl SubcategoryId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ProductId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

// ============================================================================
// Category
// ============================================================================

/// Категория каталога. Принадлежит ровно одному сегменту.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,

    /// Код сегмента ("APPAREL", "BAGS", ...)
    #[serde(rename = "parentSegment")]
    pub parent_segment: String,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(rename = "supportsGenderVariants", default)]
    pub supports_gender_variants: bool,
}

// ============================================================================
// Subcategory
// ============================================================================

/// Подкатегория. Принадлежит ровно одной категории.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,

    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,

    pub name: String,
    pub slug: String,
}

// ============================================================================
// Product
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,

    #[serde(default)]
    pub price: f64,

    pub segment: String,

    /// Может отсутствовать: тогда берется пол категории, затем UNISEX
    #[serde(default)]
    pub gender: Option<String>,

    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,

    #[serde(rename = "subcategoryId", default)]
    pub subcategory_id: Option<SubcategoryId>,

    #[serde(default)]
    pub image: Option<String>,
}
