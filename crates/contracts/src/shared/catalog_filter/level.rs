use serde::{Deserialize, Serialize};

use crate::domain::a001_catalog::{CategoryId, SubcategoryId};

/// Hierarchy levels, declared top to bottom; `Ord` follows the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterLevel {
    Segment,
    Gender,
    Category,
    Subcategory,
}

impl FilterLevel {
    pub const ALL: [FilterLevel; 4] = [
        FilterLevel::Segment,
        FilterLevel::Gender,
        FilterLevel::Category,
        FilterLevel::Subcategory,
    ];

    /// Levels strictly below this one
    pub fn below(self) -> impl Iterator<Item = FilterLevel> {
        Self::ALL.into_iter().filter(move |level| *level > self)
    }

    pub fn title(&self) -> &'static str {
        match self {
            FilterLevel::Segment => "Segment",
            FilterLevel::Gender => "Gender",
            FilterLevel::Category => "Category",
            FilterLevel::Subcategory => "Subcategory",
        }
    }
}

/// A value picked at one level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    Segment(String),
    Gender(String),
    Category(CategoryId),
    Subcategory(SubcategoryId),
}

impl Selection {
    pub fn level(&self) -> FilterLevel {
        match self {
            Selection::Segment(_) => FilterLevel::Segment,
            Selection::Gender(_) => FilterLevel::Gender,
            Selection::Category(_) => FilterLevel::Category,
            Selection::Subcategory(_) => FilterLevel::Subcategory,
        }
    }
}

/// One selectable entry for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub selection: Selection,
    pub label: String,
    pub active: bool,
}
