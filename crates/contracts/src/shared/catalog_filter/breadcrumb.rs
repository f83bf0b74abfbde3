use serde::{Deserialize, Serialize};

use crate::enums::{gender_label, segment_label};

use super::index::CatalogIndex;
use super::level::FilterLevel;
use super::state::{FilterState, Transition};

/// One active level, removable on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbChip {
    pub level: FilterLevel,
    pub label: String,
}

impl BreadcrumbChip {
    /// Clears this level and everything below it
    pub fn clear(&self) -> Transition {
        Transition::ClearLevel(self.level)
    }
}

pub fn build_breadcrumb(index: &CatalogIndex, state: &FilterState) -> Vec<BreadcrumbChip> {
    FilterLevel::ALL
        .into_iter()
        .filter_map(|level| {
            let label = match level {
                FilterLevel::Segment => state.segment().map(segment_label),
                FilterLevel::Gender => state.gender().map(gender_label),
                FilterLevel::Category => state.category_id().map(|id| {
                    index
                        .category(id)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| format!("#{}", id.value()))
                }),
                FilterLevel::Subcategory => state.subcategory_id().map(|id| {
                    index
                        .subcategory(id)
                        .map(|s| s.name.clone())
                        .unwrap_or_else(|| format!("#{}", id.value()))
                }),
            }?;
            Some(BreadcrumbChip { level, label })
        })
        .collect()
}
