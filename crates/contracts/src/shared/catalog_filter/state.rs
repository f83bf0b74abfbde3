//! The mutable selection and its explicit transition table.
//!
//! Invariants kept by every transition and by [`FilterState::restore`]:
//! - a subcategory implies its parent category is selected;
//! - a category implies its parent segment is selected;
//! - a gender is set only when the segment has a gender axis;
//! - changing a level clears every level below it.

use crate::domain::a001_catalog::{CategoryId, SubcategoryId};

use super::derivation::selectable_gender;
use super::error::InvalidStateError;
use super::index::CatalogIndex;
use super::level::{FilterLevel, Selection};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    segment: Option<String>,
    gender: Option<String>,
    category_id: Option<CategoryId>,
    subcategory_id: Option<SubcategoryId>,
    search_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    SelectSegment(String),
    SelectGender(String),
    SelectCategory(CategoryId),
    SelectSubcategory(SubcategoryId),
    SetSearchText(String),
    /// Clear one level together with everything below it
    ClearLevel(FilterLevel),
    ClearAll,
}

impl From<Selection> for Transition {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Segment(code) => Transition::SelectSegment(code),
            Selection::Gender(code) => Transition::SelectGender(code),
            Selection::Category(id) => Transition::SelectCategory(id),
            Selection::Subcategory(id) => Transition::SelectSubcategory(id),
        }
    }
}

/// Unvalidated selection, e.g. parsed from the URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCandidate {
    pub segment: Option<String>,
    pub gender: Option<String>,
    pub category_id: Option<CategoryId>,
    pub subcategory_id: Option<SubcategoryId>,
    pub search_text: String,
}

/// Result of validating external state: what was kept and what was dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoredFilter {
    pub state: FilterState,
    pub dropped: Vec<InvalidStateError>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    pub fn subcategory_id(&self) -> Option<SubcategoryId> {
        self.subcategory_id
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_set(&self, level: FilterLevel) -> bool {
        match level {
            FilterLevel::Segment => self.segment.is_some(),
            FilterLevel::Gender => self.gender.is_some(),
            FilterLevel::Category => self.category_id.is_some(),
            FilterLevel::Subcategory => self.subcategory_id.is_some(),
        }
    }

    /// Nothing selected and no search text
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    /// Run one transition. Every transition is total: inputs that would break
    /// an invariant leave the state unchanged.
    pub fn apply(&self, index: &CatalogIndex, transition: &Transition) -> FilterState {
        let mut next = self.clone();
        match transition {
            Transition::SelectSegment(segment) => {
                let segment = index
                    .find_segment(segment)
                    .map(str::to_string)
                    .unwrap_or_else(|| segment.clone());
                // re-selecting the active segment deselects everything
                if self.segment.as_deref() == Some(segment.as_str()) {
                    return FilterState::default();
                }
                next.segment = Some(segment);
                next.clear_below(FilterLevel::Segment);
            }
            Transition::SelectGender(gender) => {
                let Some(gender) = self
                    .segment
                    .as_deref()
                    .and_then(|segment| selectable_gender(index, segment, gender))
                else {
                    return next;
                };
                next.gender = toggle(&self.gender, gender);
                next.clear_below(FilterLevel::Gender);
            }
            Transition::SelectCategory(id) => {
                let in_segment = index
                    .category(*id)
                    .map_or(false, |c| self.segment.as_deref() == Some(c.parent_segment.as_str()));
                if !in_segment {
                    return next;
                }
                next.category_id = toggle(&self.category_id, *id);
                next.clear_below(FilterLevel::Category);
            }
            Transition::SelectSubcategory(id) => {
                let in_category = index
                    .subcategory(*id)
                    .map_or(false, |sc| self.category_id == Some(sc.category_id));
                if !in_category {
                    return next;
                }
                next.subcategory_id = toggle(&self.subcategory_id, *id);
            }
            Transition::SetSearchText(text) => {
                next.search_text = text.clone();
            }
            Transition::ClearLevel(level) => {
                next.clear_level(*level);
                next.clear_below(*level);
            }
            Transition::ClearAll => return FilterState::default(),
        }
        next
    }

    fn clear_level(&mut self, level: FilterLevel) {
        match level {
            FilterLevel::Segment => self.segment = None,
            FilterLevel::Gender => self.gender = None,
            FilterLevel::Category => self.category_id = None,
            FilterLevel::Subcategory => self.subcategory_id = None,
        }
    }

    fn clear_below(&mut self, level: FilterLevel) {
        for lower in level.below() {
            self.clear_level(lower);
        }
    }

    /// Validate an external selection against the index. Fields that reference
    /// unknown entities or break the parent chain are dropped; a child given
    /// without its parent adopts the parent from the index.
    pub fn restore(index: &CatalogIndex, candidate: FilterCandidate) -> RestoredFilter {
        let mut dropped = Vec::new();
        let mut state = FilterState {
            search_text: candidate.search_text,
            ..FilterState::default()
        };

        if let Some(segment) = candidate.segment {
            match index.find_segment(&segment) {
                Some(code) => state.segment = Some(code.to_string()),
                None => dropped.push(InvalidStateError::UnknownSegment(segment)),
            }
        }

        if let Some(id) = candidate.category_id {
            match index.category(id) {
                None => dropped.push(InvalidStateError::UnknownCategory(id.value().to_string())),
                Some(category) => match state.segment.as_deref() {
                    Some(segment) if segment != category.parent_segment => {
                        dropped.push(InvalidStateError::CategoryOutsideSegment {
                            category: category.slug.clone(),
                            segment: segment.to_string(),
                        });
                    }
                    _ => {
                        state.segment = Some(category.parent_segment.clone());
                        state.category_id = Some(id);
                    }
                },
            }
        }

        if let Some(id) = candidate.subcategory_id {
            match index.subcategory(id) {
                None => dropped.push(InvalidStateError::UnknownSubcategory(id.value().to_string())),
                Some(subcategory) => {
                    let parent = index.category(subcategory.category_id);
                    let fits = match (state.category_id, parent) {
                        (Some(category_id), _) => category_id == subcategory.category_id,
                        (None, Some(parent)) => state
                            .segment
                            .as_deref()
                            .map_or(true, |segment| segment == parent.parent_segment),
                        (None, None) => false,
                    };
                    if fits {
                        if let Some(parent) = parent {
                            state.segment = Some(parent.parent_segment.clone());
                        }
                        state.category_id = Some(subcategory.category_id);
                        state.subcategory_id = Some(id);
                    } else {
                        let category = state
                            .category_id
                            .and_then(|id| index.category(id))
                            .map(|c| c.slug.clone())
                            .unwrap_or_else(|| subcategory.category_id.value().to_string());
                        dropped.push(InvalidStateError::SubcategoryOutsideCategory {
                            subcategory: subcategory.slug.clone(),
                            category,
                        });
                    }
                }
            }
        }

        // gender last: the segment may have been adopted from a category
        if let Some(gender) = candidate.gender {
            let selectable = state
                .segment
                .as_deref()
                .and_then(|segment| selectable_gender(index, segment, &gender));
            match selectable {
                Some(code) => state.gender = Some(code),
                None => dropped.push(InvalidStateError::GenderNotSelectable {
                    segment: state.segment.clone().unwrap_or_default(),
                    gender,
                }),
            }
        }

        RestoredFilter { state, dropped }
    }

    /// Re-check this state against a freshly loaded index
    pub fn revalidate(&self, index: &CatalogIndex) -> RestoredFilter {
        Self::restore(index, self.to_candidate())
    }

    pub fn to_candidate(&self) -> FilterCandidate {
        FilterCandidate {
            segment: self.segment.clone(),
            gender: self.gender.clone(),
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            search_text: self.search_text.clone(),
        }
    }
}

fn toggle<T: PartialEq + Clone>(current: &Option<T>, value: T) -> Option<T> {
    if current.as_ref() == Some(&value) {
        None
    } else {
        Some(value)
    }
}
