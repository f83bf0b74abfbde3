//! Option derivation: which values are legally selectable at each level
//! for a partial selection. Pure functions over [`CatalogIndex`].

use crate::domain::a001_catalog::{Category, CategoryId, Subcategory};
use crate::enums::is_gender_capable;

use super::index::CatalogIndex;

/// Distinct genders among the segment's categories, sorted.
/// Empty when the segment is not gender-capable, whatever the records carry.
pub fn genders_for_segment(index: &CatalogIndex, segment: &str) -> Vec<String> {
    if !is_gender_capable(segment) {
        return Vec::new();
    }
    index
        .raw_genders_in_segment(segment)
        .map(str::to_string)
        .collect()
}

/// Gender axis applies only with more than one distinct gender
pub fn has_gender_axis(index: &CatalogIndex, segment: &str) -> bool {
    genders_for_segment(index, segment).len() > 1
}

/// Canonical gender code if `gender` is selectable for `segment`
pub fn selectable_gender(index: &CatalogIndex, segment: &str, gender: &str) -> Option<String> {
    let genders = genders_for_segment(index, segment);
    if genders.len() < 2 {
        return None;
    }
    genders.into_iter().find(|g| g.eq_ignore_ascii_case(gender))
}

/// Categories of the segment, narrowed by gender only when the segment has a
/// gender axis and a gender is supplied. No segment means no categories.
pub fn categories_for_filter<'a>(
    index: &'a CatalogIndex,
    segment: Option<&str>,
    gender: Option<&str>,
) -> Vec<&'a Category> {
    let Some(segment) = segment else {
        return Vec::new();
    };
    match gender {
        Some(gender) if has_gender_axis(index, segment) => index
            .categories_in_segment_gender(segment, gender)
            .collect(),
        _ => index.categories_in_segment(segment).collect(),
    }
}

pub fn subcategories_for_filter(
    index: &CatalogIndex,
    category_id: Option<CategoryId>,
) -> Vec<&Subcategory> {
    match category_id {
        Some(id) => index.subcategories_of(id).collect(),
        None => Vec::new(),
    }
}
