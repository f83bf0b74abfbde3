//! Immutable lookup structure over the loaded categories and subcategories.
//!
//! Built once per load in a single pass; a fresh load replaces the whole
//! index. An empty index (pre-load state) answers every lookup with nothing.

use std::collections::{BTreeSet, HashMap};

use crate::domain::a001_catalog::{Category, CategoryId, Subcategory, SubcategoryId};

#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    categories: Vec<Category>,
    subcategories: Vec<Subcategory>,

    category_pos: HashMap<CategoryId, usize>,
    subcategory_pos: HashMap<SubcategoryId, usize>,

    // segment codes in first-appearance order
    segments: Vec<String>,

    by_segment: HashMap<String, Vec<usize>>,
    by_segment_gender: HashMap<(String, String), Vec<usize>>,
    raw_genders: HashMap<String, BTreeSet<String>>,
    subs_by_category: HashMap<CategoryId, Vec<usize>>,

    // lowercase slug -> positions
    category_slugs: HashMap<String, Vec<usize>>,
    subcategory_slugs: HashMap<String, Vec<usize>>,
}

impl CatalogIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index. Records with an id seen before are skipped, so the
    /// first occurrence wins. Segment and gender codes are stored upper-case.
    pub fn build(categories: Vec<Category>, subcategories: Vec<Subcategory>) -> Self {
        let mut index = Self::default();

        for mut category in categories {
            if index.category_pos.contains_key(&category.id) {
                continue;
            }
            category.parent_segment = category.parent_segment.to_ascii_uppercase();
            category.gender = category.gender.map(|g| g.to_ascii_uppercase());
            let pos = index.categories.len();
            let segment = category.parent_segment.clone();

            if !index.by_segment.contains_key(&segment) {
                index.segments.push(segment.clone());
            }
            index.by_segment.entry(segment.clone()).or_default().push(pos);

            if let Some(gender) = category.gender.as_ref().filter(|g| !g.is_empty()) {
                index
                    .by_segment_gender
                    .entry((segment.clone(), gender.clone()))
                    .or_default()
                    .push(pos);
                index
                    .raw_genders
                    .entry(segment)
                    .or_default()
                    .insert(gender.clone());
            }

            index
                .category_slugs
                .entry(category.slug.to_lowercase())
                .or_default()
                .push(pos);
            index.category_pos.insert(category.id, pos);
            index.categories.push(category);
        }

        for subcategory in subcategories {
            if index.subcategory_pos.contains_key(&subcategory.id) {
                continue;
            }
            let pos = index.subcategories.len();
            index
                .subs_by_category
                .entry(subcategory.category_id)
                .or_default()
                .push(pos);
            index
                .subcategory_slugs
                .entry(subcategory.slug.to_lowercase())
                .or_default()
                .push(pos);
            index.subcategory_pos.insert(subcategory.id, pos);
            index.subcategories.push(subcategory);
        }

        index
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn subcategories(&self) -> &[Subcategory] {
        &self.subcategories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.category_pos.get(&id).map(|&pos| &self.categories[pos])
    }

    pub fn subcategory(&self, id: SubcategoryId) -> Option<&Subcategory> {
        self.subcategory_pos
            .get(&id)
            .map(|&pos| &self.subcategories[pos])
    }

    /// Segment codes present among the categories, in first-appearance order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Canonical segment code matching `code` case-insensitively
    pub fn find_segment(&self, code: &str) -> Option<&str> {
        self.segments
            .iter()
            .find(|s| s.eq_ignore_ascii_case(code))
            .map(String::as_str)
    }

    pub fn categories_in_segment(&self, segment: &str) -> impl Iterator<Item = &Category> + '_ {
        Self::positions(self.by_segment.get(segment))
            .map(move |pos| &self.categories[pos])
    }

    pub fn categories_in_segment_gender(
        &self,
        segment: &str,
        gender: &str,
    ) -> impl Iterator<Item = &Category> + '_ {
        Self::positions(
            self.by_segment_gender
                .get(&(segment.to_string(), gender.to_string())),
        )
        .map(move |pos| &self.categories[pos])
    }

    /// Distinct gender values carried by the segment's categories, sorted.
    /// Capability of the segment is not checked here.
    pub fn raw_genders_in_segment(&self, segment: &str) -> impl Iterator<Item = &str> + '_ {
        self.raw_genders
            .get(segment)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn subcategories_of(&self, category_id: CategoryId) -> impl Iterator<Item = &Subcategory> + '_ {
        Self::positions(self.subs_by_category.get(&category_id))
            .map(move |pos| &self.subcategories[pos])
    }

    pub fn categories_by_slug(&self, slug: &str) -> impl Iterator<Item = &Category> + '_ {
        Self::positions(self.category_slugs.get(&slug.to_lowercase()))
            .map(move |pos| &self.categories[pos])
    }

    pub fn subcategories_by_slug(&self, slug: &str) -> impl Iterator<Item = &Subcategory> + '_ {
        Self::positions(self.subcategory_slugs.get(&slug.to_lowercase()))
            .map(move |pos| &self.subcategories[pos])
    }

    fn positions(bucket: Option<&Vec<usize>>) -> impl Iterator<Item = usize> + '_ {
        bucket.into_iter().flat_map(|v| v.iter().copied())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_empty_index_answers_nothing() {
        let index = CatalogIndex::empty();
        assert!(index.is_empty());
        assert!(index.segments().is_empty());
        assert_eq!(index.categories_in_segment("APPAREL").count(), 0);
        assert_eq!(index.subcategories_of(CategoryId(1)).count(), 0);
        assert!(index.category(CategoryId(1)).is_none());
        assert!(index.find_segment("apparel").is_none());
    }

    #[test]
    fn test_buckets() {
        let index = sample_index();
        assert_eq!(index.segments(), ["APPAREL", "BAGS", "ACCESSORIES", "FOOTWEAR"]);
        assert_eq!(index.categories_in_segment("BAGS").count(), 2);
        let mens: Vec<_> = index
            .categories_in_segment_gender("APPAREL", "MENS")
            .map(|c| c.id)
            .collect();
        assert_eq!(mens, vec![CategoryId(1)]);
        let subs: Vec<_> = index.subcategories_of(CategoryId(1)).map(|s| s.id).collect();
        assert_eq!(subs, vec![SubcategoryId(10), SubcategoryId(11)]);
    }

    #[test]
    fn test_lookups_are_case_insensitive() {
        let index = sample_index();
        assert_eq!(index.find_segment("apparel"), Some("APPAREL"));
        assert_eq!(index.categories_by_slug("CAPS").next().map(|c| c.id), Some(CategoryId(5)));
        assert_eq!(
            index.subcategories_by_slug("Beanies").next().map(|s| s.id),
            Some(SubcategoryId(14))
        );
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let index = CatalogIndex::build(
            vec![
                category(1, "first", "APPAREL", None),
                category(1, "second", "BAGS", None),
            ],
            vec![],
        );
        assert_eq!(index.categories().len(), 1);
        assert_eq!(index.category(CategoryId(1)).map(|c| c.slug.as_str()), Some("first"));
        assert!(index.find_segment("BAGS").is_none());
    }

    #[test]
    fn test_codes_are_normalized() {
        let index = CatalogIndex::build(
            vec![
                category(1, "mens-tops", "apparel", Some("mens")),
                category(2, "womens-tops", "Apparel", Some("womens")),
            ],
            vec![],
        );
        assert_eq!(index.segments(), ["APPAREL"]);
        assert_eq!(index.categories_in_segment("APPAREL").count(), 2);
        assert_eq!(index.raw_genders_in_segment("APPAREL").collect::<Vec<_>>(), ["MENS", "WOMENS"]);
        assert_eq!(
            index.category(CategoryId(1)).and_then(|c| c.gender.as_deref()),
            Some("MENS")
        );
    }
}
