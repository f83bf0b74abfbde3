//! Mapping between [`FilterState`] and query-string parameters.
//!
//! Categories and subcategories travel as slugs, segments and genders as
//! their codes, search text as `q`. Parameters not owned by the catalog are
//! left untouched on write.

use std::collections::BTreeMap;

use crate::domain::a001_catalog::{CategoryId, Subcategory, SubcategoryId};

use super::error::InvalidStateError;
use super::index::CatalogIndex;
use super::state::{FilterCandidate, FilterState, RestoredFilter};

pub type QueryMap = BTreeMap<String, String>;

/// Placeholder value the UI uses for "no filter at this level"
pub const ALL_VALUE: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryParam {
    Segment,
    Gender,
    Category,
    Subcategory,
    Search,
}

impl QueryParam {
    pub const ALL: [QueryParam; 5] = [
        QueryParam::Segment,
        QueryParam::Gender,
        QueryParam::Category,
        QueryParam::Subcategory,
        QueryParam::Search,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QueryParam::Segment => "segment",
            QueryParam::Gender => "gender",
            QueryParam::Category => "category",
            QueryParam::Subcategory => "subcategory",
            QueryParam::Search => "q",
        }
    }

    fn is_absent(&self, value: &str) -> bool {
        value.is_empty() || (*self != QueryParam::Search && value.eq_ignore_ascii_case(ALL_VALUE))
    }
}

/// Set or delete one parameter. Writing the category always deletes the
/// subcategory as well.
pub fn write_param(query: &mut QueryMap, param: QueryParam, value: Option<&str>) {
    match value.filter(|v| !param.is_absent(v)) {
        Some(value) => {
            query.insert(param.key().to_string(), value.to_string());
        }
        None => {
            query.remove(param.key());
        }
    }
    if param == QueryParam::Category {
        query.remove(QueryParam::Subcategory.key());
    }
}

/// Write every catalog parameter for `state`, top level first
pub fn write_state(query: &mut QueryMap, index: &CatalogIndex, state: &FilterState) {
    let category_slug = state
        .category_id()
        .and_then(|id| index.category(id))
        .map(|c| c.slug.as_str());
    let subcategory_slug = state
        .subcategory_id()
        .and_then(|id| index.subcategory(id))
        .map(|s| s.slug.as_str());

    write_param(query, QueryParam::Segment, state.segment());
    write_param(query, QueryParam::Gender, state.gender());
    write_param(query, QueryParam::Category, category_slug);
    write_param(query, QueryParam::Subcategory, subcategory_slug);
    write_param(query, QueryParam::Search, Some(state.search_text()));
}

pub fn to_query_map(index: &CatalogIndex, state: &FilterState) -> QueryMap {
    let mut query = QueryMap::new();
    write_state(&mut query, index, state);
    query
}

/// Parse the catalog parameters and validate them as restored state.
/// The result replaces the current state; it is never merged into it.
pub fn read_state(query: &QueryMap, index: &CatalogIndex) -> RestoredFilter {
    let value = |param: QueryParam| {
        query
            .get(param.key())
            .map(String::as_str)
            .filter(|v| !param.is_absent(v))
    };
    let mut dropped = Vec::new();

    let segment = value(QueryParam::Segment);

    let category_id = value(QueryParam::Category).and_then(|slug| {
        let found = resolve_category(index, slug, segment);
        if found.is_none() {
            dropped.push(InvalidStateError::UnknownCategory(slug.to_string()));
        }
        found
    });

    let subcategory_id = value(QueryParam::Subcategory).and_then(|slug| {
        let found = resolve_subcategory(index, slug, category_id);
        if found.is_none() {
            dropped.push(InvalidStateError::UnknownSubcategory(slug.to_string()));
        }
        found
    });

    let candidate = FilterCandidate {
        segment: segment.map(str::to_string),
        gender: value(QueryParam::Gender).map(str::to_string),
        category_id,
        subcategory_id,
        search_text: query
            .get(QueryParam::Search.key())
            .cloned()
            .unwrap_or_default(),
    };

    let mut restored = FilterState::restore(index, candidate);
    dropped.append(&mut restored.dropped);
    restored.dropped = dropped;
    restored
}

// Slugs may repeat across segments; prefer the one in the requested segment.
fn resolve_category(index: &CatalogIndex, slug: &str, segment: Option<&str>) -> Option<CategoryId> {
    let mut first = None;
    for category in index.categories_by_slug(slug) {
        let in_segment =
            segment.map_or(false, |s| category.parent_segment.eq_ignore_ascii_case(s));
        if in_segment {
            return Some(category.id);
        }
        first.get_or_insert(category.id);
    }
    first
}

// A slug found only under another category still resolves, so validation
// can report it as outside the chain.
fn resolve_subcategory(
    index: &CatalogIndex,
    slug: &str,
    category_id: Option<CategoryId>,
) -> Option<SubcategoryId> {
    let candidates: Vec<&Subcategory> = index.subcategories_by_slug(slug).collect();
    candidates
        .iter()
        .find(|s| Some(s.category_id) == category_id)
        .or_else(|| candidates.first())
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::super::index::fixtures::*;
    use super::super::level::Selection;
    use super::super::state::Transition;
    use super::*;
    use proptest::prelude::*;

    fn query(pairs: &[(&str, &str)]) -> QueryMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_absent_values_delete_keys() {
        let mut q = query(&[("segment", "BAGS"), ("gender", "MENS"), ("q", "x"), ("page", "2")]);
        write_param(&mut q, QueryParam::Segment, Some("All"));
        write_param(&mut q, QueryParam::Gender, None);
        write_param(&mut q, QueryParam::Search, Some(""));
        assert_eq!(q, query(&[("page", "2")]));
    }

    #[test]
    fn test_category_write_deletes_subcategory() {
        let mut q = query(&[("category", "caps"), ("subcategory", "beanies")]);
        write_param(&mut q, QueryParam::Category, Some("backpacks"));
        assert_eq!(q, query(&[("category", "backpacks")]));
    }

    #[test]
    fn test_write_state() {
        let index = sample_index();
        let state = [
            Selection::Segment("APPAREL".into()),
            Selection::Gender("MENS".into()),
            Selection::Category(CategoryId(1)),
            Selection::Subcategory(SubcategoryId(11)),
        ]
        .into_iter()
        .fold(FilterState::new(), |s, sel| s.apply(&index, &Transition::from(sel)))
        .apply(&index, &Transition::SetSearchText("zip".into()));

        assert_eq!(
            to_query_map(&index, &state),
            query(&[
                ("segment", "APPAREL"),
                ("gender", "MENS"),
                ("category", "mens-tops"),
                ("subcategory", "hoodies"),
                ("q", "zip"),
            ])
        );
    }

    #[test]
    fn test_bogus_subcategory_is_dropped() {
        let index = sample_index();
        let restored = read_state(&query(&[("category", "caps"), ("subcategory", "bogus-slug")]), &index);
        assert_eq!(restored.state.category_id(), Some(CategoryId(5)));
        assert_eq!(restored.state.segment(), Some("ACCESSORIES"));
        assert_eq!(restored.state.subcategory_id(), None);
        assert_eq!(
            restored.dropped,
            vec![InvalidStateError::UnknownSubcategory("bogus-slug".into())]
        );
    }

    #[test]
    fn test_foreign_subcategory_is_dropped() {
        let index = sample_index();
        let restored = read_state(&query(&[("category", "caps"), ("subcategory", "t-shirts")]), &index);
        assert_eq!(restored.state.category_id(), Some(CategoryId(5)));
        assert_eq!(restored.state.subcategory_id(), None);
        assert!(matches!(
            restored.dropped.as_slice(),
            [InvalidStateError::SubcategoryOutsideCategory { .. }]
        ));
    }

    #[test]
    fn test_read_is_lenient() {
        let index = sample_index();
        let restored = read_state(
            &query(&[("segment", "apparel"), ("gender", "womens"), ("category", "ALL"), ("q", "All")]),
            &index,
        );
        assert!(restored.dropped.is_empty());
        assert_eq!(restored.state.segment(), Some("APPAREL"));
        assert_eq!(restored.state.gender(), Some("WOMENS"));
        assert_eq!(restored.state.category_id(), None);
        assert_eq!(restored.state.search_text(), "All");
    }

    #[test]
    fn test_read_before_load_keeps_search_only() {
        let restored = read_state(
            &query(&[("segment", "BAGS"), ("q", "tote")]),
            &CatalogIndex::empty(),
        );
        assert_eq!(restored.state.segment(), None);
        assert_eq!(restored.state.search_text(), "tote");
        assert_eq!(restored.dropped.len(), 1);
    }

    fn selection_strategy() -> impl Strategy<Value = Selection> {
        prop_oneof![
            prop::sample::select(vec!["APPAREL", "BAGS", "FOOTWEAR", "ACCESSORIES"])
                .prop_map(|s| Selection::Segment(s.into())),
            prop::sample::select(vec!["MENS", "WOMENS"]).prop_map(|g| Selection::Gender(g.into())),
            (1i64..=6).prop_map(|id| Selection::Category(CategoryId(id))),
            (10i64..=15).prop_map(|id| Selection::Subcategory(SubcategoryId(id))),
        ]
    }

    proptest! {
        #[test]
        fn prop_write_then_read_roundtrips(
            history in prop::collection::vec(selection_strategy(), 0..10),
            search in "[a-zA-Z ]{0,10}",
        ) {
            let index = sample_index();
            let state = history
                .into_iter()
                .fold(FilterState::new(), |s, sel| s.apply(&index, &Transition::from(sel)))
                .apply(&index, &Transition::SetSearchText(search));

            let restored = read_state(&to_query_map(&index, &state), &index);
            prop_assert!(restored.dropped.is_empty());
            prop_assert_eq!(restored.state, state);
        }
    }
}
