//! Product predicate: a conjunction of independent clauses, each vacuously
//! true when its state field is unset.

use crate::domain::a001_catalog::Product;
use crate::enums::DEFAULT_GENDER;

use super::index::CatalogIndex;
use super::state::FilterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Search,
    Segment,
    Gender,
    Category,
    Subcategory,
}

impl Clause {
    pub const ALL: [Clause; 5] = [
        Clause::Search,
        Clause::Segment,
        Clause::Gender,
        Clause::Category,
        Clause::Subcategory,
    ];

    pub fn test(&self, product: &Product, state: &FilterState, index: &CatalogIndex) -> bool {
        match self {
            Clause::Search => matches_search(&product.name, state.search_text()),
            Clause::Segment => state
                .segment()
                .map_or(true, |segment| product.segment.eq_ignore_ascii_case(segment)),
            Clause::Gender => state
                .gender()
                .map_or(true, |gender| {
                    resolved_gender(product, index).eq_ignore_ascii_case(gender)
                }),
            Clause::Category => state
                .category_id()
                .map_or(true, |id| product.category_id == id),
            Clause::Subcategory => state
                .subcategory_id()
                .map_or(true, |id| product.subcategory_id == Some(id)),
        }
    }
}

/// Product gender, else its category's gender, else UNISEX
pub fn resolved_gender<'a>(product: &'a Product, index: &'a CatalogIndex) -> &'a str {
    product
        .gender
        .as_deref()
        .or_else(|| {
            index
                .category(product.category_id)
                .and_then(|c| c.gender.as_deref())
        })
        .unwrap_or(DEFAULT_GENDER)
}

/// Case-insensitive substring match of the text as typed;
/// blank search matches everything
pub fn matches_search(name: &str, search_text: &str) -> bool {
    if search_text.trim().is_empty() {
        return true;
    }
    name.to_lowercase().contains(&search_text.to_lowercase())
}

pub fn matches(product: &Product, state: &FilterState, index: &CatalogIndex) -> bool {
    Clause::ALL
        .iter()
        .all(|clause| clause.test(product, state, index))
}

/// Stable filter: input order is preserved
pub fn filter_products<'a>(
    products: &'a [Product],
    state: &FilterState,
    index: &CatalogIndex,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| matches(product, state, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::index::fixtures::*;
    use super::super::level::Selection;
    use super::super::state::Transition;
    use super::*;
    use crate::domain::a001_catalog::{CategoryId, ProductId, SubcategoryId};
    use proptest::prelude::*;

    fn ids(products: Vec<&Product>) -> Vec<i64> {
        products.iter().map(|p| p.id.value()).collect()
    }

    fn state_with(index: &CatalogIndex, selections: Vec<Selection>, search: &str) -> FilterState {
        let state = selections
            .into_iter()
            .fold(FilterState::new(), |state, selection| {
                state.apply(index, &Transition::from(selection))
            });
        state.apply(index, &Transition::SetSearchText(search.to_string()))
    }

    #[test]
    fn test_segment_and_gender() {
        let index = CatalogIndex::build(
            vec![
                category(1, "mens", "APPAREL", Some("MENS")),
                category(2, "womens", "APPAREL", Some("WOMENS")),
            ],
            vec![],
        );
        let products = vec![
            product(9, "Tee", "APPAREL", Some("MENS"), 1, None),
            product(10, "Dress", "APPAREL", Some("WOMENS"), 2, None),
        ];
        let state = state_with(
            &index,
            vec![Selection::Segment("APPAREL".into()), Selection::Gender("MENS".into())],
            "",
        );
        assert_eq!(ids(filter_products(&products, &state, &index)), vec![9]);
    }

    #[test]
    fn test_gender_fallback_chain() {
        let index = sample_index();
        let products = sample_products();
        // own gender
        assert_eq!(resolved_gender(&products[0], &index), "MENS");
        // falls back to the category (mens-tops)
        assert_eq!(resolved_gender(&products[1], &index), "MENS");
        // backpacks has no gender
        assert_eq!(resolved_gender(&products[3], &index), DEFAULT_GENDER);

        let orphan = product(200, "Orphan", "APPAREL", None, 999, None);
        assert_eq!(resolved_gender(&orphan, &index), "UNISEX");
    }

    #[test]
    fn test_gender_filter_uses_category_fallback() {
        let index = sample_index();
        let products = sample_products();
        let state = state_with(
            &index,
            vec![Selection::Segment("APPAREL".into()), Selection::Gender("MENS".into())],
            "",
        );
        assert_eq!(ids(filter_products(&products, &state, &index)), vec![100, 101]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let index = sample_index();
        let products = sample_products();
        let state = state_with(&index, vec![], "SNAP");
        assert_eq!(ids(filter_products(&products, &state, &index)), vec![105]);
        assert!(matches_search("Anything", "   "));
        assert!(!matches_search("Tote", "bag"));
    }

    #[test]
    fn test_search_keeps_surrounding_spaces() {
        assert!(!matches_search("Logo Tee", "tee "));
        assert!(!matches_search("Logo Tee", " logo"));
        assert!(matches_search("Logo Tee", "logo "));

        let index = sample_index();
        let products = sample_products();
        let state = state_with(&index, vec![], "tee ");
        assert!(filter_products(&products, &state, &index).is_empty());
    }

    #[test]
    fn test_lowercase_catalog_codes() {
        let index = CatalogIndex::build(
            vec![
                category(1, "mens", "apparel", Some("mens")),
                category(2, "womens", "apparel", Some("Womens")),
            ],
            vec![],
        );
        let products = vec![
            product(9, "Tee", "apparel", None, 1, None),
            product(10, "Dress", "Apparel", Some("womens"), 2, None),
        ];
        let state = state_with(&index, vec![Selection::Segment("APPAREL".into())], "");
        assert_eq!(ids(filter_products(&products, &state, &index)), vec![9, 10]);

        let state = state.apply(&index, &Transition::from(Selection::Gender("MENS".into())));
        assert_eq!(state.gender(), Some("MENS"));
        assert_eq!(ids(filter_products(&products, &state, &index)), vec![9]);
    }

    #[test]
    fn test_category_and_subcategory() {
        let index = sample_index();
        let products = sample_products();
        let state = state_with(
            &index,
            vec![
                Selection::Segment("ACCESSORIES".into()),
                Selection::Category(CategoryId(5)),
            ],
            "",
        );
        assert_eq!(ids(filter_products(&products, &state, &index)), vec![105, 106]);

        let state = state.apply(&index, &Transition::from(Selection::Subcategory(SubcategoryId(14))));
        assert_eq!(ids(filter_products(&products, &state, &index)), vec![106]);
    }

    #[test]
    fn test_clear_all_returns_everything_in_order() {
        let index = sample_index();
        let products = sample_products();
        let state = state_with(&index, vec![Selection::Segment("BAGS".into())], "tote");
        assert_eq!(ids(filter_products(&products, &state, &index)), vec![104]);

        let cleared = state.apply(&index, &Transition::ClearAll);
        let visible = filter_products(&products, &cleared, &index);
        let expected: Vec<ProductId> = products.iter().map(|p| p.id).collect();
        assert_eq!(visible.iter().map(|p| p.id).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_empty_inputs() {
        let index = CatalogIndex::empty();
        let state = state_with(&index, vec![Selection::Segment("APPAREL".into())], "x");
        assert!(filter_products(&[], &state, &index).is_empty());
    }

    proptest! {
        #[test]
        fn prop_clause_order_is_irrelevant(
            order in Just(Clause::ALL.to_vec()).prop_shuffle(),
            product_pos in 0usize..8,
            segment in prop::option::of(prop::sample::select(vec!["APPAREL", "BAGS", "ACCESSORIES"])),
            gender in prop::option::of(prop::sample::select(vec!["MENS", "WOMENS"])),
            category in prop::option::of(1i64..=6),
            search in prop::sample::select(vec!["", "o", "TEE", "zzz"]),
        ) {
            let index = sample_index();
            let products = sample_products();
            let mut selections = Vec::new();
            if let Some(segment) = segment {
                selections.push(Selection::Segment(segment.into()));
            }
            if let Some(gender) = gender {
                selections.push(Selection::Gender(gender.into()));
            }
            if let Some(category) = category {
                selections.push(Selection::Category(CategoryId(category)));
            }
            let state = state_with(&index, selections, search);
            let product = &products[product_pos];

            let reordered = order.iter().all(|clause| clause.test(product, &state, &index));
            prop_assert_eq!(reordered, matches(product, &state, &index));
        }
    }
}
