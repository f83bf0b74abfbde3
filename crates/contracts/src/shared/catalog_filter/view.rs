//! Presentation-facing queries over the index and the current state.

use crate::domain::a001_catalog::Product;
use crate::enums::{gender_label, segment_label};

use super::derivation::{categories_for_filter, genders_for_segment, subcategories_for_filter};
use super::index::CatalogIndex;
use super::level::{FilterLevel, FilterOption, Selection};
use super::product_filter::filter_products;
use super::state::FilterState;

pub fn available_options(
    index: &CatalogIndex,
    state: &FilterState,
    level: FilterLevel,
) -> Vec<FilterOption> {
    match level {
        FilterLevel::Segment => index
            .segments()
            .iter()
            .map(|code| FilterOption {
                selection: Selection::Segment(code.clone()),
                label: segment_label(code),
                active: state.segment() == Some(code.as_str()),
            })
            .collect(),
        FilterLevel::Gender => {
            let genders = state
                .segment()
                .map(|segment| genders_for_segment(index, segment))
                .unwrap_or_default();
            if genders.len() < 2 {
                return Vec::new();
            }
            genders
                .into_iter()
                .map(|code| FilterOption {
                    label: gender_label(&code),
                    active: state.gender() == Some(code.as_str()),
                    selection: Selection::Gender(code),
                })
                .collect()
        }
        FilterLevel::Category => categories_for_filter(index, state.segment(), state.gender())
            .into_iter()
            .map(|category| FilterOption {
                selection: Selection::Category(category.id),
                label: category.name.clone(),
                active: state.category_id() == Some(category.id),
            })
            .collect(),
        FilterLevel::Subcategory => subcategories_for_filter(index, state.category_id())
            .into_iter()
            .map(|subcategory| FilterOption {
                selection: Selection::Subcategory(subcategory.id),
                label: subcategory.name.clone(),
                active: state.subcategory_id() == Some(subcategory.id),
            })
            .collect(),
    }
}

pub fn visible_products(
    products: &[Product],
    index: &CatalogIndex,
    state: &FilterState,
) -> Vec<Product> {
    filter_products(products, state, index)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::index::fixtures::*;
    use super::super::state::Transition;
    use super::*;

    fn labels(options: &[FilterOption]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn test_options_follow_the_cascade() {
        let index = sample_index();
        let state = FilterState::new();
        assert_eq!(
            labels(&available_options(&index, &state, FilterLevel::Segment)),
            vec!["Apparel", "Bags", "Accessories", "Footwear"]
        );
        assert!(available_options(&index, &state, FilterLevel::Gender).is_empty());
        assert!(available_options(&index, &state, FilterLevel::Category).is_empty());

        let state = state.apply(&index, &Transition::SelectSegment("APPAREL".into()));
        let segments = available_options(&index, &state, FilterLevel::Segment);
        assert!(segments[0].active);
        assert_eq!(
            labels(&available_options(&index, &state, FilterLevel::Gender)),
            vec!["Men", "Women"]
        );
        assert_eq!(
            labels(&available_options(&index, &state, FilterLevel::Category)),
            vec!["mens tops", "womens tops"]
        );

        let state = state.apply(&index, &Transition::SelectGender("WOMENS".into()));
        assert_eq!(
            labels(&available_options(&index, &state, FilterLevel::Category)),
            vec!["womens tops"]
        );
    }

    #[test]
    fn test_no_gender_options_for_bags() {
        let index = sample_index();
        let state = FilterState::new().apply(&index, &Transition::SelectSegment("BAGS".into()));
        assert!(available_options(&index, &state, FilterLevel::Gender).is_empty());
    }

    #[test]
    fn test_pre_load_is_empty() {
        let index = CatalogIndex::empty();
        let state = FilterState::new();
        for level in FilterLevel::ALL {
            assert!(available_options(&index, &state, level).is_empty());
        }
        assert!(visible_products(&[], &index, &state).is_empty());
    }
}
