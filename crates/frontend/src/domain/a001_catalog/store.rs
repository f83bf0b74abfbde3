//! Shared catalog store.
//!
//! The single place where the filter state lives. The header search input and
//! the catalog page both read and write it directly; every change goes
//! through [`FilterState::apply`], so cascade rules hold for clicks, chips and
//! URL-driven changes alike.

use std::sync::Arc;

use contracts::domain::a001_catalog::{CatalogSnapshot, Product};
use contracts::shared::catalog_filter::{
    available_options, build_breadcrumb, read_state, visible_products, write_state,
    BreadcrumbChip, CatalogIndex, FilterLevel, FilterOption, FilterState, QueryMap,
    RestoredFilter, Selection, Transition,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{load_catalog, CatalogDataSource, LoadGeneration};
use super::navigation::NavigationSignal;

#[derive(Clone, Copy)]
pub struct CatalogStore {
    index: RwSignal<Arc<CatalogIndex>>,
    products: RwSignal<Arc<Vec<Product>>>,
    state: RwSignal<FilterState>,
    loading: RwSignal<bool>,
    loaded: RwSignal<bool>,
    generation: StoredValue<LoadGeneration>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            index: RwSignal::new(Arc::new(CatalogIndex::empty())),
            products: RwSignal::new(Arc::new(Vec::new())),
            state: RwSignal::new(FilterState::new()),
            loading: RwSignal::new(false),
            loaded: RwSignal::new(false),
            generation: StoredValue::new(LoadGeneration::default()),
        }
    }

    // ------------------------------------------------------------------
    // Reads (tracked)
    // ------------------------------------------------------------------

    pub fn state(&self) -> FilterState {
        self.state.get()
    }

    pub fn search_text(&self) -> String {
        self.state.with(|s| s.search_text().to_string())
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn total_products(&self) -> usize {
        self.products.with(|p| p.len())
    }

    pub fn available_options(&self, level: FilterLevel) -> Vec<FilterOption> {
        self.index
            .with(|index| self.state.with(|state| available_options(index, state, level)))
    }

    pub fn visible_products(&self) -> Vec<Product> {
        self.products.with(|products| {
            self.index
                .with(|index| self.state.with(|state| visible_products(products, index, state)))
        })
    }

    pub fn breadcrumb(&self) -> Vec<BreadcrumbChip> {
        self.index
            .with(|index| self.state.with(|state| build_breadcrumb(index, state)))
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    pub fn apply(&self, transition: Transition) {
        let current = self.state.get_untracked();
        let next = self
            .index
            .with_untracked(|index| current.apply(index, &transition));
        if next != current {
            log::debug!("filter: {:?}", transition);
            self.state.set(next);
        }
    }

    pub fn apply_selection(&self, selection: Selection) {
        self.apply(Transition::from(selection));
    }

    pub fn clear_level(&self, level: FilterLevel) {
        self.apply(Transition::ClearLevel(level));
    }

    pub fn clear_all(&self) {
        self.apply(Transition::ClearAll);
    }

    pub fn set_search_text(&self, text: String) {
        self.apply(Transition::SetSearchText(text));
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Start a one-shot load. A later call supersedes an earlier one that has
    /// not finished yet. Once data arrives the query is read again, since
    /// deep links can only be validated against the loaded index.
    pub fn load<S, N>(&self, source: S, navigation: N)
    where
        S: CatalogDataSource + 'static,
        N: NavigationSignal + 'static,
    {
        let ticket = self.generation.get_value().next();
        self.generation.set_value(ticket);
        self.loading.set(true);

        let this = *self;
        spawn_local(async move {
            let snapshot = load_catalog(&source).await;
            if !this.generation.get_value().is_current(ticket) {
                log::debug!("Discarding superseded catalog load");
                return;
            }
            this.replace_catalog(snapshot);
            this.restore_loaded_query(&navigation.read_query());
            this.loaded.set(true);
            this.loading.set(false);
        });
    }

    /// Swap in a fresh index wholesale and re-check the current state
    pub fn replace_catalog(&self, snapshot: CatalogSnapshot) {
        let index = CatalogIndex::build(snapshot.categories, snapshot.subcategories);
        let restored = self.state.with_untracked(|state| state.revalidate(&index));
        log_dropped(&restored);

        self.index.set(Arc::new(index));
        self.products.set(Arc::new(snapshot.products));
        self.state.set(restored.state);
    }

    // ------------------------------------------------------------------
    // URL sync
    // ------------------------------------------------------------------

    /// Replace the state with the one described by `query`
    pub fn restore_from_query(&self, query: &QueryMap) {
        let restored = self
            .index
            .with_untracked(|index| read_state(query, index));
        log_dropped(&restored);
        self.state.set(restored.state);
    }

    /// Apply a deep link once the index is available. The URL has not been
    /// written since mount, so its `q` is stale: text typed while loading wins.
    fn restore_loaded_query(&self, query: &QueryMap) {
        let typed = self.state.with_untracked(|s| s.search_text().to_string());
        let restored = self.index.with_untracked(|index| {
            let restored = read_state(query, index);
            keep_typed_search(restored, typed, index)
        });
        log_dropped(&restored);
        self.state.set(restored.state);
    }

    /// Keep the state and the navigable location consistent both ways
    pub fn init_url_sync<N>(&self, navigation: N)
    where
        N: NavigationSignal + Clone + 'static,
    {
        // search text needs no index, so it is applied before data arrives
        self.restore_from_query(&navigation.read_query());

        let this = *self;
        let nav = navigation.clone();
        Effect::new(move |_| {
            // writing before load would erase deep-linked levels
            if !this.loaded.get() {
                return;
            }
            this.index.with(|index| {
                this.state.with(|state| {
                    let mut query = nav.read_query();
                    write_state(&mut query, index, state);
                    nav.write_query(&query);
                })
            });
        });

        navigation.subscribe(Box::new(move |query| {
            log::debug!("Location changed externally, re-reading filters");
            this.restore_from_query(&query);
        }));
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

fn keep_typed_search(
    mut restored: RestoredFilter,
    typed: String,
    index: &CatalogIndex,
) -> RestoredFilter {
    restored.state = restored
        .state
        .apply(index, &Transition::SetSearchText(typed));
    restored
}

fn log_dropped(restored: &RestoredFilter) {
    for error in &restored.dropped {
        log::warn!("Dropping filter: {}", error);
    }
}

pub fn use_catalog_store() -> CatalogStore {
    use_context::<CatalogStore>().expect("CatalogStore context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_catalog::{Category, CategoryId};

    fn tote_index() -> CatalogIndex {
        CatalogIndex::build(
            vec![Category {
                id: CategoryId(4),
                name: "Totes".into(),
                slug: "totes".into(),
                parent_segment: "BAGS".into(),
                gender: None,
                supports_gender_variants: false,
            }],
            vec![],
        )
    }

    #[test]
    fn test_search_typed_during_load_survives_deep_link() {
        let index = tote_index();
        let mut query = QueryMap::new();
        query.insert("category".into(), "totes".into());
        query.insert("q".into(), "canvas".into());

        let restored = keep_typed_search(read_state(&query, &index), "leather".into(), &index);
        assert_eq!(restored.state.search_text(), "leather");
        assert_eq!(restored.state.segment(), Some("BAGS"));
        assert_eq!(restored.state.category_id(), Some(CategoryId(4)));
    }

    #[test]
    fn test_search_cleared_during_load_stays_cleared() {
        let index = tote_index();
        let mut query = QueryMap::new();
        query.insert("q".into(), "canvas".into());

        let restored = keep_typed_search(read_state(&query, &index), String::new(), &index);
        assert_eq!(restored.state.search_text(), "");
    }
}
