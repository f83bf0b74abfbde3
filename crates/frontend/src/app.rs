use crate::domain::a001_catalog::api::HttpCatalogDataSource;
use crate::domain::a001_catalog::navigation::BrowserNavigation;
use crate::domain::a001_catalog::ui::CatalogPage;
use crate::domain::a001_catalog::CatalogStore;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Единое хранилище фильтров для шапки и страницы каталога
    let store = CatalogStore::new();
    provide_context(store);

    store.init_url_sync(BrowserNavigation);
    store.load(HttpCatalogDataSource, BrowserNavigation);

    view! {
        <Shell center=|| view! { <CatalogPage /> }.into_any() />
    }
}
