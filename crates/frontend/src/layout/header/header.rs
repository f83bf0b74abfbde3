use crate::domain::a001_catalog::use_catalog_store;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_catalog_store();

    // Поиск пишет в то же хранилище, что читает страница каталога
    let search = Signal::derive(move || store.search_text());
    let on_search = Callback::new(move |text: String| store.set_search_text(text));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Storefront"</span>
            </div>
            <div class="header__actions">
                <SearchInput value=search on_change=on_search />
            </div>
        </header>
    }
}
