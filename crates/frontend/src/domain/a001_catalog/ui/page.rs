use leptos::prelude::*;

use super::{BreadcrumbBar, FilterBar, ProductGrid};
use crate::domain::a001_catalog::store::use_catalog_store;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let store = use_catalog_store();

    let counter = move || {
        let total = store.total_products();
        let visible = store.visible_products().len();
        if visible == total {
            format!("{} products", total)
        } else {
            format!("{} of {} products", visible, total)
        }
    };

    view! {
        <div class="page" data-page-id="catalog--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Catalog"</h1>
                </div>
                <div class="page__header-right">
                    <span style="color: var(--colorNeutralForeground2, #666);">{counter}</span>
                </div>
            </div>

            <div class="page__content">
                <FilterBar />
                <BreadcrumbBar />
                <ProductGrid />
            </div>
        </div>
    }
}
