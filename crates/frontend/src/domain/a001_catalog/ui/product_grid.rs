use contracts::domain::a001_catalog::Product;
use contracts::enums::{gender_label, segment_label};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_catalog::store::use_catalog_store;
use crate::shared::list_utils::highlight_matches;

#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_catalog_store();
    let visible = Memo::new(move |_| store.visible_products());

    view! {
        <Show
            when=move || !store.is_loading()
            fallback=|| view! {
                <div style="padding: 48px; text-align: center;">
                    <p>"Loading..."</p>
                </div>
            }
        >
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || view! {
                    <div style="padding: 48px; text-align: center;">
                        <p style="color: var(--colorNeutralForeground2, #666);">
                            "No products match the current filters"
                        </p>
                        <Show when=move || !store.state().is_clear()>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| store.clear_all()
                            >
                                "Clear all filters"
                            </Button>
                        </Show>
                    </div>
                }
            >
                <div
                    class="catalog-grid"
                    style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;"
                >
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product /> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </Show>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = use_catalog_store();
    let name = product.name.clone();
    let subtitle = match product.gender.as_deref() {
        Some(gender) => format!("{} · {}", segment_label(&product.segment), gender_label(gender)),
        None => segment_label(&product.segment),
    };

    view! {
        <div
            class="catalog-card"
            style="border: 1px solid var(--colorNeutralStroke2, #e0e0e0); border-radius: 8px; overflow: hidden; background: var(--colorNeutralBackground1, #fff);"
        >
            {product.image.clone().map(|src| view! {
                <img
                    src=src
                    alt=product.name.clone()
                    style="width: 100%; height: 180px; object-fit: cover; background: #fafafa;"
                />
            })}
            <div style="padding: 12px; display: flex; flex-direction: column; gap: 4px;">
                <div style="font-weight: 600;">
                    {move || highlight_matches(&name, &store.search_text())}
                </div>
                <div style="font-size: 13px; color: var(--colorNeutralForeground3, #888);">
                    {subtitle}
                </div>
                <div style="font-size: 15px;">{format!("${:.2}", product.price)}</div>
            </div>
        </div>
    }
}
