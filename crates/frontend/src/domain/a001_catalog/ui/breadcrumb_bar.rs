use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_catalog::store::use_catalog_store;
use crate::shared::icons::icon;

#[component]
pub fn BreadcrumbBar() -> impl IntoView {
    let store = use_catalog_store();
    let chips = Memo::new(move |_| store.breadcrumb());

    view! {
        <Show when=move || chips.with(|c| !c.is_empty())>
            <div class="catalog-breadcrumb" style="display: flex; align-items: center; gap: 6px; flex-wrap: wrap; margin-bottom: 16px;">
                {move || {
                    chips
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, chip)| {
                            let clear = chip.clear();
                            view! {
                                {(i > 0).then(|| icon("chevron-right"))}
                                <span
                                    class="catalog-chip"
                                    style="display: inline-flex; align-items: center; gap: 4px; padding: 2px 4px 2px 10px; border-radius: 12px; background: var(--colorNeutralBackground3, #f0f0f0);"
                                >
                                    {chip.label}
                                    <button
                                        class="catalog-chip__clear"
                                        style="background: none; border: none; cursor: pointer; padding: 2px; display: inline-flex; color: #666;"
                                        title="Remove filter"
                                        on:click=move |_| store.apply(clear.clone())
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| store.clear_all()
                >
                    "Clear all"
                </Button>
            </div>
        </Show>
    }
}
