use contracts::shared::catalog_filter::FilterLevel;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_catalog::store::use_catalog_store;

/// Одна группа кнопок на каждый уровень иерархии
#[component]
pub fn FilterBar() -> impl IntoView {
    view! {
        <div class="catalog-filters" style="display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px;">
            {FilterLevel::ALL
                .into_iter()
                .map(|level| view! { <FilterGroup level=level /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn FilterGroup(level: FilterLevel) -> impl IntoView {
    let store = use_catalog_store();
    let options = Memo::new(move |_| store.available_options(level));

    view! {
        <Show when=move || options.with(|o| !o.is_empty())>
            <div class="catalog-filters__group" style="display: flex; align-items: center; gap: 8px; flex-wrap: wrap;">
                <span class="catalog-filters__title" style="min-width: 100px; font-weight: 600; color: var(--colorNeutralForeground2, #555);">
                    {level.title()}
                </span>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let selection = option.selection.clone();
                            // Повторный клик по активной кнопке снимает выбор
                            let appearance = if option.active {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Secondary
                            };
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=appearance
                                    on_click=move |_| store.apply_selection(selection.clone())
                                >
                                    {option.label}
                                </Button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}
