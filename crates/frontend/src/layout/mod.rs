pub mod center;
pub mod header;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |        Header (title + search)           |
/// +------------------------------------------+
/// |                 Center                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header::Header />

            <div class="app-main">
                <center::Center>
                    {center()}
                </center::Center>
            </div>
        </div>
    }
}
