//! Browser location as the navigable home of the filter state.

use contracts::shared::catalog_filter::QueryMap;
use leptos::prelude::*;
use web_sys::window;

pub trait NavigationSignal {
    fn read_query(&self) -> QueryMap;

    /// Replace the current query without reloading the page
    fn write_query(&self, query: &QueryMap);

    /// Call `on_change` whenever the location changes from outside
    /// (back/forward, manual edits followed by history navigation)
    fn subscribe(&self, on_change: Box<dyn Fn(QueryMap)>);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigation;

/// Parse `?a=1&b=2` pair by pair. A pair that fails to decode is skipped on
/// its own; for a repeated key the first value wins. Keys are kept verbatim,
/// so foreign parameters like `utm[src]` survive a read/write cycle.
pub fn parse_query(search: &str) -> QueryMap {
    let mut query = QueryMap::new();
    for pair in search.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let (Some(key), Some(value)) = (decode_component(key), decode_component(value)) else {
            log::debug!("Skipping undecodable query pair: {}", pair);
            continue;
        };
        if key.is_empty() {
            continue;
        }
        query.entry(key).or_insert(value);
    }
    query
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|s| s.into_owned())
}

pub fn format_query(query: &QueryMap) -> String {
    if query.is_empty() {
        return String::new();
    }
    match serde_qs::to_string(query) {
        Ok(qs) => format!("?{}", qs),
        Err(e) => {
            log::warn!("Failed to serialize query: {}", e);
            String::new()
        }
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

impl NavigationSignal for BrowserNavigation {
    fn read_query(&self) -> QueryMap {
        parse_query(&current_search())
    }

    fn write_query(&self, query: &QueryMap) {
        let new_search = format_query(query);

        // Only update URL if it actually changed
        if current_search() == new_search {
            return;
        }

        let Some(w) = window() else {
            return;
        };
        let new_url = if new_search.is_empty() {
            w.location().pathname().unwrap_or_else(|_| "/".to_string())
        } else {
            new_search
        };
        if let Ok(history) = w.history() {
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
            {
                log::warn!("replaceState failed: {:?}", e);
            }
        }
    }

    fn subscribe(&self, on_change: Box<dyn Fn(QueryMap)>) {
        // the catalog store lives as long as the page, so the listener is never removed
        let _handle = window_event_listener(leptos::ev::popstate, move |_| {
            on_change(parse_query(&current_search()));
        });
    }
}
