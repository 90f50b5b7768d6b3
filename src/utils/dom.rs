//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Storage, Window};

use crate::config::theme::PREFERS_DARK_QUERY;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Whether the OS asks for a dark color scheme.
///
/// `None` when `matchMedia` is missing or the query cannot be evaluated.
pub fn prefers_dark(window: &Window) -> Option<bool> {
    window
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .map(|list| list.matches())
}

/// Whether a global (e.g. `IntersectionObserver`) exists on `window`.
pub fn has_global(window: &Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &name.into()).unwrap_or(false)
}

/// All elements matching a CSS selector, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matching any of `selectors`, tried in order.
pub fn first_match(document: &Document, selectors: &[&str]) -> Option<Element> {
    selectors
        .iter()
        .find_map(|selector| document.query_selector(selector).ok().flatten())
}

/// Set an element's text by id. No-op when the element is missing.
pub fn set_text_by_id(document: &Document, id: &str, text: &str) {
    if let Some(element) = document.get_element_by_id(id) {
        element.set_text_content(Some(text));
    }
}

/// Current calendar year in local time.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
