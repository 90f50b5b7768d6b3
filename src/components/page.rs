//! Browser bindings for the page components.
//!
//! Implements the core traits over real DOM elements and host signals:
//! [`BrowserThemeDocument`] for the theme controller, [`ElementBadge`] for
//! star badges and [`BrowserSignals`] for deferred loading.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, IdleRequestOptions, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::components::icons;
use crate::config::dom::{
    REPO_ATTRIBUTE, REPO_SELECTOR, THEME_ICON_ID, VISIBILITY_TARGETS, YEAR_ID,
};
use crate::config::schedule::{
    IDLE_FALLBACK_MS, IDLE_TIMEOUT_MS, VIEWPORT_ROOT_MARGIN, VIEWPORT_THRESHOLD,
};
use crate::config::theme::DARK_CLASS;
use crate::core::{HostSignals, RepoBadge, ThemeDocument, TriggerPolicy};
use crate::models::Glyph;
use crate::utils::{dom, log};

// =============================================================================
// Theme
// =============================================================================

/// Root element class list plus the toggle icon container.
pub struct BrowserThemeDocument {
    root: Option<Element>,
    icon: Option<Element>,
}

impl BrowserThemeDocument {
    pub fn locate(document: &Document) -> Self {
        Self {
            root: document.document_element(),
            icon: document.get_element_by_id(THEME_ICON_ID),
        }
    }
}

impl ThemeDocument for BrowserThemeDocument {
    fn is_dark(&self) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.class_list().contains(DARK_CLASS))
    }

    fn set_dark(&self, dark: bool) {
        if let Some(root) = &self.root {
            let _ = root.class_list().toggle_with_force(DARK_CLASS, dark);
        }
    }

    fn set_glyph(&self, glyph: Glyph) {
        if let Some(icon) = &self.icon {
            icon.set_inner_html(&icons::glyph_markup(glyph));
        }
    }
}

/// Write the current year into the footer.
pub fn render_footer_year(document: &Document) {
    dom::set_text_by_id(document, YEAR_ID, &dom::current_year().to_string());
}

// =============================================================================
// Star Badges
// =============================================================================

/// An element carrying a `data-repo` attribute.
#[derive(Debug, Clone)]
pub struct ElementBadge(Element);

impl ElementBadge {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl RepoBadge for ElementBadge {
    fn repo(&self) -> Option<String> {
        self.0
            .get_attribute(REPO_ATTRIBUTE)
            .filter(|repo| !repo.is_empty())
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Every star badge on the page, in document order.
pub fn repo_badges(document: &Document) -> Vec<ElementBadge> {
    dom::query_all(document, REPO_SELECTOR)
        .into_iter()
        .map(ElementBadge::new)
        .collect()
}

// =============================================================================
// Host Signals
// =============================================================================

/// `load`, `requestIdleCallback` and `IntersectionObserver` on a window.
///
/// Load state and the visibility target are read from `document`.
pub struct BrowserSignals {
    window: Window,
    document: Document,
}

impl BrowserSignals {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Visibility-gated loading when `IntersectionObserver` exists.
    pub fn policy(&self) -> TriggerPolicy {
        TriggerPolicy::for_host(dom::has_global(&self.window, "IntersectionObserver"))
    }
}

fn idle_fallback(f: Box<dyn FnOnce()>) {
    Timeout::new(IDLE_FALLBACK_MS, f).forget();
}

impl HostSignals for BrowserSignals {
    fn when_loaded(&self, f: Box<dyn FnOnce()>) {
        if self.document.ready_state() == "complete" {
            f();
            return;
        }

        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let callback = Closure::once_into_js(move || f());
        if self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "load",
                callback.unchecked_ref(),
                &options,
            )
            .is_err()
        {
            log::debug("could not listen for load");
        }
    }

    fn when_idle(&self, f: Box<dyn FnOnce()>) {
        if !dom::has_global(&self.window, "requestIdleCallback") {
            idle_fallback(f);
            return;
        }

        // Shared with the idle callback so a rejected request can still
        // hand the task to the timer.
        let slot = Rc::new(RefCell::new(Some(f)));
        let callback = {
            let slot = Rc::clone(&slot);
            Closure::once_into_js(move || {
                if let Some(f) = slot.borrow_mut().take() {
                    f();
                }
            })
        };

        let options = IdleRequestOptions::new();
        options.set_timeout(IDLE_TIMEOUT_MS);
        if self
            .window
            .request_idle_callback_with_options(callback.unchecked_ref(), &options)
            .is_err()
        {
            log::debug("requestIdleCallback rejected the callback; using timer");
            if let Some(f) = slot.borrow_mut().take() {
                idle_fallback(f);
            }
        }
    }

    fn when_visible(&self, f: Box<dyn Fn()>) -> bool {
        let Some(target) = dom::first_match(&self.document, VISIBILITY_TARGETS) else {
            return false;
        };

        let on_intersect = move |entries: Array, observer: IntersectionObserver| {
            let hit = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if !hit {
                return;
            }
            observer.disconnect();
            f();
        };
        let callback =
            Closure::wrap(Box::new(on_intersect) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(VIEWPORT_ROOT_MARGIN);
        init.set_threshold(&JsValue::from_f64(VIEWPORT_THRESHOLD));

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        else {
            return false;
        };
        observer.observe(&target);

        // The observer holds the callback for the lifetime of the page.
        callback.forget();
        true
    }
}
