//! Light/dark theme controller.
//!
//! Resolves the initial theme from storage and the OS preference, mirrors
//! the active theme onto the document, and flips it on demand.

use crate::config::theme::STORAGE_KEY;
use crate::models::{Glyph, Theme};
use crate::utils::log;
use crate::utils::storage::KeyValueStore;

/// The parts of the document the theme is rendered onto.
///
/// Implementations treat missing elements as no-ops.
pub trait ThemeDocument {
    /// Whether the dark marker is currently set.
    fn is_dark(&self) -> bool;

    /// Set or clear the dark marker.
    fn set_dark(&self, dark: bool);

    /// Show `glyph` in the toggle icon.
    fn set_glyph(&self, glyph: Glyph);
}

/// Owns the theme preference for one page.
pub struct ThemeController<S, D> {
    store: S,
    document: D,
    prefers_dark: Option<bool>,
}

impl<S: KeyValueStore, D: ThemeDocument> ThemeController<S, D> {
    /// `prefers_dark` is the OS color-scheme preference, or `None` when the
    /// host cannot report it.
    pub fn new(store: S, document: D, prefers_dark: Option<bool>) -> Self {
        Self {
            store,
            document,
            prefers_dark,
        }
    }

    /// Theme to start with: a valid stored value, else the OS preference,
    /// else light.
    pub fn initial_theme(&self) -> Theme {
        let stored = self
            .store
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|value| Theme::from_stored(&value));

        stored
            .or_else(|| self.prefers_dark.map(Theme::from_dark))
            .unwrap_or_default()
    }

    /// Render `theme` onto the document.
    pub fn apply(&self, theme: Theme) {
        self.document.set_dark(theme.is_dark());
        self.document.set_glyph(theme.toggle_glyph());
    }

    /// Apply the initial theme. Nothing is persisted until the user toggles.
    pub fn init(&self) -> Theme {
        let theme = self.initial_theme();
        self.apply(theme);
        theme
    }

    /// Theme currently shown by the document.
    pub fn current(&self) -> Theme {
        Theme::from_dark(self.document.is_dark())
    }

    /// Switch to the other theme, persist it and apply it.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        if let Err(e) = self.store.set_item(STORAGE_KEY, next.as_str()) {
            log::debug(&format!("theme not persisted: {e}"));
        }
        self.apply(next);
        next
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}
