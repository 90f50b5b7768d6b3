//! Browser-facing components.
//!
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`page`] - DOM bindings for the theme toggle, star badges and host signals

pub mod icons;
pub mod page;

pub use page::{BrowserSignals, BrowserThemeDocument, ElementBadge};
