//! Data models and types for the page script.
//!
//! Contains domain types for:
//! - [`Theme`], [`Glyph`] - Light/dark preference and its toggle icon
//! - [`StarCache`] - Session cache of repository star counts
//! - [`StoredValue`] - Explicit outcome of a Web Storage read

mod star_cache;
mod stored;
mod theme;

pub use star_cache::{StarCache, star_label};
pub use stored::StoredValue;
pub use theme::{Glyph, Theme};
