//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic glyphs to the selected theme's icons and
//! renders them as inline SVG markup.

use std::fmt::Write;

use icondata::Icon;

use crate::config::IconTheme;
use crate::config::theme::ICON_SIZE;
use crate::models::Glyph;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{LuMoon as Moon, LuSun as Sun};
}

mod bootstrap {
    pub use icondata::{BsMoon as Moon, BsSun as Sun};
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);

/// Icon for a glyph.
pub fn glyph_icon(glyph: Glyph) -> Icon {
    match glyph {
        Glyph::Sun => SUN,
        Glyph::Moon => MOON,
    }
}

/// Inline SVG for `icon` at `size`×`size` pixels.
pub fn svg_markup(icon: Icon, size: u32) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}""#
    );

    let attributes = [
        ("viewBox", icon.view_box),
        ("fill", icon.fill),
        ("stroke", icon.stroke),
        ("stroke-width", icon.stroke_width),
        ("stroke-linecap", icon.stroke_linecap),
        ("stroke-linejoin", icon.stroke_linejoin),
        ("style", icon.style),
    ];
    for (name, value) in attributes {
        if let Some(value) = value {
            let _ = write!(svg, r#" {name}="{value}""#);
        }
    }

    svg.push('>');
    svg.push_str(icon.data);
    svg.push_str("</svg>");
    svg
}

/// Toggle icon markup for a glyph.
pub fn glyph_markup(glyph: Glyph) -> String {
    svg_markup(glyph_icon(glyph), ICON_SIZE)
}
