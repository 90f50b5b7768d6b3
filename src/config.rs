//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the page script.

// =============================================================================
// Theme Configuration
// =============================================================================

/// Theme persistence and document marker settings.
pub mod theme {
    /// localStorage key holding `"dark"` or `"light"`.
    pub const STORAGE_KEY: &str = "theme";

    /// Class set on the root element while the dark theme is active.
    pub const DARK_CLASS: &str = "dark";

    /// Media query used to read the OS color-scheme preference.
    pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    /// Edge length of the toggle icon in pixels.
    pub const ICON_SIZE: u32 = 14;
}

// =============================================================================
// Star Badge Configuration
// =============================================================================

/// GitHub star badge settings.
pub mod stars {
    /// sessionStorage key for the star count cache.
    pub const CACHE_KEY: &str = "github-stars-cache";

    /// Base URL of the public repository metadata API.
    pub const API_BASE_URL: &str = "https://api.github.com";

    /// Number of repositories fetched at the same time.
    pub const CONCURRENCY: usize = 2;

    /// Badge text shown when a count could not be fetched.
    pub const FAILED_LABEL: &str = "★ —";
}

// =============================================================================
// Scheduling Configuration
// =============================================================================

/// Deferred loading settings.
pub mod schedule {
    /// Upper bound handed to `requestIdleCallback` (milliseconds).
    pub const IDLE_TIMEOUT_MS: u32 = 2500;

    /// Delay used when `requestIdleCallback` is not available (milliseconds).
    pub const IDLE_FALLBACK_MS: u32 = 1200;

    /// Margin around the viewport that counts as visible.
    pub const VIEWPORT_ROOT_MARGIN: &str = "400px 0px";

    /// Fraction of the target that must intersect.
    pub const VIEWPORT_THRESHOLD: f64 = 0.01;
}

// =============================================================================
// DOM Configuration
// =============================================================================

/// Element ids, attributes and selectors the script binds to.
pub mod dom {
    /// Theme toggle button id.
    pub const THEME_TOGGLE_ID: &str = "themeToggle";

    /// Theme icon container id.
    pub const THEME_ICON_ID: &str = "themeIcon";

    /// Footer year element id.
    pub const YEAR_ID: &str = "year";

    /// Attribute carrying an `owner/name` repository identifier.
    pub const REPO_ATTRIBUTE: &str = "data-repo";

    /// Selector matching every star badge.
    pub const REPO_SELECTOR: &str = "[data-repo]";

    /// Elements watched for viewport visibility, in order of preference.
    pub const VISIBILITY_TARGETS: &[&str] = &["[data-repo]", "#projects", "main"];
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used for the theme toggle.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Tunables for a [`StarsLoader`](crate::core::StarsLoader) run.
///
/// [`Default`] uses the constants in [`stars`]; tests override fields to
/// point the loader at a fake endpoint or a different worker count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarsConfig {
    /// Base URL prefixed to `/repos/<owner>/<name>`.
    pub api_base_url: String,
    /// sessionStorage key for the cache.
    pub cache_key: String,
    /// Size of the worker pool.
    pub concurrency: usize,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            api_base_url: stars::API_BASE_URL.to_string(),
            cache_key: stars::CACHE_KEY.to_string(),
            concurrency: stars::CONCURRENCY,
        }
    }
}
