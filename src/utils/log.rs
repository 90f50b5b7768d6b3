//! Console logging.
//!
//! Writes to the browser console on wasm. Native builds (tests) have no
//! console import to call, so messages go to stderr instead.

/// Log a debug-level message.
pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[debug] {message}");
}

/// Log a warning.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[warn] {message}");
}
