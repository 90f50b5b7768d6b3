//! Utility modules for web, DOM, and storage operations.
//!
//! Provides:
//! - [`dom`] - Window, document and storage accessors
//! - [`storage`] - [`KeyValueStore`] seam with browser and in-memory backends
//! - [`fetch_text`] - Network fetching through the Fetch API
//! - [`log`] - Console logging

pub mod dom;
mod fetch;
pub mod log;
pub mod storage;

pub use fetch::fetch_text;
pub use storage::{KeyValueStore, MemoryStorage, WebStorage};
