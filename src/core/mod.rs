//! Core logic for the page script.
//!
//! This module provides:
//! - [`ThemeController`] light/dark preference handling
//! - [`StarsLoader`] cached, bounded-concurrency star badge loading
//! - [`GitHubClient`] the network source for star counts
//! - [`defer`] one-shot deferred start driven by host signals

pub mod error;
mod github;
pub mod schedule;
pub mod stars;
pub mod theme;

pub use github::{GitHubClient, RepoMetadata, parse_stars};
pub use schedule::{Gate, GatePhase, HostSignals, TriggerPolicy, defer};
pub use stars::{LoadSummary, RepoBadge, RepoState, StarFetcher, StarsLoader};
pub use theme::{ThemeController, ThemeDocument};
