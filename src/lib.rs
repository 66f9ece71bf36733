//! # Adventus
//!
//! A personal client for Advent of Code: fetches puzzle input and pages,
//! keeps them in a local cache, and submits answers with guards against
//! duplicate or example-derived guesses.
//!
//! ## Architecture
//!
//! ```text
//! Puzzle → ContentCache → Fetcher (rate limited) → adventofcode.com
//!            │
//!            └→ Converter (page → markdown)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export AOC_SESSION=...
//!
//! # Show title and solved parts
//! adventus 2015 6
//!
//! # Print the input
//! adventus 2015 6 --fetch
//!
//! # Submit an answer for the first unsolved part
//! adventus 2015 6 --submit 377891
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cache`]: File-backed resource cache
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`converter`]: Puzzle page parsing and markdown conversion
//! - [`domain`]: Puzzle keys, parts and answers
//! - [`fetcher`]: Rate-limited HTTP client
//! - [`puzzle`]: Per-puzzle accessors
//! - [`submit`]: Answer submission workflow
//! - [`template`]: Solution file generation

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// fetcher, cache and converter.
pub mod app;

/// File-backed cache of site resources.
///
/// - [`ContentCache`](cache::ContentCache): hit/miss/purge
/// - [`CacheLayout`](cache::CacheLayout): on-disk layout and URLs
pub mod cache;

/// Command-line interface using clap.
pub mod cli;

/// Configuration from `adventus.toml`, Cargo metadata or the user config dir.
pub mod config;

/// Puzzle page parsing and conversion to markdown.
pub mod converter;

/// Core domain types.
///
/// - [`PuzzleKey`](domain::PuzzleKey): (year, day)
/// - [`Part`](domain::Part): part one or two
/// - [`Answers`](domain::Answers): answers recorded on the page
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for GET/POST
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`RateLimiter`](fetcher::RateLimiter): token bucket shared across processes
pub mod fetcher;

/// Per-puzzle accessors over the cache.
pub mod puzzle;

/// Answer submission with duplicate and example guards.
pub mod submit;

/// Solution source files generated from a template.
pub mod template;

#[cfg(test)]
mod testing;

pub use app::{AdventusError, AppContext, Result};
pub use config::Config;
pub use domain::{Part, PuzzleKey};
pub use puzzle::Puzzle;
pub use submit::{Candidate, Outcome, StdinConfirm};
