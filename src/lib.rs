//! # leetstats
//!
//! Concurrent LeetCode profile statistics fetcher with CSV export.
//!
//! ## Design Philosophy
//!
//! leetstats is designed to be:
//! - **Failure-tolerant** - one bad username never aborts a batch
//! - **Bounded** - at most `max_concurrent_fetches` requests in flight
//! - **Deterministic** - output rows follow input order, every run
//! - **Library-first** - the CLI binary is a thin wrapper over this crate
//!
//! ## Quick Start
//!
//! ```no_run
//! use leetstats::{Config, ProfileScraper};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> leetstats::Result<()> {
//!     let scraper = ProfileScraper::new(Config::default())?;
//!
//!     let usernames = vec!["alice".to_string(), "bob".to_string()];
//!     let records = scraper
//!         .run(&usernames, Path::new("leetcode_profiles.csv"))
//!         .await?;
//!
//!     println!("wrote {} profiles", records.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Single-profile fetching against the GraphQL endpoint
pub mod fetcher;
/// Profile record normalization
pub mod profile;
/// Batch orchestration (bounded-parallel fetch, normalize, write)
pub mod scraper;
/// CSV output
pub mod writer;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, FetchError, Result, WriteError};
pub use fetcher::Fetcher;
pub use profile::{ProfileRecord, normalize};
pub use scraper::ProfileScraper;
pub use writer::write_profiles;
