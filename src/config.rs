//! Configuration types for leetstats

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Main configuration for the profile scraper
///
/// All fields have sensible defaults: a default-constructed `Config` queries
/// the public LeetCode GraphQL endpoint with five concurrent workers and
/// writes `leetcode_profiles.csv` in the working directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// GraphQL endpoint queried for profile data (default: <https://leetcode.com/graphql/>)
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,

    /// Maximum concurrent profile fetches (default: 5)
    ///
    /// This bounds the number of in-flight HTTP requests at any instant.
    /// A larger batch is still accepted; excess usernames wait for a slot.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_fetches: usize,

    /// Per-request timeout (default: None = rely on the transport's own behavior)
    ///
    /// When set, a request exceeding the timeout is reported as a transport
    /// failure for that username and the batch continues.
    #[serde(default)]
    pub request_timeout: Option<Duration>,

    /// Output CSV path (default: "leetcode_profiles.csv")
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_concurrent_fetches: default_max_concurrent(),
            request_timeout: None,
            output_path: default_output_path(),
        }
    }
}

impl Config {
    /// Validate the configuration
    ///
    /// Returns a [`Error::Config`] naming the offending key when a setting
    /// cannot be honored.
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_fetches == 0 {
            return Err(Error::Config {
                message: "max_concurrent_fetches must be at least 1".to_string(),
                key: Some("max_concurrent_fetches".to_string()),
            });
        }
        if let Some(timeout) = self.request_timeout {
            if timeout.is_zero() {
                return Err(Error::Config {
                    message: "request_timeout must be greater than zero when set".to_string(),
                    key: Some("request_timeout".to_string()),
                });
            }
        }
        Ok(())
    }
}

#[allow(clippy::expect_used)]
fn default_endpoint() -> Url {
    // the literal always parses
    Url::parse("https://leetcode.com/graphql/").expect("default endpoint URL is valid")
}

fn default_max_concurrent() -> usize {
    5
}

fn default_output_path() -> PathBuf {
    PathBuf::from("leetcode_profiles.csv")
}
