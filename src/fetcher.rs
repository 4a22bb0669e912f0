//! Single-profile fetch against the GraphQL endpoint
//!
//! One [`Fetcher`] holds one [`reqwest::Client`] and is shared across all
//! workers in a batch. Each [`Fetcher::fetch`] call issues exactly one
//! outbound POST; there are no retries and no caching. Every failure path
//! is converted into a [`FetchError`] so the orchestrator can skip the
//! username uniformly.

use crate::config::Config;
use crate::error::{FetchError, Result};
use reqwest::StatusCode;
use serde_json::{Value, json};
use url::Url;

/// GraphQL query for public profile statistics
///
/// The response shape this selects is navigated by
/// [`normalize`](crate::profile::normalize).
pub(crate) const PROFILE_QUERY: &str = "\
query userProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile {
      ranking
      userAvatar
      aboutMe
    }
    submitStats {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}";

/// Issues profile queries against a fixed GraphQL endpoint
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
    endpoint: Url,
}

impl Fetcher {
    /// Build a fetcher from the configuration
    ///
    /// The underlying HTTP client is constructed once; an optional
    /// per-request timeout from [`Config::request_timeout`] is applied here.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetch the raw profile response for a single username
    ///
    /// Sends one POST with the fixed query document and
    /// `{"username": username}` as variables. Returns the parsed JSON body
    /// verbatim on HTTP 200; no schema validation happens at this layer.
    ///
    /// # Errors
    ///
    /// - [`FetchError::HttpStatus`] for any non-200 response
    /// - [`FetchError::Transport`] for connection, timeout, or body-decode
    ///   failures
    pub async fn fetch(&self, username: &str) -> std::result::Result<Value, FetchError> {
        let payload = json!({
            "query": PROFILE_QUERY,
            "variables": { "username": username },
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| FetchError::transport(username, &e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus {
                username: username.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::transport(username, &e))
    }
}
