//! Batch orchestration: bounded-parallel fetch, normalize, write
//!
//! [`ProfileScraper`] fans one fetch task out per username, gated by a
//! semaphore so at most `max_concurrent_fetches` requests are in flight at
//! any instant. The batch joins fully before anything is written: results
//! are collected in input order, per-username failures are logged and
//! skipped, and only the final CSV write can fail the run.

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::profile::{self, ProfileRecord};
use crate::writer;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Batch profile scraper
///
/// Cheap to clone; the HTTP client and configuration are shared.
#[derive(Clone)]
pub struct ProfileScraper {
    fetcher: Arc<Fetcher>,
    config: Arc<Config>,
}

impl ProfileScraper {
    /// Create a scraper from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let fetcher = Fetcher::new(&config)?;
        Ok(Self {
            fetcher: Arc::new(fetcher),
            config: Arc::new(config),
        })
    }

    /// Fetch raw responses for all usernames with bounded parallelism
    ///
    /// Returns one slot per input username, in input order regardless of
    /// completion order; a failed fetch leaves `None` at its slot. Blocks
    /// until every dispatched request has completed (full-batch join).
    pub async fn fetch_all(&self, usernames: &[String]) -> Vec<Option<Value>> {
        let concurrent_limit = Arc::new(Semaphore::new(self.config.max_concurrent_fetches));

        let handles: Vec<_> = usernames
            .iter()
            .map(|username| {
                let fetcher = Arc::clone(&self.fetcher);
                let limit = Arc::clone(&concurrent_limit);
                let username = username.clone();
                tokio::spawn(async move {
                    // Closed semaphores cannot happen here; treat it as a skip
                    let Ok(_permit) = limit.acquire_owned().await else {
                        return None;
                    };
                    match fetcher.fetch(&username).await {
                        Ok(raw) => {
                            tracing::debug!(username = %username, "profile fetched");
                            Some(raw)
                        }
                        Err(e) => {
                            tracing::warn!(username = %username, error = %e, "profile fetch failed");
                            None
                        }
                    }
                })
            })
            .collect();

        // Joining the handles in spawn order keeps results aligned with the
        // input sequence no matter which request finishes first.
        futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|joined| match joined {
                Ok(slot) => slot,
                Err(e) => {
                    tracing::warn!(error = %e, "fetch task panicked");
                    None
                }
            })
            .collect()
    }

    /// Run the whole pipeline for one batch
    ///
    /// Fetches every username, normalizes the successful responses (dropping
    /// those without a matched user), and writes the CSV artifact to
    /// `output`. Returns the records that were written.
    ///
    /// Per-username failures never abort the batch; only a failure to
    /// produce the output file surfaces as an error.
    pub async fn run(&self, usernames: &[String], output: &Path) -> Result<Vec<ProfileRecord>> {
        tracing::info!(
            users = usernames.len(),
            concurrency = self.config.max_concurrent_fetches,
            "starting profile batch"
        );

        let raw_responses = self.fetch_all(usernames).await;

        let mut records = Vec::with_capacity(raw_responses.len());
        for (username, raw) in usernames.iter().zip(&raw_responses) {
            let Some(raw) = raw else { continue };
            match profile::normalize(raw) {
                Some(record) => records.push(record),
                None => {
                    tracing::warn!(username = %username, "response had no matched user, dropping");
                }
            }
        }

        writer::write_profiles(&records, output)?;
        tracing::info!(
            path = %output.display(),
            rows = records.len(),
            "profile data written"
        );
        Ok(records)
    }

    /// Run the pipeline against the configured output path
    pub async fn run_to_configured_output(
        &self,
        usernames: &[String],
    ) -> Result<Vec<ProfileRecord>> {
        let output = self.config.output_path.clone();
        self.run(usernames, &output).await
    }
}
