//! Profile record normalization
//!
//! Turns an untyped GraphQL response into a flat [`ProfileRecord`].
//! Extraction is best-effort per field: a missing intermediate key yields an
//! absent field, never an error. The one hard requirement is a non-empty
//! `matchedUser` object; without it no record exists for that username.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized profile statistics for one user
///
/// Field order doubles as the CSV column order:
/// `username, ranking, avatar, about_me, total_problems_solved`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Username as echoed by the endpoint
    pub username: Option<String>,
    /// Global ranking
    pub ranking: Option<u64>,
    /// Avatar image URL
    pub avatar: Option<String>,
    /// Free-text profile description
    pub about_me: Option<String>,
    /// Accepted-submission counts summed across all difficulties
    pub total_problems_solved: u64,
}

/// Normalize a raw response into a [`ProfileRecord`]
///
/// Navigates `data.matchedUser` and the nested `profile` / `submitStats`
/// objects. Returns `None` when `matchedUser` is absent, `null`, or an empty
/// object; every other missing key degrades to an absent field.
///
/// Pure and deterministic; the caller decides what to do with drops.
pub fn normalize(raw: &Value) -> Option<ProfileRecord> {
    let user = raw
        .pointer("/data/matchedUser")
        .and_then(Value::as_object)
        .filter(|user| !user.is_empty())?;

    let profile = user.get("profile");

    let total_problems_solved = user
        .get("submitStats")
        .and_then(|stats| stats.get("acSubmissionNum"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("count").and_then(Value::as_u64))
                .sum()
        })
        .unwrap_or(0);

    Some(ProfileRecord {
        username: user
            .get("username")
            .and_then(Value::as_str)
            .map(str::to_owned),
        ranking: profile
            .and_then(|p| p.get("ranking"))
            .and_then(Value::as_u64),
        avatar: profile
            .and_then(|p| p.get("userAvatar"))
            .and_then(Value::as_str)
            .map(str::to_owned),
        about_me: profile
            .and_then(|p| p.get("aboutMe"))
            .and_then(Value::as_str)
            .map(str::to_owned),
        total_problems_solved,
    })
}
