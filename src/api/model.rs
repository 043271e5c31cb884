// src/api/model.rs
// =============================================================================
// This module defines the data structures decoded from the GitHub search API.
//
// The wire format is JSON with snake_case field names, which lines up with
// Rust's own field naming, so no rename attributes are needed. Unknown
// fields in the response are ignored (serde's default behavior).
//
// These types are plain values: never mutated after construction, cheap to
// clone, and comparable so callers can check two searches for equal results.
// =============================================================================

use serde::{Deserialize, Serialize};

// The decoded body of a repository search response
//
// Consumed subset of https://api.github.com/search/repositories:
//   total_count        - total number of matching repositories
//   incomplete_results - true if the server timed out and returned a partial set
//   items              - the matching repositories, in server order
//
// `items` is Option because the key may be absent entirely; a present-but-empty
// array decodes to Some(vec![]), which is a different (and meaningful) state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub total_count: u64,
    pub incomplete_results: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Repository>>,
}

// A single repository as rendered in the result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name (e.g., "rust")
    pub name: String,
    /// Absolute URL of the repository page (e.g., "https://github.com/rust-lang/rust")
    pub html_url: String,
}
