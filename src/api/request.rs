// src/api/request.rs
// =============================================================================
// This module defines the Requestable trait - a value that fully describes
// one API call - plus the concrete repository-search descriptor.
//
// A Requestable supplies:
// - the request target URL (built and validated up front)
// - the HTTP method (constant per descriptor type)
// - a header map (possibly empty)
// - a decode function from raw bytes into the descriptor's own result type
//
// The result type is an associated type, so each descriptor fixes its own
// response shape at compile time. No trait objects, no inheritance - the
// client is generic over any Requestable.
// =============================================================================

use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

use crate::api::error::ApiError;
use crate::api::model::SearchResults;

// Base URL of the GitHub REST API
const GITHUB_API_URL: &str = "https://api.github.com";

/// A value object describing one API call: target, method, headers, and
/// how to decode the response body.
pub trait Requestable {
    /// The decoded response type this descriptor produces.
    type Model;

    /// Builds the fully-formed request URL.
    ///
    /// Fails with `ApiError::InvalidRequest` if the endpoint is not a
    /// syntactically valid URL - callers see the error before any network
    /// work happens.
    fn url(&self) -> Result<Url, ApiError>;

    /// The HTTP method for this request. GET unless overridden.
    fn method(&self) -> Method {
        Method::GET
    }

    /// Headers to attach to the request. Empty unless overridden.
    fn headers(&self) -> HeaderMap {
        HeaderMap::new()
    }

    /// Decodes the raw response body into the descriptor's result type.
    fn decode(&self, body: &[u8]) -> Result<Self::Model, ApiError>;
}

// Descriptor for GET /search/repositories?q=<term>
//
// The search term is attached as a proper query parameter, so reserved
// characters (spaces, '&', '#', non-ASCII) are percent-encoded by the
// url crate rather than pasted into the string raw.
#[derive(Debug, Clone)]
pub struct SearchRepositoriesRequest {
    search_word: String,
    base_url: String,
}

impl SearchRepositoriesRequest {
    /// Creates a search request against the public GitHub API.
    pub fn new(search_word: impl Into<String>) -> Self {
        Self::with_base_url(GITHUB_API_URL, search_word)
    }

    /// Creates a search request against a different API host.
    ///
    /// Used by tests (mock server) and self-hosted GitHub instances.
    pub fn with_base_url(base_url: impl Into<String>, search_word: impl Into<String>) -> Self {
        SearchRepositoriesRequest {
            search_word: search_word.into(),
            base_url: base_url.into(),
        }
    }
}

impl Requestable for SearchRepositoriesRequest {
    type Model = SearchResults;

    fn url(&self) -> Result<Url, ApiError> {
        // Url::parse returns Err for a malformed base, which the ? operator
        // converts into ApiError::InvalidRequest
        let mut url = Url::parse(&format!("{}/search/repositories", self.base_url))?;
        url.query_pairs_mut().append_pair("q", &self.search_word);
        Ok(url)
    }

    fn decode(&self, body: &[u8]) -> Result<SearchResults, ApiError> {
        serde_json::from_slice(body).map_err(ApiError::Decode)
    }
}
