// src/api/client.rs
// =============================================================================
// This module implements the generic HTTP client.
//
// The client accepts any Requestable descriptor, performs exactly one
// network round trip, and resolves to either the decoded result or a
// classified ApiError. Because the result is delivered through a future
// (not a completion callback), it is produced exactly once, and the caller
// decides on which task/context to continue - there is no synchronous
// re-dispatch into the caller's context.
//
// Classification policy, checked in order:
// 1. Descriptor URL invalid            -> InvalidRequest (no network work)
// 2. Transport failure                 -> Unknown(cause)
// 3. Transport ok, body unreadable     -> NoResponse
// 4. Status in [200, 300), decode fail -> Decode(cause)
// 5. Status in [200, 300), decode ok   -> success
// 6. Status outside [200, 300)         -> Server(status), body ignored
//
// No retries, no per-call timeout overrides. Dropping the returned future
// cancels the request.
// =============================================================================

use std::time::Duration;

use reqwest::Client;

use crate::api::error::ApiError;
use crate::api::request::Requestable;

// Identifies us to the GitHub API, which rejects requests without a User-Agent.
// Set at client level so descriptors stay free of custom headers.
const USER_AGENT: &str = "repo-lookout";

/// Generic API client. Cheap to clone - the inner reqwest::Client is a
/// shared connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Creates a client with a 10 second timeout.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        ApiClient { client }
    }

    /// Executes one request described by `requestable`.
    ///
    /// Resolves exactly once: either the decoded model or a classified
    /// ApiError. Errors are terminal - nothing is retried.
    pub async fn request<T: Requestable>(&self, requestable: &T) -> Result<T::Model, ApiError> {
        // Build and validate the URL before touching the network.
        // A malformed endpoint is an explicit error, not a silent no-op.
        let url = requestable.url()?;

        let response = self
            .client
            .request(requestable.method(), url)
            .headers(requestable.headers())
            .send()
            .await
            .map_err(ApiError::Unknown)?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(|_| ApiError::NoResponse)?;
            requestable.decode(&body)
        } else {
            Err(ApiError::Server(status.as_u16()))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
