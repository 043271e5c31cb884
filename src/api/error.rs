// src/api/error.rs
// =============================================================================
// This module defines the error taxonomy for API requests.
//
// Every failed request is classified into exactly one of these variants:
// - InvalidRequest: the descriptor's endpoint was not a valid URL, caught
//   before any network work happens (never a silent no-op)
// - Server: the server answered with a non-2xx status code
// - Decode: the body arrived but did not match the expected JSON schema
// - NoResponse: the transport succeeded but no usable body came back
// - Unknown: any other transport failure (DNS, timeout, TLS, connection)
//
// All errors are terminal for their request - nothing is retried.
// =============================================================================

use thiserror::Error;

/// Classified outcome of a failed API request.
///
/// Each variant carries a human-readable `Display` so the presentation
/// layer can show it to the user directly.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The descriptor produced an endpoint that is not a valid URL.
    ///
    /// Returned synchronously, before any request is issued.
    #[error("invalid request URL: {0}")]
    InvalidRequest(#[from] url::ParseError),

    /// The server responded with a status code outside [200, 300).
    #[error("server returned HTTP {0}")]
    Server(u16),

    /// The response body did not match the expected schema.
    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The transport succeeded but no usable response body arrived.
    #[error("no usable response body")]
    NoResponse,

    /// Any other transport-level failure (DNS, timeout, TLS, connection).
    #[error("request failed: {0}")]
    Unknown(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display_includes_status() {
        let error = ApiError::Server(404);
        assert_eq!(error.to_string(), "server returned HTTP 404");
    }

    #[test]
    fn test_invalid_request_from_parse_error() {
        // The #[from] conversion lets `?` turn a url::ParseError into
        // an InvalidRequest automatically
        let parse_error = url::Url::parse("not a url").unwrap_err();
        let error: ApiError = parse_error.into();
        assert!(matches!(error, ApiError::InvalidRequest(_)));
    }

    #[test]
    fn test_decode_error_display_mentions_body() {
        let cause = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error = ApiError::Decode(cause);
        assert!(error.to_string().starts_with("could not decode response body"));
    }
}
