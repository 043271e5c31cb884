// src/api/mod.rs
// =============================================================================
// This module contains the typed GitHub API core.
//
// Submodules:
// - request: The Requestable trait and the repository-search descriptor
// - client: Generic async HTTP client that executes any Requestable
// - model: Response data structures decoded from the wire
// - error: Classified error taxonomy for failed requests
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod client;
mod error;
mod model;
mod request;

// Re-export public items from submodules
// This lets users write `api::ApiClient` instead of `api::client::ApiClient`
pub use client::ApiClient;
pub use error::ApiError;
pub use model::{Repository, SearchResults};
pub use request::{Requestable, SearchRepositoriesRequest};
