// src/search/mod.rs
// =============================================================================
// This module manages search sessions.
//
// Features:
// - A monotonically increasing sequence number per issued search
// - Stale results (superseded by a newer search) are discarded, never shown
// - Displayed results live in a ResultStore with a single writer path
// - Subscribers receive updates over a watch channel and hop to their own
//   execution context - the session never calls back synchronously
// =============================================================================

mod session;

// Re-export the session types
pub use session::{ResultStore, SearchListing, SearchSession, SearchUpdate};
