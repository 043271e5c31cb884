// src/search/session.rs
// =============================================================================
// This module implements the search session: the layer between the raw API
// client and whatever renders the results.
//
// The problem it solves:
// - Two overlapping searches race. A later-issued, faster-completing search
//   must win; the earlier one's result is stale and must be discarded.
//
// How it works:
// 1. Every search is stamped with the next value of an atomic counter
// 2. When the network call completes, the outcome is applied through the
//    ResultStore under a lock - the store only accepts the sequence number
//    that is still the latest issued, and never moves backwards
// 3. Accepted updates are broadcast on a watch channel; a renderer
//    subscribes and picks them up on its own task
//
// The session holds the only writer path into the store, so displayed
// results can never be clobbered by a stale callback.
// =============================================================================

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{watch, Mutex};

use crate::api::{ApiClient, Repository, SearchRepositoriesRequest, SearchResults};

// Base URL of the public GitHub API, overridable for tests
const GITHUB_API_URL: &str = "https://api.github.com";

// A search outcome shaped for display
//
// Built from the wire-level SearchResults: a missing `items` key and an
// empty array both render as zero rows, so the display model flattens
// the Option away while keeping the server's ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct SearchListing {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<Repository>,
}

impl From<SearchResults> for SearchListing {
    fn from(results: SearchResults) -> Self {
        SearchListing {
            total_count: results.total_count,
            incomplete_results: results.incomplete_results,
            items: results.items.unwrap_or_default(),
        }
    }
}

/// One delivered search outcome: the term it belongs to, and either a
/// listing or a user-facing error description.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchUpdate {
    pub term: String,
    pub outcome: Result<SearchListing, String>,
}

// Holds the currently displayed results
//
// `apply` is the only way in. It accepts an update only when its sequence
// number is still the latest issued, and it never regresses to an older
// sequence - so however many searches are in flight, the store reflects
// exactly one winner.
#[derive(Debug, Default)]
pub struct ResultStore {
    applied: u64,
    items: Vec<Repository>,
}

impl ResultStore {
    /// Applies an update if it is still current.
    ///
    /// Returns true if the update was accepted, false if it was stale
    /// (not the latest issued sequence, or older than what's applied).
    pub fn apply(&mut self, seq: u64, latest_issued: u64, update: &SearchUpdate) -> bool {
        if seq != latest_issued || seq <= self.applied {
            return false;
        }

        self.applied = seq;
        if let Ok(listing) = &update.outcome {
            self.items = listing.items.clone();
        }
        true
    }

    /// The currently displayed repositories, in server order.
    pub fn items(&self) -> &[Repository] {
        &self.items
    }

    /// Sequence number of the last accepted update (0 = none yet).
    pub fn applied_seq(&self) -> u64 {
        self.applied
    }
}

/// Serializes result application for overlapping searches.
pub struct SearchSession {
    client: ApiClient,
    base_url: String,
    issued: AtomicU64,
    store: Mutex<ResultStore>,
    updates: watch::Sender<Option<SearchUpdate>>,
}

impl SearchSession {
    /// Creates a session against the public GitHub API.
    pub fn new(client: ApiClient) -> Self {
        Self::with_base_url(client, GITHUB_API_URL)
    }

    /// Creates a session against a different API host (tests, mirrors).
    pub fn with_base_url(client: ApiClient, base_url: impl Into<String>) -> Self {
        let (updates, _) = watch::channel(None);
        SearchSession {
            client,
            base_url: base_url.into(),
            issued: AtomicU64::new(0),
            store: Mutex::new(ResultStore::default()),
            updates,
        }
    }

    /// Subscribes to accepted search updates.
    ///
    /// The receiver side runs on the subscriber's own task; the session
    /// never executes subscriber code synchronously.
    pub fn subscribe(&self) -> watch::Receiver<Option<SearchUpdate>> {
        self.updates.subscribe()
    }

    /// Runs one search for `term`.
    ///
    /// Returns the update if it was accepted, or None if a newer search
    /// was issued while this one was in flight (the result is stale and
    /// neither the store nor subscribers see it).
    pub async fn search(&self, term: &str) -> Option<SearchUpdate> {
        let seq = self.next_seq();

        let request = SearchRepositoriesRequest::with_base_url(&self.base_url, term);
        let outcome = match self.client.request(&request).await {
            Ok(results) => Ok(SearchListing::from(results)),
            Err(error) => Err(error.to_string()),
        };

        let update = SearchUpdate {
            term: term.to_string(),
            outcome,
        };
        self.apply(seq, update).await
    }

    /// A snapshot of the currently displayed repositories.
    pub async fn current_items(&self) -> Vec<Repository> {
        self.store.lock().await.items().to_vec()
    }

    // Stamps the next search with a fresh sequence number
    fn next_seq(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    // Applies a completed search through the store's single writer path.
    // The staleness check and the write happen under one lock, so two
    // completing searches cannot interleave.
    async fn apply(&self, seq: u64, update: SearchUpdate) -> Option<SearchUpdate> {
        let latest_issued = self.issued.load(Ordering::SeqCst);
        let mut store = self.store.lock().await;

        if !store.apply(seq, latest_issued, &update) {
            return None;
        }

        // Receivers may all be dropped; that's fine for a one-shot CLI
        let _ = self.updates.send(Some(update.clone()));
        Some(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_update(term: &str, names: &[&str]) -> SearchUpdate {
        SearchUpdate {
            term: term.to_string(),
            outcome: Ok(SearchListing {
                total_count: names.len() as u64,
                incomplete_results: false,
                items: names
                    .iter()
                    .map(|name| Repository {
                        name: name.to_string(),
                        html_url: format!("https://github.com/x/{}", name),
                    })
                    .collect(),
            }),
        }
    }

    #[test]
    fn test_store_accepts_latest_issued() {
        let mut store = ResultStore::default();
        let accepted = store.apply(1, 1, &listing_update("rust", &["rust"]));

        assert!(accepted);
        assert_eq!(store.applied_seq(), 1);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_store_discards_superseded_sequence() {
        let mut store = ResultStore::default();

        // Search 2 was issued while search 1 was in flight; search 1's
        // result arrives first but is already stale
        let accepted = store.apply(1, 2, &listing_update("ru", &["ruby"]));
        assert!(!accepted);
        assert!(store.items().is_empty());

        let accepted = store.apply(2, 2, &listing_update("rust", &["rust"]));
        assert!(accepted);
        assert_eq!(store.items()[0].name, "rust");
    }

    #[test]
    fn test_store_never_regresses() {
        let mut store = ResultStore::default();
        assert!(store.apply(2, 2, &listing_update("rust", &["rust"])));

        // A late duplicate of an older sequence must not win, even if the
        // caller passes a matching latest_issued by mistake
        assert!(!store.apply(1, 1, &listing_update("ru", &["ruby"])));
        assert_eq!(store.items()[0].name, "rust");
    }

    #[test]
    fn test_store_keeps_items_on_error_update() {
        let mut store = ResultStore::default();
        assert!(store.apply(1, 1, &listing_update("rust", &["rust"])));

        let failed = SearchUpdate {
            term: "rust lang".to_string(),
            outcome: Err("server returned HTTP 500".to_string()),
        };
        assert!(store.apply(2, 2, &failed));

        // The error is current (applied bumped) but the last good listing
        // stays visible
        assert_eq!(store.applied_seq(), 2);
        assert_eq!(store.items()[0].name, "rust");
    }

    #[tokio::test]
    async fn test_session_discards_stale_result() {
        let session = SearchSession::new(ApiClient::new());

        // Simulate: search 1 issued, then search 2 issued, then search 1's
        // network call completes last
        let seq1 = session.next_seq();
        let seq2 = session.next_seq();

        let stale = session.apply(seq1, listing_update("ru", &["ruby"])).await;
        assert!(stale.is_none());

        let current = session.apply(seq2, listing_update("rust", &["rust"])).await;
        assert!(current.is_some());
        assert_eq!(session.current_items().await[0].name, "rust");
    }

    #[tokio::test]
    async fn test_subscribers_see_only_accepted_updates() {
        let session = SearchSession::new(ApiClient::new());
        let mut receiver = session.subscribe();

        let seq1 = session.next_seq();
        let seq2 = session.next_seq();

        // Stale update: channel stays untouched
        session.apply(seq1, listing_update("ru", &["ruby"])).await;
        assert!(receiver.borrow().is_none());

        session.apply(seq2, listing_update("rust", &["rust"])).await;
        let update = receiver.borrow_and_update().clone().unwrap();
        assert_eq!(update.term, "rust");
    }

    #[tokio::test]
    async fn test_session_end_to_end_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/repositories?q=rust")
            .with_status(200)
            .with_body(
                r#"{"total_count": 1, "incomplete_results": false,
                    "items": [{"name": "rust", "html_url": "https://github.com/rust-lang/rust"}]}"#,
            )
            .create_async()
            .await;

        let session = SearchSession::with_base_url(ApiClient::new(), server.url());
        let update = session.search("rust").await.unwrap();

        let listing = update.outcome.unwrap();
        assert_eq!(listing.total_count, 1);
        assert_eq!(listing.items[0].name, "rust");
        assert_eq!(session.current_items().await.len(), 1);
    }

    #[tokio::test]
    async fn test_session_surfaces_error_description() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/repositories?q=rust")
            .with_status(500)
            .create_async()
            .await;

        let session = SearchSession::with_base_url(ApiClient::new(), server.url());
        let update = session.search("rust").await.unwrap();

        let description = update.outcome.unwrap_err();
        assert_eq!(description, "server returned HTTP 500");
    }
}
