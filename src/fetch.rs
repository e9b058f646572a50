//! Background catalog fetching
//!
//! The app never awaits the network. It queues [`CatalogRequest`]s, the UI
//! loop hands them to a [`Fetcher`], and each request runs as its own tokio
//! task that reports back with a [`CatalogEvent`] over a channel. Every
//! request carries a token so the app can drop responses that were
//! overtaken by a newer request for the same field.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::api::{Catalog, CatalogError};
use crate::models::{SearchHit, Show};

// =============================================================================
// Request Tokens
// =============================================================================

/// Which piece of UI state a response is destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Home feed (bulk query)
    Feed,
    /// Search suggestions dropdown
    Suggestions,
    /// Committed search results
    Results,
}

/// Monotonic per-field request counters
#[derive(Debug, Clone, Default)]
pub struct RequestTokens {
    feed: u64,
    suggestions: u64,
    results: u64,
}

impl RequestTokens {
    fn slot(&mut self, field: Field) -> &mut u64 {
        match field {
            Field::Feed => &mut self.feed,
            Field::Suggestions => &mut self.suggestions,
            Field::Results => &mut self.results,
        }
    }

    /// Issue a fresh token, superseding every earlier one for `field`
    pub fn issue(&mut self, field: Field) -> u64 {
        let slot = self.slot(field);
        *slot += 1;
        *slot
    }

    /// Supersede outstanding requests without issuing a new one
    pub fn invalidate(&mut self, field: Field) {
        self.issue(field);
    }

    /// Latest token issued for `field`
    pub fn latest(&self, field: Field) -> u64 {
        match field {
            Field::Feed => self.feed,
            Field::Suggestions => self.suggestions,
            Field::Results => self.results,
        }
    }

    pub fn is_current(&self, field: Field, token: u64) -> bool {
        self.latest(field) == token
    }
}

// =============================================================================
// Requests & Events
// =============================================================================

/// Work the app wants done against the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRequest {
    /// Bulk query for the home feed
    Feed { token: u64 },
    /// Suggestions for a partially typed query
    Suggest { term: String, token: u64 },
    /// Committed search
    Search { term: String, token: u64 },
}

impl CatalogRequest {
    pub fn field(&self) -> Field {
        match self {
            CatalogRequest::Feed { .. } => Field::Feed,
            CatalogRequest::Suggest { .. } => Field::Suggestions,
            CatalogRequest::Search { .. } => Field::Results,
        }
    }

    pub fn token(&self) -> u64 {
        match self {
            CatalogRequest::Feed { token }
            | CatalogRequest::Suggest { token, .. }
            | CatalogRequest::Search { token, .. } => *token,
        }
    }
}

/// Outcome of one catalog request
#[derive(Debug)]
pub struct CatalogEvent {
    pub field: Field,
    pub token: u64,
    pub result: Result<Vec<Show>, CatalogError>,
}

fn into_shows(hits: Vec<SearchHit>) -> Vec<Show> {
    hits.into_iter().map(SearchHit::into_show).collect()
}

/// Run a single request to completion
pub async fn execute<C: Catalog>(catalog: &C, request: CatalogRequest) -> CatalogEvent {
    let field = request.field();
    let token = request.token();

    let result = match &request {
        CatalogRequest::Feed { .. } => catalog.fetch_all().await,
        CatalogRequest::Suggest { term, .. } | CatalogRequest::Search { term, .. } => {
            catalog.fetch_matching(term).await
        }
    };

    CatalogEvent {
        field,
        token,
        result: result.map(into_shows),
    }
}

// =============================================================================
// Fetcher
// =============================================================================

/// Spawns catalog requests and forwards their results to the UI loop
pub struct Fetcher<C> {
    catalog: Arc<C>,
    events: mpsc::UnboundedSender<CatalogEvent>,
}

impl<C: Catalog> Fetcher<C> {
    /// Create a fetcher and the receiving end the UI loop drains
    pub fn new(catalog: C) -> (Self, mpsc::UnboundedReceiver<CatalogEvent>) {
        Self::with_shared(Arc::new(catalog))
    }

    /// Create a fetcher over a catalog the caller keeps a handle to
    pub fn with_shared(catalog: Arc<C>) -> (Self, mpsc::UnboundedReceiver<CatalogEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (Self { catalog, events }, rx)
    }

    /// Start `request` in the background
    pub fn dispatch(&self, request: CatalogRequest) -> tokio::task::JoinHandle<()> {
        debug!(?request, "dispatching catalog request");
        let catalog = Arc::clone(&self.catalog);
        let events = self.events.clone();

        tokio::spawn(async move {
            let event = execute(catalog.as_ref(), request).await;
            // Receiver gone means the UI has shut down
            if events.send(event).is_err() {
                trace!("catalog response dropped after shutdown");
            }
        })
    }

    /// Start every request in order
    pub fn dispatch_all(&self, requests: impl IntoIterator<Item = CatalogRequest>) {
        for request in requests {
            self.dispatch(request);
        }
    }
}
