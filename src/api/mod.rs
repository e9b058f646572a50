//! Catalog API clients
//!
//! - TVMaze: show search (`/search/shows`)
//!
//! The UI only talks to a [`Catalog`], so tests can swap in a fake.

pub mod tvmaze;

use std::future::Future;

use thiserror::Error;

use crate::models::SearchHit;

pub use tvmaze::TvMazeClient;

/// The catalog could not be reached or returned something unusable
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog unavailable: HTTP {0}")]
    Status(u16),

    #[error("catalog unavailable: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog unavailable: invalid response: {0}")]
    Decode(String),
}

/// Source of shows for the home feed and search
pub trait Catalog: Send + Sync + 'static {
    /// Broad query approximating "all shows"
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<SearchHit>, CatalogError>> + Send;

    /// Shows matching a user-supplied term
    fn fetch_matching(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<SearchHit>, CatalogError>> + Send;
}
