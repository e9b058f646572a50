//! flixtui - Netflix-styled terminal browser for TV shows
//!
//! Browse the TVMaze catalog by language and genre, watch a rotating
//! featured banner, and search with live suggestions.
//!
//! # Modules
//!
//! - `models` - Show records as returned by the catalog
//! - `catalog` - Language set, genre index and featured window
//! - `api` - Catalog trait and the TVMaze client
//! - `fetch` - Background request execution and stale-response tokens
//! - `timers` - Splash, rotation and debounce deadlines
//! - `app` - Application state and navigation
//! - `ui` - TUI components
//! - `config` / `cli` - Settings file and launch flags

pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod models;
pub mod timers;
pub mod ui;

// Re-export commonly used types
pub use models::{SearchHit, Show};

pub use api::{Catalog, CatalogError, TvMazeClient};
pub use app::{App, Screen, Section};
pub use fetch::{CatalogEvent, CatalogRequest, Fetcher};
