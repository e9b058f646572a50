//! Integration tests for flixtui
//!
//! Tests are organized by component:
//! - tvmaze_test: TVMaze API client tests (mockito)
//! - aggregate_test: language, genre and featured aggregation
//! - ui_test: rendering into a TestBackend
//! - e2e_test: App + Fetcher flows (splash -> home -> search -> details)

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
