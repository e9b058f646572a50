//! End-to-end flow tests
//!
//! Drive the `App` through real `Fetcher` tasks against an in-memory
//! catalog: splash → home feed → search with suggestions → details, plus
//! out-of-order responses and catalog failures.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;

use flixtui::api::{Catalog, CatalogError};
use flixtui::app::{App, Route, Screen, Section, SuggestPhase};
use flixtui::fetch::{CatalogEvent, CatalogRequest, Fetcher};
use flixtui::models::{SearchHit, Show};

// =============================================================================
// Fake Catalog
// =============================================================================

#[derive(Default)]
struct FakeCatalog {
    shows: Vec<Show>,
    /// Artificial latency per search term
    delays: HashMap<String, Duration>,
    fail: bool,
    all_calls: AtomicUsize,
    matching_calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    fn with_shows(shows: Vec<Show>) -> Self {
        Self {
            shows,
            ..Default::default()
        }
    }

    fn hits(&self, term: Option<&str>) -> Vec<SearchHit> {
        self.shows
            .iter()
            .filter(|s| match term {
                Some(t) => s.name.to_lowercase().contains(&t.to_lowercase()),
                None => true,
            })
            .map(|s| SearchHit {
                score: 1.0,
                show: s.clone(),
            })
            .collect()
    }

    fn matching_calls(&self) -> Vec<String> {
        self.matching_calls.lock().unwrap().clone()
    }
}

impl Catalog for FakeCatalog {
    async fn fetch_all(&self) -> Result<Vec<SearchHit>, CatalogError> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CatalogError::Status(503));
        }
        Ok(self.hits(None))
    }

    async fn fetch_matching(&self, term: &str) -> Result<Vec<SearchHit>, CatalogError> {
        self.matching_calls.lock().unwrap().push(term.to_string());
        if let Some(delay) = self.delays.get(term).copied() {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(CatalogError::Status(503));
        }
        Ok(self.hits(Some(term)))
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn show(id: u64, name: &str, language: Option<&str>, genres: &[&str]) -> Show {
    let mut s = Show::new(id, name);
    s.language = language.map(str::to_string);
    s.genres = genres.iter().map(|g| g.to_string()).collect();
    s
}

fn catalog_shows() -> Vec<Show> {
    vec![
        show(1, "Lost", Some("English"), &["Drama", "Adventure"]),
        show(2, "Lost Girl", Some("English"), &["Fantasy"]),
        show(3, "Lollipop Chainsaw", Some("Japanese"), &["Action"]),
        show(4, "Dark", Some("German"), &["Drama", "Mystery"]),
        show(5, "Death Note", Some("Japanese"), &["Anime"]),
        show(6, "Unknown Tongue", None, &[]),
    ]
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

async fn next_event(events: &mut UnboundedReceiver<CatalogEvent>) -> CatalogEvent {
    tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("catalog event timed out")
        .expect("channel closed")
}

/// Dispatch everything queued and apply the responses in arrival order
async fn pump<C: Catalog>(
    app: &mut App,
    fetcher: &Fetcher<C>,
    events: &mut UnboundedReceiver<CatalogEvent>,
) {
    let requests = app.drain_requests();
    let count = requests.len();
    fetcher.dispatch_all(requests);
    for _ in 0..count {
        let event = next_event(events).await;
        app.apply(event);
    }
}

/// App past the splash with the home feed loaded
async fn booted(
    catalog: Arc<FakeCatalog>,
) -> (App, Fetcher<FakeCatalog>, UnboundedReceiver<CatalogEvent>, Instant) {
    let (fetcher, mut events) = Fetcher::with_shared(catalog);
    let t0 = Instant::now();
    let mut app = App::with_debounce(t0, Duration::ZERO);
    app.tick(t0 + ms(3000));
    pump(&mut app, &fetcher, &mut events).await;
    (app, fetcher, events, t0 + ms(3000))
}

// =============================================================================
// Home Flow
// =============================================================================

#[tokio::test]
async fn test_splash_to_home_feed() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (fetcher, mut events) = Fetcher::with_shared(Arc::clone(&catalog));

    let t0 = Instant::now();
    let mut app = App::new(t0);
    app.tick(t0 + ms(1000));
    assert_eq!(app.screen, Screen::Splash);
    assert!(app.pending_requests().is_empty());

    app.tick(t0 + ms(3000));
    assert_eq!(app.screen, Screen::Main);
    pump(&mut app, &fetcher, &mut events).await;

    assert_eq!(catalog.all_calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.home.shows.len(), 6);
    assert_eq!(
        app.home.languages.as_slice(),
        &["All", "English", "Japanese", "German", "undefined"].map(String::from)
    );
    assert_eq!(app.home.featured().len(), 5);
    assert!(!app.home.loading.is_loading());
}

#[tokio::test]
async fn test_feed_rotation_cycle_with_five_featured() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (mut app, _fetcher, _events, t) = booted(catalog).await;

    app.tick(t + ms(20_000));
    assert_eq!(app.home.rotation.index(), 4);
    app.tick(t + ms(25_000));
    assert_eq!(app.home.rotation.index(), 0);
}

#[tokio::test]
async fn test_language_filter_narrows_featured_only() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (mut app, _fetcher, _events, _t) = booted(catalog).await;

    app.home.select_language("Japanese");
    let featured: Vec<u64> = app.home.featured().iter().map(|s| s.id).collect();
    assert_eq!(featured, vec![3, 5]);

    // Genre rows keep the whole catalog
    let drama: Vec<u64> = app.home.row(0).iter().map(|s| s.id).collect();
    assert_eq!(drama, vec![1, 4]);
}

#[tokio::test]
async fn test_home_details_round_trip() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (mut app, _fetcher, _events, t) = booted(Arc::clone(&catalog)).await;

    app.handle_key_at(key(KeyCode::Enter), t);
    assert_eq!(app.detail_show().map(|s| s.name.as_str()), Some("Lost"));
    assert!(!app.home.rotation.is_running());
    assert!(app.pending_requests().is_empty());

    app.handle_key_at(key(KeyCode::Esc), t);
    assert_eq!(app.current_route(), &Route::Root);
    assert!(app.home.rotation.is_running());
    assert_eq!(catalog.all_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_feed_failure_leaves_empty_home() {
    let catalog = Arc::new(FakeCatalog {
        fail: true,
        ..Default::default()
    });
    let (app, _fetcher, _events, _t) = booted(catalog).await;

    assert_eq!(app.screen, Screen::Main);
    assert!(app.home.shows.is_empty());
    assert!(!app.home.loading.is_loading());
}

// =============================================================================
// Search Flow
// =============================================================================

#[tokio::test]
async fn test_one_character_never_fetches() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (mut app, fetcher, mut events, t) = booted(Arc::clone(&catalog)).await;

    app.handle_key_at(key(KeyCode::Char('/')), t);
    app.handle_key_at(key(KeyCode::Char('l')), t);
    app.tick(t + ms(1000));
    pump(&mut app, &fetcher, &mut events).await;

    assert!(catalog.matching_calls().is_empty());
    assert!(app.search.suggestions.is_empty());
}

#[tokio::test]
async fn test_two_characters_fetch_once() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (mut app, fetcher, mut events, t) = booted(Arc::clone(&catalog)).await;

    app.handle_key_at(key(KeyCode::Char('/')), t);
    app.handle_key_at(key(KeyCode::Char('l')), t);
    app.handle_key_at(key(KeyCode::Char('o')), t);
    app.tick(t + ms(100));
    app.tick(t + ms(200));
    pump(&mut app, &fetcher, &mut events).await;

    assert_eq!(catalog.matching_calls(), vec!["lo".to_string()]);
    assert_eq!(app.search.suggestions.len(), 3);
    assert_eq!(app.search.phase, SuggestPhase::Suggesting);
}

#[tokio::test]
async fn test_select_lost_suggestion_commits() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (mut app, fetcher, mut events, t) = booted(Arc::clone(&catalog)).await;

    app.handle_key_at(key(KeyCode::Char('/')), t);
    app.handle_key_at(key(KeyCode::Char('l')), t);
    app.handle_key_at(key(KeyCode::Char('o')), t);
    app.tick(t);
    pump(&mut app, &fetcher, &mut events).await;

    let index = app
        .search
        .suggestions
        .iter()
        .position(|s| s.name == "Lost")
        .unwrap();
    app.select_suggestion(index);
    assert_eq!(app.search.query, "Lost");
    assert!(app.search.suggestions.is_empty());

    pump(&mut app, &fetcher, &mut events).await;

    assert_eq!(catalog.matching_calls(), vec!["lo".to_string(), "Lost".to_string()]);
    let results: Vec<&str> = app.search.results.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(results, vec!["Lost", "Lost Girl"]);
    assert!(app.search.suggestions.is_empty());
    assert_eq!(app.search.phase, SuggestPhase::Committed);
}

#[tokio::test]
async fn test_slow_stale_suggestions_never_overwrite_newer() {
    let mut fake = FakeCatalog::with_shows(catalog_shows());
    fake.delays.insert("lo".into(), ms(300));
    let catalog = Arc::new(fake);
    let (mut app, fetcher, mut events, t) = booted(Arc::clone(&catalog)).await;

    app.handle_key_at(key(KeyCode::Char('/')), t);
    app.handle_key_at(key(KeyCode::Char('l')), t);
    app.handle_key_at(key(KeyCode::Char('o')), t);
    app.tick(t);
    fetcher.dispatch_all(app.drain_requests());

    app.handle_key_at(key(KeyCode::Char('s')), t);
    app.tick(t);
    fetcher.dispatch_all(app.drain_requests());

    // "los" answers first, the slow "lo" arrives afterwards
    let first = next_event(&mut events).await;
    assert_eq!(first.token, 2);
    app.apply(first);
    let second = next_event(&mut events).await;
    assert_eq!(second.token, 1);
    app.apply(second);

    let names: Vec<&str> = app.search.suggestions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Lost", "Lost Girl"]);
}

#[tokio::test]
async fn test_search_failure_keeps_previous_results() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (mut app, fetcher, mut events, t) = booted(Arc::clone(&catalog)).await;

    app.commit_search("dark");
    pump(&mut app, &fetcher, &mut events).await;
    assert_eq!(app.search.results.len(), 1);

    // Same app, now against a failing catalog
    let failing = Arc::new(FakeCatalog {
        fail: true,
        ..Default::default()
    });
    let (failing_fetcher, mut failing_events) = Fetcher::with_shared(failing);
    app.handle_key_at(key(KeyCode::Char('/')), t);
    app.commit_search("death");
    pump(&mut app, &failing_fetcher, &mut failing_events).await;

    assert_eq!(app.search.results.len(), 1);
    assert_eq!(app.search.results[0].name, "Dark");
    assert!(!app.search.loading.is_loading());
}

#[tokio::test]
async fn test_search_result_details_return_to_search() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (mut app, fetcher, mut events, t) = booted(catalog).await;

    app.handle_key_at(key(KeyCode::Char('/')), t);
    for c in "death".chars() {
        app.handle_key_at(key(KeyCode::Char(c)), t);
    }
    app.handle_key_at(key(KeyCode::Enter), t);
    pump(&mut app, &fetcher, &mut events).await;

    app.handle_key_at(key(KeyCode::Enter), t);
    assert_eq!(app.section, Section::Search);
    assert_eq!(app.detail_show().map(|s| s.id), Some(5));

    app.handle_key_at(key(KeyCode::Esc), t);
    assert_eq!(app.section, Section::Search);
    assert_eq!(app.current_route(), &Route::Root);
    assert_eq!(app.search.query, "death");
}

// =============================================================================
// Shutdown
// =============================================================================

#[tokio::test]
async fn test_responses_after_shutdown_are_ignored() {
    let catalog = Arc::new(FakeCatalog::with_shows(catalog_shows()));
    let (fetcher, events) = Fetcher::with_shared(catalog);
    drop(events);

    let handles = vec![
        fetcher.dispatch(CatalogRequest::Feed { token: 1 }),
        fetcher.dispatch(CatalogRequest::Search {
            term: "lost".into(),
            token: 1,
        }),
    ];

    for joined in futures::future::join_all(handles).await {
        assert!(joined.is_ok());
    }
}
