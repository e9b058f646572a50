//! App state and core application logic
//!
//! Owns the screen router (splash → main → details), the per-section
//! navigation stacks, and the home and search controllers. Network work is
//! queued as [`CatalogRequest`]s and its results come back through
//! [`App::apply`]; nothing in here awaits.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::catalog::{
    self, CategoryIndex, LanguageSet, ALL_LANGUAGES, ROW_LENGTH,
};
use crate::fetch::{CatalogEvent, CatalogRequest, Field, RequestTokens};
use crate::models::Show;
use crate::timers::{Debounce, FeatureRotation, OneShot, DEFAULT_DEBOUNCE, SPLASH_DELAY};

/// Shortest query that asks the catalog for suggestions
pub const MIN_SUGGEST_LEN: usize = 2;

// =============================================================================
// Screens & Routes
// =============================================================================

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Logo shown at startup, replaced by `Main` after a fixed delay
    #[default]
    Splash,
    /// Tabbed home/search sections
    Main,
}

/// Tab inside the main screen; each owns its own route stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Search,
}

impl Section {
    pub fn toggle(self) -> Self {
        match self {
            Section::Home => Section::Search,
            Section::Search => Section::Home,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Search => "Search",
        }
    }
}

/// Entry on a section's navigation stack
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// The section's own screen
    Root,
    /// Details for one show; the route owns the complete record
    Details(Arc<Show>),
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Loading State
// =============================================================================

/// Loading state for async operations
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    /// Loading with optional message
    Loading(Option<String>),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadingState::Loading(Some(msg)) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Selection State
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// First item of a `height`-row viewport that keeps the selection visible
    pub fn window_start(&self, height: usize) -> usize {
        if height > 0 && self.selected >= height {
            self.selected + 1 - height
        } else {
            0
        }
    }
}

// =============================================================================
// Home
// =============================================================================

/// Which strip of the home feed has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    /// Language filter chips
    Languages,
    /// Rotating featured highlight
    #[default]
    Featured,
    /// Genre row by position in the category index
    Genre(usize),
}

/// Home feed state
///
/// `languages`, `categories` and `filtered` are derived from `shows` and
/// are rebuilt together whenever `shows` or the language filter changes.
#[derive(Debug, Clone)]
pub struct HomeState {
    pub shows: Vec<Arc<Show>>,
    pub languages: LanguageSet,
    pub categories: CategoryIndex,
    pub selected_language: String,
    pub filtered: Vec<Arc<Show>>,
    pub rotation: FeatureRotation,
    pub focus: HomeFocus,
    /// Chip under the cursor in the language strip
    pub language_cursor: usize,
    /// Card under the cursor in the focused genre row
    pub column: usize,
    pub loading: LoadingState,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            shows: Vec::new(),
            languages: LanguageSet::default(),
            categories: CategoryIndex::default(),
            selected_language: ALL_LANGUAGES.to_string(),
            filtered: Vec::new(),
            rotation: FeatureRotation::default(),
            focus: HomeFocus::default(),
            language_cursor: 0,
            column: 0,
            loading: LoadingState::Idle,
        }
    }
}

impl HomeState {
    /// Replace the source list and rebuild everything derived from it
    pub fn set_shows(&mut self, shows: Vec<Show>) {
        self.shows = shows.into_iter().map(Arc::new).collect();
        self.languages = catalog::extract_languages(&self.shows);
        self.categories = catalog::group_by_genre(&self.shows);

        if !self.languages.contains(&self.selected_language) {
            self.selected_language = ALL_LANGUAGES.to_string();
        }
        self.language_cursor = self
            .languages
            .position(&self.selected_language)
            .unwrap_or(0);
        self.refilter();

        if let HomeFocus::Genre(row) = self.focus {
            if row >= self.categories.len() {
                self.focus = HomeFocus::Featured;
            }
        }
        self.clamp_column();
        self.loading = LoadingState::Idle;
    }

    /// Apply a language filter; unknown languages are ignored
    pub fn select_language(&mut self, language: &str) {
        if !self.languages.contains(language) {
            return;
        }
        self.selected_language = language.to_string();
        self.language_cursor = self.languages.position(language).unwrap_or(0);
        self.refilter();
        self.rotation.reset();
    }

    fn refilter(&mut self) {
        self.filtered = catalog::filter_by_language(&self.shows, &self.selected_language);
        self.rotation.clamp(self.featured().len());
    }

    /// The featured window of the filtered list
    pub fn featured(&self) -> &[Arc<Show>] {
        catalog::featured(&self.filtered)
    }

    /// Show currently emphasized by the rotation, if the index maps to one
    pub fn highlighted(&self) -> Option<&Arc<Show>> {
        self.featured().get(self.rotation.index())
    }

    /// Cards rendered for a genre row
    pub fn row(&self, row: usize) -> &[Arc<Show>] {
        self.categories
            .at(row)
            .map(|c| &c.shows[..c.shows.len().min(ROW_LENGTH)])
            .unwrap_or(&[])
    }

    /// Show the Enter key would open
    pub fn focused_show(&self) -> Option<Arc<Show>> {
        match self.focus {
            HomeFocus::Languages => None,
            HomeFocus::Featured => self.highlighted().cloned(),
            HomeFocus::Genre(row) => self.row(row).get(self.column).cloned(),
        }
    }

    pub fn focus_up(&mut self) {
        self.focus = match self.focus {
            HomeFocus::Languages | HomeFocus::Featured => HomeFocus::Languages,
            HomeFocus::Genre(0) => HomeFocus::Featured,
            HomeFocus::Genre(row) => HomeFocus::Genre(row - 1),
        };
        self.clamp_column();
    }

    pub fn focus_down(&mut self) {
        self.focus = match self.focus {
            HomeFocus::Languages => HomeFocus::Featured,
            HomeFocus::Featured if !self.categories.is_empty() => HomeFocus::Genre(0),
            HomeFocus::Genre(row) if row + 1 < self.categories.len() => HomeFocus::Genre(row + 1),
            other => other,
        };
        self.clamp_column();
    }

    pub fn left(&mut self) {
        match self.focus {
            HomeFocus::Languages => {
                self.language_cursor = self.language_cursor.saturating_sub(1);
            }
            HomeFocus::Genre(_) => {
                self.column = self.column.saturating_sub(1);
            }
            HomeFocus::Featured => {}
        }
    }

    pub fn right(&mut self) {
        match self.focus {
            HomeFocus::Languages => {
                if self.language_cursor + 1 < self.languages.len() {
                    self.language_cursor += 1;
                }
            }
            HomeFocus::Genre(row) => {
                if self.column + 1 < self.row(row).len() {
                    self.column += 1;
                }
            }
            HomeFocus::Featured => {}
        }
    }

    /// Apply the chip under the cursor as the language filter
    pub fn select_language_at_cursor(&mut self) {
        if let Some(language) = self.languages.get(self.language_cursor).map(str::to_string) {
            self.select_language(&language);
        }
    }

    fn clamp_column(&mut self) {
        let len = match self.focus {
            HomeFocus::Genre(row) => self.row(row).len(),
            _ => 0,
        };
        if self.column >= len {
            self.column = len.saturating_sub(1);
        }
    }
}

// =============================================================================
// Search
// =============================================================================

/// Where the search screen is in the type → suggest → commit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestPhase {
    /// Query too short for suggestions
    #[default]
    Idle,
    /// Suggestions follow the query as it is typed
    Suggesting,
    /// A search was submitted; results reflect it
    Committed,
}

/// Search view state
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Search query
    pub query: String,
    /// Cursor position in query, in characters
    pub cursor: usize,
    pub suggestions: Vec<Arc<Show>>,
    /// Highlighted suggestion while typing
    pub suggestion_cursor: Option<usize>,
    pub results: Vec<Arc<Show>>,
    /// Results list state
    pub list: ListState,
    pub phase: SuggestPhase,
    pub loading: LoadingState,
    pub debounce: Debounce<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::with_debounce(DEFAULT_DEBOUNCE)
    }
}

impl SearchState {
    pub fn with_debounce(delay: Duration) -> Self {
        Self {
            query: String::new(),
            cursor: 0,
            suggestions: Vec::new(),
            suggestion_cursor: None,
            results: Vec::new(),
            list: ListState::default(),
            phase: SuggestPhase::Idle,
            loading: LoadingState::Idle,
            debounce: Debounce::new(delay),
        }
    }

    /// Query length in characters
    pub fn query_len(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.query
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.query.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.query.remove(at);
        true
    }

    /// Delete character at cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.query_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.query.remove(at);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.query_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.query_len();
    }

    /// Replace the whole query, cursor at the end
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.cursor_end();
    }

    /// Query split at the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.query.split_at(self.byte_index(self.cursor))
    }

    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestion_cursor = None;
    }

    pub fn suggestion_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.suggestion_cursor = Some(match self.suggestion_cursor {
            None => 0,
            Some(i) => (i + 1).min(self.suggestions.len() - 1),
        });
    }

    pub fn suggestion_up(&mut self) {
        self.suggestion_cursor = match self.suggestion_cursor {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Set results and update list state
    pub fn set_results(&mut self, results: Vec<Show>) {
        self.results = results.into_iter().map(Arc::new).collect();
        self.list = ListState::new(self.results.len());
        self.loading = LoadingState::Idle;
    }

    /// Get currently selected result
    pub fn selected_result(&self) -> Option<&Arc<Show>> {
        self.results.get(self.list.selected)
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current top-level screen
    pub screen: Screen,
    /// Active tab on the main screen
    pub section: Section,
    /// Route stacks; index 0 is always `Route::Root`
    pub home_routes: Vec<Route>,
    pub search_routes: Vec<Route>,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,

    pub home: HomeState,
    pub search: SearchState,
    /// Scroll offset of the details text
    pub detail_scroll: u16,

    splash: OneShot,
    tokens: RequestTokens,
    outbox: Vec<CatalogRequest>,
    now: Instant,
}

impl App {
    /// Create an app showing the splash screen as of `now`
    pub fn new(now: Instant) -> Self {
        Self::with_debounce(now, DEFAULT_DEBOUNCE)
    }

    /// Create an app with a custom suggestion debounce
    pub fn with_debounce(now: Instant, debounce: Duration) -> Self {
        Self {
            screen: Screen::Splash,
            section: Section::Home,
            home_routes: vec![Route::Root],
            search_routes: vec![Route::Root],
            running: true,
            input_mode: InputMode::Normal,
            home: HomeState::default(),
            search: SearchState::with_debounce(debounce),
            detail_scroll: 0,
            splash: OneShot::start(now, SPLASH_DELAY),
            tokens: RequestTokens::default(),
            outbox: Vec::new(),
            now,
        }
    }

    // -------------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------------

    /// Take every request queued since the last drain
    pub fn drain_requests(&mut self) -> Vec<CatalogRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Requests queued but not yet drained
    pub fn pending_requests(&self) -> &[CatalogRequest] {
        &self.outbox
    }

    /// Queue a bulk fetch for the home feed
    pub fn request_feed(&mut self) {
        let token = self.tokens.issue(Field::Feed);
        self.home.loading = LoadingState::Loading(Some("Loading catalog...".into()));
        self.outbox.push(CatalogRequest::Feed { token });
    }

    /// Apply a finished request; superseded responses are dropped
    pub fn apply(&mut self, event: CatalogEvent) {
        if !self.tokens.is_current(event.field, event.token) {
            debug!(
                field = ?event.field,
                token = event.token,
                latest = self.tokens.latest(event.field),
                "dropping superseded catalog response"
            );
            return;
        }

        match (event.field, event.result) {
            (Field::Feed, Ok(shows)) => {
                info!(count = shows.len(), "home feed loaded");
                self.home.set_shows(shows);
            }
            (Field::Feed, Err(e)) => {
                warn!(error = %e, "home feed fetch failed, keeping previous list");
                self.home.loading = LoadingState::Idle;
            }
            (Field::Suggestions, Ok(shows)) => {
                if self.search.phase == SuggestPhase::Suggesting {
                    self.search.suggestions = shows.into_iter().map(Arc::new).collect();
                    self.search.suggestion_cursor = None;
                }
            }
            (Field::Suggestions, Err(e)) => {
                warn!(error = %e, "suggestion fetch failed");
                self.search.clear_suggestions();
            }
            (Field::Results, Ok(shows)) => {
                debug!(count = shows.len(), "search results loaded");
                self.search.set_results(shows);
            }
            (Field::Results, Err(e)) => {
                warn!(error = %e, "search failed, keeping previous results");
                self.search.clear_suggestions();
                self.search.loading = LoadingState::Idle;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Time
    // -------------------------------------------------------------------------

    /// Advance splash, rotation and debounce timers to `now`
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        if self.screen == Screen::Splash {
            if self.splash.poll(now) {
                self.enter_main();
            }
            return;
        }

        let window = self.home.featured().len();
        self.home.rotation.tick(now, window);

        if let Some(term) = self.search.debounce.poll(now) {
            if self.search.phase == SuggestPhase::Suggesting {
                let token = self.tokens.issue(Field::Suggestions);
                self.outbox.push(CatalogRequest::Suggest { term, token });
            }
        }
    }

    /// Replace the splash with the main screen
    pub fn enter_main(&mut self) {
        if self.screen == Screen::Main {
            return;
        }
        info!("entering main screen");
        self.splash.cancel();
        self.screen = Screen::Main;
        self.section = Section::Home;
        self.request_feed();
        self.sync_timers();
    }

    /// Rotation runs only while the home root is on screen
    fn sync_timers(&mut self) {
        let home_visible = self.screen == Screen::Main
            && self.section == Section::Home
            && matches!(self.home_routes.last(), Some(Route::Root));

        if home_visible {
            self.home.rotation.start(self.now);
        } else {
            self.home.rotation.stop();
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    fn routes(&self, section: Section) -> &Vec<Route> {
        match section {
            Section::Home => &self.home_routes,
            Section::Search => &self.search_routes,
        }
    }

    fn routes_mut(&mut self, section: Section) -> &mut Vec<Route> {
        match section {
            Section::Home => &mut self.home_routes,
            Section::Search => &mut self.search_routes,
        }
    }

    /// Top of the active section's stack
    pub fn current_route(&self) -> &Route {
        const ROOT: &Route = &Route::Root;
        self.routes(self.section).last().unwrap_or(ROOT)
    }

    /// Show on screen when the active section is in details
    pub fn detail_show(&self) -> Option<&Arc<Show>> {
        match self.current_route() {
            Route::Details(show) => Some(show),
            Route::Root => None,
        }
    }

    /// Push details for `show` on the active section
    pub fn open_details(&mut self, show: Arc<Show>) {
        if self.screen != Screen::Main {
            return;
        }
        debug!(id = show.id, name = %show.name, "opening details");
        let section = self.section;
        self.routes_mut(section).push(Route::Details(show));
        self.detail_scroll = 0;
        self.input_mode = InputMode::Normal;
        self.sync_timers();
    }

    /// Switch tabs; each tab keeps its own stack
    pub fn switch_section(&mut self, section: Section) {
        if self.screen != Screen::Main {
            return;
        }
        self.section = section;
        self.input_mode = InputMode::Normal;
        self.detail_scroll = 0;
        self.sync_timers();
    }

    /// Go back one step, returns false when there is nowhere to go
    pub fn back(&mut self) -> bool {
        if self.input_mode == InputMode::Editing {
            self.input_mode = InputMode::Normal;
            self.search.suggestion_cursor = None;
            return true;
        }

        let section = self.section;
        let routes = self.routes_mut(section);
        if routes.len() > 1 {
            routes.pop();
            self.detail_scroll = 0;
            self.sync_timers();
            true
        } else {
            false
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Jump to the search tab with the input focused
    pub fn focus_search(&mut self) {
        if self.screen != Screen::Main {
            return;
        }
        if self.section != Section::Search {
            self.switch_section(Section::Search);
        }
        if matches!(self.current_route(), Route::Root) {
            self.input_mode = InputMode::Editing;
        }
    }

    // -------------------------------------------------------------------------
    // Search Flow
    // -------------------------------------------------------------------------

    /// React to an edit of the query text
    fn on_query_changed(&mut self) {
        if self.search.query_len() >= MIN_SUGGEST_LEN {
            let query = self.search.query.clone();
            self.search.debounce.schedule(query, self.now);
            self.search.phase = SuggestPhase::Suggesting;
        } else {
            self.search.debounce.cancel();
            if self.search.phase == SuggestPhase::Suggesting {
                self.tokens.invalidate(Field::Suggestions);
            }
            self.search.clear_suggestions();
            self.search.phase = SuggestPhase::Idle;
        }
    }

    /// Submit `term` as a search
    pub fn commit_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.search.set_query(term.clone());
        self.search.debounce.cancel();
        self.tokens.invalidate(Field::Suggestions);
        self.search.clear_suggestions();
        self.input_mode = InputMode::Normal;

        if term.trim().is_empty() {
            self.search.phase = SuggestPhase::Idle;
            return;
        }

        info!(%term, "search committed");
        let token = self.tokens.issue(Field::Results);
        self.search.phase = SuggestPhase::Committed;
        self.search.loading = LoadingState::Loading(Some("Searching...".into()));
        self.outbox.push(CatalogRequest::Search { term, token });
    }

    /// Adopt a suggestion's name as the query and commit it
    pub fn select_suggestion(&mut self, index: usize) {
        if let Some(name) = self.search.suggestions.get(index).map(|s| s.name.clone()) {
            self.commit_search(name);
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key at the current time
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.handle_key_at(key, Instant::now())
    }

    /// Handle a key as of `now`, returns true if the event was consumed
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.now = now;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if self.screen == Screen::Splash {
            if key.code == KeyCode::Char('q') {
                self.quit();
                return true;
            }
            return false;
        }

        if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            self.switch_section(self.section.toggle());
            return true;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Enter => {
                match self.search.suggestion_cursor {
                    Some(i) => self.select_suggestion(i),
                    None => self.commit_search(self.search.query.clone()),
                }
                true
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                self.on_query_changed();
                true
            }
            KeyCode::Backspace => {
                if self.search.backspace() {
                    self.on_query_changed();
                }
                true
            }
            KeyCode::Delete => {
                if self.search.delete() {
                    self.on_query_changed();
                }
                true
            }
            KeyCode::Down => {
                self.search.suggestion_down();
                true
            }
            KeyCode::Up => {
                self.search.suggestion_up();
                true
            }
            KeyCode::Left => {
                self.search.cursor_left();
                true
            }
            KeyCode::Right => {
                self.search.cursor_right();
                true
            }
            KeyCode::Home => {
                self.search.cursor_home();
                true
            }
            KeyCode::End => {
                self.search.cursor_end();
                true
            }
            _ => false,
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            KeyCode::Char('/') => {
                self.focus_search();
                return true;
            }
            KeyCode::Char('1') => {
                self.switch_section(Section::Home);
                return true;
            }
            KeyCode::Char('2') => {
                self.switch_section(Section::Search);
                return true;
            }
            KeyCode::Char('r') => {
                self.request_feed();
                return true;
            }
            KeyCode::Esc => {
                return self.back();
            }
            _ => {}
        }

        if self.detail_show().is_some() {
            return self.handle_detail_key(key);
        }

        match self.section {
            Section::Home => self.handle_home_key(key),
            Section::Search => self.handle_search_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.home.focus_up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.home.focus_down();
                true
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.home.left();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.home.right();
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.home.focus == HomeFocus::Languages {
                    self.home.select_language_at_cursor();
                } else if let Some(show) = self.home.focused_show() {
                    self.open_details(show);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.search.list.up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.search.list.down();
                true
            }
            KeyCode::PageUp => {
                self.search.list.page_up(10);
                true
            }
            KeyCode::PageDown => {
                self.search.list.page_down(10);
                true
            }
            KeyCode::Home => {
                self.search.list.first();
                true
            }
            KeyCode::End => {
                self.search.list.last();
                true
            }
            KeyCode::Enter => {
                if let Some(show) = self.search.selected_result().cloned() {
                    self.open_details(show);
                }
                true
            }
            KeyCode::Char('i') | KeyCode::Char('s') => {
                self.input_mode = InputMode::Editing;
                true
            }
            _ => false,
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
                true
            }
            KeyCode::PageUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(10);
                true
            }
            KeyCode::PageDown => {
                self.detail_scroll = self.detail_scroll.saturating_add(10);
                true
            }
            KeyCode::Backspace => self.back(),
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
