//! Catalog aggregation
//!
//! Pure functions that derive the home feed's language chips, genre rows
//! and featured window from the fetched show list. Shows are shared through
//! `Arc` so a show tagged with several genres is never copied.

use std::collections::HashSet;
use std::sync::Arc;

use crate::models::Show;

/// Language filter value meaning "no filter"
pub const ALL_LANGUAGES: &str = "All";

/// Size of the featured window on the home screen
pub const FEATURED_WINDOW: usize = 5;

/// Number of shows rendered per genre row
pub const ROW_LENGTH: usize = 5;

// =============================================================================
// Language Set
// =============================================================================

/// Distinct languages in first-seen order, always starting with "All"
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSet(Vec<String>);

impl Default for LanguageSet {
    fn default() -> Self {
        Self(vec![ALL_LANGUAGES.to_string()])
    }
}

impl LanguageSet {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.0.iter().any(|l| l == language)
    }

    pub fn position(&self, language: &str) -> Option<usize> {
        self.0.iter().position(|l| l == language)
    }
}

/// Collect each show's language (absent counts as "undefined"), de-duplicated,
/// behind the "All" sentinel.
pub fn extract_languages(shows: &[Arc<Show>]) -> LanguageSet {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_LANGUAGES);

    let mut languages = vec![ALL_LANGUAGES.to_string()];
    for show in shows {
        let key = show.language_key();
        if seen.insert(key) {
            languages.push(key.to_string());
        }
    }
    LanguageSet(languages)
}

// =============================================================================
// Category Index
// =============================================================================

/// One genre bucket
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub genre: String,
    pub shows: Vec<Arc<Show>>,
}

/// Genre name to shows, in order of first encounter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    categories: Vec<Category>,
}

impl CategoryIndex {
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category by row position
    pub fn at(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Shows filed under `genre`
    pub fn get(&self, genre: &str) -> Option<&[Arc<Show>]> {
        self.categories
            .iter()
            .find(|c| c.genre == genre)
            .map(|c| c.shows.as_slice())
    }

    /// Genre names in row order
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.genre.as_str())
    }
}

/// File every show under each of its genres
pub fn group_by_genre(shows: &[Arc<Show>]) -> CategoryIndex {
    let mut categories: Vec<Category> = Vec::new();

    for show in shows {
        for genre in &show.genres {
            match categories.iter_mut().find(|c| &c.genre == genre) {
                Some(category) => category.shows.push(Arc::clone(show)),
                None => categories.push(Category {
                    genre: genre.clone(),
                    shows: vec![Arc::clone(show)],
                }),
            }
        }
    }

    CategoryIndex { categories }
}

// =============================================================================
// Filtering
// =============================================================================

/// Shows whose language equals `selected` exactly; "All" keeps everything
pub fn filter_by_language(shows: &[Arc<Show>], selected: &str) -> Vec<Arc<Show>> {
    if selected == ALL_LANGUAGES {
        return shows.to_vec();
    }
    shows
        .iter()
        .filter(|s| s.language_key() == selected)
        .cloned()
        .collect()
}

/// The featured window: the first five shows
pub fn featured(shows: &[Arc<Show>]) -> &[Arc<Show>] {
    &shows[..shows.len().min(FEATURED_WINDOW)]
}

/// Convert HTML summary markup to plain text
pub fn strip_markup(html: &str) -> String {
    nanohtml2text::html2text(html).trim().to_string()
}
