//! Data structures for flixtui
//!
//! Mirrors the subset of the TVMaze show record the UI consumes, plus the
//! display helpers that substitute fallbacks for missing fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for list thumbnails when a show has no image
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/150";

/// Placeholder for hero/featured images when a show has no image
pub const PLACEHOLDER_HERO: &str = "https://via.placeholder.com/400";

/// Language key used for shows without a language
pub const UNDEFINED_LANGUAGE: &str = "undefined";

// =============================================================================
// Show
// =============================================================================

/// Image URLs at two resolutions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShowImage {
    pub medium: Option<String>,
    pub original: Option<String>,
}

/// Rating block; `average` is null for unrated shows
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub average: Option<f64>,
}

/// A single catalog entry (series)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<ShowImage>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub premiered: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Show {
    /// Minimal show with only id and name set
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: None,
            genres: Vec::new(),
            language: None,
            rating: Rating::default(),
            summary: None,
            premiered: None,
            runtime: None,
            status: None,
            url: None,
        }
    }

    /// Language used for grouping and filtering; absent becomes "undefined"
    pub fn language_key(&self) -> &str {
        self.language.as_deref().unwrap_or(UNDEFINED_LANGUAGE)
    }

    /// Medium image, or the thumbnail placeholder
    pub fn thumbnail_url(&self) -> &str {
        self.image
            .as_ref()
            .and_then(|i| i.medium.as_deref())
            .unwrap_or(PLACEHOLDER_THUMBNAIL)
    }

    /// Original image, or the hero placeholder
    pub fn hero_url(&self) -> &str {
        self.image
            .as_ref()
            .and_then(|i| i.original.as_deref())
            .unwrap_or(PLACEHOLDER_HERO)
    }

    /// Average rating, or "N/A"
    pub fn rating_label(&self) -> String {
        match self.rating.average {
            Some(avg) => format!("{}", avg),
            None => "N/A".to_string(),
        }
    }

    /// Premiere year: the leading 4 characters of the premiere date, as
    /// given. Shorter dates are shown whole.
    pub fn year(&self) -> Option<&str> {
        self.premiered
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.char_indices().nth(4).map_or(d, |(end, _)| &d[..end]))
    }

    /// Runtime as "N min"
    pub fn runtime_label(&self) -> Option<String> {
        self.runtime.map(|r| format!("{} min", r))
    }

    /// Summary with markup removed; empty when the catalog has none
    pub fn plain_summary(&self) -> String {
        self.summary
            .as_deref()
            .map(crate::catalog::strip_markup)
            .unwrap_or_default()
    }

    /// "2004 · 60 min" style metadata line; omits whatever is missing
    pub fn meta_line(&self) -> String {
        let parts: Vec<String> = [self.year().map(str::to_string), self.runtime_label()]
            .into_iter()
            .flatten()
            .collect();
        parts.join(" · ")
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year() {
            Some(year) => write!(f, "{} ({})", self.name, year),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Search endpoint wrapper: relevance score plus the show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub score: f64,
    pub show: Show,
}

impl SearchHit {
    /// Drop the score, keeping only the show
    pub fn into_show(self) -> Show {
        self.show
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lost() -> Show {
        serde_json::from_str(
            r#"{
                "id": 123,
                "name": "Lost",
                "genres": ["Drama", "Adventure"],
                "language": "English",
                "rating": {"average": 8.2},
                "summary": "<p><b>Lost</b> follows survivors.</p>",
                "premiered": "2004-09-22",
                "runtime": 60,
                "image": {
                    "medium": "https://static.tvmaze.com/medium/lost.jpg",
                    "original": "https://static.tvmaze.com/original/lost.jpg"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_full_show() {
        let show = lost();
        assert_eq!(show.id, 123);
        assert_eq!(show.genres, vec!["Drama", "Adventure"]);
        assert_eq!(show.rating.average, Some(8.2));
        assert_eq!(show.runtime, Some(60));
    }

    #[test]
    fn test_deserialize_sparse_show() {
        let show: Show = serde_json::from_str(
            r#"{"id": 9, "name": "Bare", "image": null, "language": null,
                "rating": {"average": null}, "summary": null,
                "premiered": null, "runtime": null}"#,
        )
        .unwrap();
        assert!(show.image.is_none());
        assert!(show.genres.is_empty());
        assert_eq!(show.rating_label(), "N/A");
        assert_eq!(show.year(), None);
        assert_eq!(show.runtime_label(), None);
        assert_eq!(show.plain_summary(), "");
        assert_eq!(show.language_key(), UNDEFINED_LANGUAGE);
    }

    #[test]
    fn test_image_fallbacks() {
        let show = lost();
        assert!(show.thumbnail_url().contains("medium"));
        assert!(show.hero_url().contains("original"));

        let bare = Show::new(1, "Bare");
        assert_eq!(bare.thumbnail_url(), PLACEHOLDER_THUMBNAIL);
        assert_eq!(bare.hero_url(), PLACEHOLDER_HERO);
    }

    #[test]
    fn test_year_and_meta_line() {
        let show = lost();
        assert_eq!(show.year(), Some("2004"));
        assert_eq!(show.meta_line(), "2004 · 60 min");

        let mut partial = Show::new(2, "Partial");
        partial.runtime = Some(30);
        assert_eq!(partial.meta_line(), "30 min");

        partial.premiered = Some("19".into());
        assert_eq!(partial.year(), Some("19"));
        assert_eq!(partial.meta_line(), "19 · 30 min");

        partial.premiered = Some("TBA-2025".into());
        assert_eq!(partial.year(), Some("TBA-"));

        partial.premiered = Some(String::new());
        assert_eq!(partial.year(), None);
    }

    #[test]
    fn test_summary_markup_is_stripped() {
        let summary = lost().plain_summary();
        assert!(!summary.contains('<'));
        assert!(summary.contains("Lost"));
        assert!(summary.contains("follows survivors."));
    }

    #[test]
    fn test_display() {
        assert_eq!(lost().to_string(), "Lost (2004)");
        assert_eq!(Show::new(1, "Bare").to_string(), "Bare");
    }
}
