//! Netflix-style theme for flixtui
//!
//! Color palette and style helpers for the TUI: near-black background,
//! signature red for emphasis, white and greys for text.

use ratatui::style::{Color, Modifier, Style};

/// Dark red-on-black color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #141414 (Netflix black)
    pub const BACKGROUND: Color = Color::Rgb(0x14, 0x14, 0x14);

    /// Primary: #e50914 (Netflix red)
    pub const PRIMARY: Color = Color::Rgb(0xe5, 0x09, 0x14);

    /// Text: #e5e5e5 (off white)
    pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);

    /// Pure white for titles on red
    pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);

    /// Muted: #b3b3b3 (secondary text)
    pub const MUTED: Color = Color::Rgb(0xb3, 0xb3, 0xb3);

    /// Dim: #8c8c8c (hints, metadata)
    pub const DIM: Color = Color::Rgb(0x8c, 0x8c, 0x8c);

    /// Rating: #46d369 (match green)
    pub const RATING: Color = Color::Rgb(0x46, 0xd3, 0x69);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Slightly lighter background for cards and bars
    pub const SURFACE: Color = Color::Rgb(0x22, 0x22, 0x22);

    /// Card under the cursor
    pub const SURFACE_HOVER: Color = Color::Rgb(0x2f, 0x2f, 0x2f);

    /// Border color (grey)
    pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);

    /// Border color when focused
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Highlighted text (white on red)
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Secondary text
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Show name on a card or hero banner
    pub fn show_title() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // COMPONENT STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// Style for list items (normal state)
    pub fn list_item() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Style for list items (selected/highlighted)
    pub fn list_item_selected() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .bg(Self::SURFACE_HOVER)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive language chip
    pub fn chip() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::SURFACE)
    }

    /// Applied language filter
    pub fn chip_active() -> Style {
        Self::highlighted()
    }

    /// Style for input fields
    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::WHITE)
    }

    /// Keybinding description style
    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    /// Loading indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::MUTED)
            .add_modifier(Modifier::BOLD)
    }

    /// Rating badge
    pub fn rating() -> Style {
        Style::default()
            .fg(Self::RATING)
            .add_modifier(Modifier::BOLD)
    }

    /// Year/date metadata
    pub fn year() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Genre tags
    pub fn genre() -> Style {
        Style::default().fg(Self::DIM)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Calculate contrast ratio between two colors
/// Returns a value between 1 (same color) and 21 (black/white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Check if a foreground/background pair meets WCAG AA for normal text
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Check if a foreground/background pair meets WCAG AA for large text
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    #[test]
    fn test_brand_colors() {
        assert_eq!(rgb(Theme::PRIMARY), (0xe5, 0x09, 0x14));
        assert_eq!(rgb(Theme::BACKGROUND), (0x14, 0x14, 0x14));
        assert_eq!(rgb(Theme::WHITE), (0xff, 0xff, 0xff));
    }

    #[test]
    fn test_body_text_meets_aa() {
        let bg = rgb(Theme::BACKGROUND);
        for color in [Theme::TEXT, Theme::WHITE, Theme::MUTED, Theme::DIM, Theme::RATING] {
            let fg = rgb(color);
            assert!(
                meets_wcag_aa(fg, bg),
                "{:?} on background should meet WCAG AA (got {:.2}:1)",
                color,
                contrast_ratio(fg, bg)
            );
        }
    }

    #[test]
    fn test_text_on_surface_meets_aa() {
        let bg = rgb(Theme::SURFACE);
        assert!(meets_wcag_aa(rgb(Theme::TEXT), bg));
        assert!(meets_wcag_aa(rgb(Theme::MUTED), bg));
    }

    #[test]
    fn test_red_is_for_large_text_only() {
        let bg = rgb(Theme::BACKGROUND);
        let red = rgb(Theme::PRIMARY);
        assert!(meets_wcag_aa_large(red, bg));
        assert!(!meets_wcag_aa(red, bg));
    }

    #[test]
    fn test_white_on_red_highlight() {
        assert!(meets_wcag_aa(rgb(Theme::WHITE), rgb(Theme::PRIMARY)));
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.1);
    }

    #[test]
    fn test_contrast_ratio_same_color() {
        let ratio = contrast_ratio((100, 100, 100), (100, 100, 100));
        assert!((ratio - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_non_rgb_color() {
        assert_eq!(color_to_rgb(Color::Red), None);
    }
}
