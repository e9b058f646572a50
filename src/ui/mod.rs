//! Terminal UI components
//!
//! Built with ratatui in a dark, red-accented streaming style.
//! Keyboard-first navigation throughout.

pub mod detail;
pub mod home;
pub mod search;
pub mod splash;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::app::{App, InputMode, Route, Screen, Section};

/// Main render function - dispatches to screen-specific renderers
pub fn render_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Clear with background color
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    if app.screen == Screen::Splash {
        splash::render(frame, area);
        return;
    }

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);
}

/// Logo and section tabs
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" FLIX", Theme::title()),
        Span::styled("TUI  ", Theme::show_title()),
    ];

    for (n, section) in [Section::Home, Section::Search].into_iter().enumerate() {
        let label = format!(" {} {} ", n + 1, section.label());
        let style = if section == app.section {
            Theme::highlighted()
        } else {
            Theme::muted()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Theme::BACKGROUND));
    frame.render_widget(header, area);
}

/// Render the active section's top route
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    match app.current_route() {
        Route::Details(show) => detail::render(frame, area, show, app.detail_scroll),
        Route::Root => match app.section {
            Section::Home => home::render(frame, area, &app.home),
            Section::Search => search::render(frame, area, &app.search, &app.input_mode),
        },
    }
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", Theme::chip()),
        InputMode::Editing => Span::styled(" INSERT ", Theme::highlighted()),
    };

    let location = match app.current_route() {
        Route::Root => app.section.label().to_uppercase(),
        Route::Details(_) => format!("{} › DETAILS", app.section.label().to_uppercase()),
    };

    let loading = match app.section {
        Section::Home => &app.home.loading,
        Section::Search => &app.search.loading,
    };
    let loading_indicator = match loading.message() {
        Some(msg) => Span::styled(format!(" ⟳ {} ", msg), Theme::loading()),
        None => Span::raw(""),
    };

    let help = match (&app.input_mode, app.current_route()) {
        (InputMode::Editing, _) => " ↑↓:suggestions  Enter:search  Esc:done ",
        (_, Route::Details(_)) => " ↑↓:scroll  Esc:back  q:quit ",
        _ => " Tab:section  /:search  Enter:open  r:refresh  q:quit ",
    };

    let status_line = Line::from(vec![
        mode_indicator,
        Span::styled(format!(" {} ", location), Theme::dimmed()),
        loading_indicator,
        Span::raw("│"),
        Span::styled(help, Theme::keybind_desc()),
    ]);

    let status = Paragraph::new(status_line).style(Theme::status_bar());
    frame.render_widget(status, area);
}
