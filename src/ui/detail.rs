//! Detail view for a single show
//!
//! Everything shown here comes from the record carried by the route; the
//! view never fetches.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Show;
use crate::ui::Theme;

/// Render the info panel (title, rating, summary, etc.)
pub fn render(frame: &mut Frame, area: Rect, show: &Show, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(" DETAILS ", Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    // Hero image URL stands in for the banner
    lines.push(Line::from(Span::styled(show.hero_url().to_string(), Theme::dimmed())));
    lines.push(Line::from(""));

    let year_str = show.year().map(|y| format!(" ({})", y)).unwrap_or_default();
    lines.push(Line::from(vec![
        Span::styled("▶ ", Theme::title()),
        Span::styled(show.name.clone(), Theme::show_title()),
        Span::styled(year_str, Theme::year()),
    ]));

    let mut meta_spans = vec![Span::styled(format!("★ {}", show.rating_label()), Theme::rating())];
    if let Some(runtime) = show.runtime_label() {
        meta_spans.push(Span::styled(" │ ", Theme::dimmed()));
        meta_spans.push(Span::styled(runtime, Theme::year()));
    }
    if let Some(status) = &show.status {
        meta_spans.push(Span::styled(" │ ", Theme::dimmed()));
        meta_spans.push(Span::styled(status.clone(), Theme::year()));
    }
    meta_spans.push(Span::styled(" │ ", Theme::dimmed()));
    meta_spans.push(Span::styled(show.language_key().to_string(), Theme::year()));
    lines.push(Line::from(meta_spans));

    if !show.genres.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Genre: ", Theme::dimmed()),
            Span::styled(show.genres.join(", "), Theme::text()),
        ]));
    }

    // Separator
    lines.push(Line::from(Span::styled(
        "─".repeat(inner.width as usize),
        Theme::dimmed(),
    )));

    let summary = show.plain_summary();
    if summary.is_empty() {
        lines.push(Line::from(Span::styled("No summary available.", Theme::dimmed())));
    } else {
        lines.push(Line::from(Span::styled("SUMMARY", Theme::title())));
        lines.push(Line::from(""));
        for line in summary.lines() {
            lines.push(Line::from(Span::styled(line.to_string(), Theme::text())));
        }
    }

    if let Some(url) = &show.url {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("More: ", Theme::dimmed()),
            Span::styled(url.clone(), Theme::muted()),
        ]));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, inner);
}
