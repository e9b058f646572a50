//! Home feed: language chips, rotating featured banner and genre rows

use std::sync::Arc;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{HomeFocus, HomeState};
use crate::catalog::ROW_LENGTH;
use crate::models::Show;
use crate::ui::Theme;

/// Height of one genre row including its border
const ROW_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, home: &HomeState) {
    if home.shows.is_empty() {
        render_empty(frame, area, home);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Language chips
            Constraint::Length(9), // Featured
            Constraint::Min(0),    // Genre rows
        ])
        .split(area);

    render_languages(frame, chunks[0], home);
    render_featured(frame, chunks[1], home);
    render_rows(frame, chunks[2], home);
}

fn render_empty(frame: &mut Frame, area: Rect, home: &HomeState) {
    let message = if home.loading.is_loading() {
        Line::from(Span::styled("⟳ Loading catalog...", Theme::loading()))
    } else {
        Line::from(vec![
            Span::styled("No shows to browse. Press ", Theme::dimmed()),
            Span::styled("r", Theme::keybind()),
            Span::styled(" to retry.", Theme::dimmed()),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    let empty = Paragraph::new(vec![Line::from(""), message])
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(empty, area);
}

fn focus_border(focused: bool) -> ratatui::style::Style {
    if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    }
}

fn render_languages(frame: &mut Frame, area: Rect, home: &HomeState) {
    let focused = home.focus == HomeFocus::Languages;
    let mut spans = Vec::new();

    for (i, language) in home.languages.as_slice().iter().enumerate() {
        let style = if *language == home.selected_language {
            Theme::chip_active()
        } else if focused && i == home.language_cursor {
            Theme::list_item_selected()
        } else {
            Theme::chip()
        };
        spans.push(Span::styled(format!(" {} ", language), style));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_border(focused))
        .title(Span::styled(" LANGUAGE ", Theme::title()))
        .title_top(Line::from(Span::styled(" / search ", Theme::dimmed())).right_aligned());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_featured(frame: &mut Frame, area: Rect, home: &HomeState) {
    let focused = home.focus == HomeFocus::Featured;
    let featured = home.featured();

    // One dot per featured slot, filled at the rotation index
    let dots: String = (0..featured.len())
        .map(|i| if i == home.rotation.index() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_border(focused))
        .title(Span::styled(" FEATURED ", Theme::title()))
        .title_top(Line::from(Span::styled(format!(" {} ", dots), Theme::muted())).right_aligned());

    let Some(show) = home.highlighted() else {
        let empty = Paragraph::new(format!("No {} shows", home.selected_language))
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let marker = if focused { "▸ " } else { "  " };
    let mut meta = vec![Span::styled(format!("★ {}", show.rating_label()), Theme::rating())];
    let meta_line = show.meta_line();
    if !meta_line.is_empty() {
        meta.push(Span::styled("  ", Theme::dimmed()));
        meta.push(Span::styled(meta_line, Theme::year()));
    }
    meta.push(Span::styled(format!("  {}", show.language_key()), Theme::dimmed()));

    let lines = vec![
        Line::from(vec![
            Span::styled(marker, Theme::title()),
            Span::styled(show.name.clone(), Theme::show_title()),
        ]),
        Line::from(meta),
        Line::from(Span::styled(show.genres.join(" • "), Theme::genre())),
        Line::from(Span::styled(show.plain_summary(), Theme::muted())),
        Line::from(Span::styled(show.hero_url().to_string(), Theme::dimmed())),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_rows(frame: &mut Frame, area: Rect, home: &HomeState) {
    if home.categories.is_empty() || area.height < ROW_HEIGHT {
        return;
    }

    let visible = (area.height / ROW_HEIGHT) as usize;
    let focused_row = match home.focus {
        HomeFocus::Genre(row) => Some(row),
        _ => None,
    };
    // Scroll so the focused row stays on screen
    let first = focused_row
        .map(|row| (row + 1).saturating_sub(visible))
        .unwrap_or(0);

    let rows: Vec<usize> = (first..home.categories.len()).take(visible).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|_| Constraint::Length(ROW_HEIGHT)))
        .split(area);

    for (chunk, row) in chunks.iter().zip(rows) {
        let genre = home
            .categories
            .at(row)
            .map(|c| c.genre.as_str())
            .unwrap_or_default();
        let column = (focused_row == Some(row)).then_some(home.column);
        render_row(frame, *chunk, genre, home.row(row), column);
    }
}

/// One genre row with up to five cards; `column` marks the card under the cursor
fn render_row(frame: &mut Frame, area: Rect, genre: &str, shows: &[Arc<Show>], column: Option<usize>) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(focus_border(column.is_some()))
        .title(Span::styled(format!(" {} ", genre), Theme::show_title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..ROW_LENGTH).map(|_| Constraint::Ratio(1, ROW_LENGTH as u32)))
        .split(inner);

    for (i, (show, card)) in shows.iter().zip(cards.iter()).enumerate() {
        render_card(frame, *card, show, column == Some(i));
    }
}

fn render_card(frame: &mut Frame, area: Rect, show: &Show, selected: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_border(selected))
        .style(if selected {
            Theme::list_item_selected()
        } else {
            Theme::list_item()
        });

    let year = show.year().unwrap_or("");
    let lines = vec![
        Line::from(Span::styled(show.name.clone(), Theme::show_title())),
        Line::from(vec![
            Span::styled(format!("★ {}", show.rating_label()), Theme::rating()),
            Span::styled(format!(" {}", year), Theme::year()),
        ]),
        Line::from(Span::styled(show.thumbnail_url().to_string(), Theme::dimmed())),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
