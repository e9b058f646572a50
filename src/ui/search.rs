//! Search view: query box, suggestion dropdown and results list

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{InputMode, SearchState, SuggestPhase};
use crate::models::Show;
use crate::ui::Theme;

/// Most suggestions shown at once
const MAX_SUGGESTIONS: usize = 8;

pub fn render(frame: &mut Frame, area: Rect, search: &SearchState, mode: &InputMode) {
    let editing = *mode == InputMode::Editing;
    let shown = search.suggestions.len().min(MAX_SUGGESTIONS);
    let dropdown = if shown > 0 { shown as u16 + 2 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Query box
            Constraint::Length(dropdown), // Suggestions
            Constraint::Min(1),           // Results
        ])
        .split(area);

    render_input(frame, chunks[0], search, editing);
    if shown > 0 {
        render_suggestions(frame, chunks[1], search, shown);
    }
    render_results(frame, chunks[2], search, !editing);
}

fn render_input(frame: &mut Frame, area: Rect, search: &SearchState, editing: bool) {
    let border_style = if editing {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let line = if editing {
        let (before, after) = search.split_at_cursor();
        Line::from(vec![
            Span::styled("⌕ ", Theme::dimmed()),
            Span::styled(before.to_string(), Theme::input()),
            Span::styled("│", Theme::title()),
            Span::styled(after.to_string(), Theme::input()),
        ])
    } else if search.query.is_empty() {
        Line::from(Span::styled("⌕ Press / to search shows...", Theme::dimmed()))
    } else {
        Line::from(vec![
            Span::styled("⌕ ", Theme::dimmed()),
            Span::styled(search.query.clone(), Theme::input()),
        ])
    };

    let input = Paragraph::new(line).style(Theme::input()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(" SEARCH ", Theme::title())),
    );
    frame.render_widget(input, area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, search: &SearchState, shown: usize) {
    let items: Vec<ListItem> = search
        .suggestions
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, show)| {
            let is_selected = search.suggestion_cursor == Some(i);
            let marker = if is_selected { "▸ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Theme::title()),
                Span::styled(
                    show.name.clone(),
                    if is_selected {
                        Theme::list_item_selected()
                    } else {
                        Theme::list_item()
                    },
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
            .style(Theme::input()),
    );
    frame.render_widget(list, area);
}

fn render_results(frame: &mut Frame, area: Rect, search: &SearchState, focused: bool) {
    let title = if search.results.is_empty() {
        " RESULTS ".to_string()
    } else {
        format!(" RESULTS ({}) ", search.results.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(title, Theme::title()));

    if search.results.is_empty() {
        render_empty(frame, area, search, block);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    let selected = search.list.selected;
    let first = search.list.window_start(height);

    let items: Vec<ListItem> = search
        .results
        .iter()
        .enumerate()
        .skip(first)
        .take(height)
        .map(|(i, show)| render_item(show, focused && i == selected))
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn render_empty(frame: &mut Frame, area: Rect, search: &SearchState, block: Block) {
    let message = if search.loading.is_loading() {
        Span::styled("⟳ Searching...", Theme::loading())
    } else if search.phase == SuggestPhase::Committed {
        Span::styled(format!("No shows found for \"{}\"", search.query), Theme::dimmed())
    } else {
        Span::styled("Type at least two letters for suggestions, Enter to search", Theme::dimmed())
    };

    let empty = Paragraph::new(vec![Line::from(""), Line::from(message)])
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(empty, area);
}

/// One result: name, year · runtime, rating
fn render_item(show: &Show, is_selected: bool) -> ListItem<'static> {
    let marker = if is_selected { "▸ " } else { "  " };
    let name_style = if is_selected {
        Theme::list_item_selected()
    } else {
        Theme::list_item()
    };

    let mut spans = vec![
        Span::styled(marker, Theme::title()),
        Span::styled(show.name.clone(), name_style),
    ];

    let meta = show.meta_line();
    if !meta.is_empty() {
        spans.push(Span::styled(format!("  {}", meta), Theme::year()));
    }
    spans.push(Span::styled(format!("  ★ {}", show.rating_label()), Theme::rating()));
    if !show.genres.is_empty() {
        spans.push(Span::styled(format!("  {}", show.genres.join(", ")), Theme::genre()));
    }

    ListItem::new(Line::from(spans))
}
