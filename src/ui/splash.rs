//! Splash screen shown for a few seconds at startup

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::Theme;

const LOGO: [&str; 5] = [
    "███████╗██╗     ██╗██╗  ██╗",
    "██╔════╝██║     ██║╚██╗██╔╝",
    "█████╗  ██║     ██║ ╚███╔╝ ",
    "██╔══╝  ██║     ██║ ██╔██╗ ",
    "██║     ███████╗██║██╔╝ ██╗",
];

/// Render the centered logo
pub fn render(frame: &mut Frame, area: Rect) {
    let height = LOGO.len() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, Theme::title())))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("T U I", Theme::show_title())));
    lines.push(Line::from(Span::styled("TV shows, from your terminal", Theme::dimmed())));

    let logo = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(logo, chunks[1]);
}
