//! Main layout rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tresor_core::presentation::TITLE;

use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// Render the main layout
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Title bar + content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // Modal on top
    components::modal::render(app, frame);
}

/// Render the title bar with the logged-in email
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let user = app
        .secrets
        .identity
        .email()
        .map_or_else(|| "not logged in".to_string(), str::to_string);

    let title = Line::from(vec![
        Span::raw(concat!(" Tresor v", env!("CARGO_PKG_VERSION"))),
        Span::raw("  │  "),
        Span::raw(user),
    ]);
    let paragraph = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {TITLE} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::secrets::render(app, frame, inner_area);
}
