//! Modal components

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tresor_core::services::DELETE_CONFIRM_PROMPT;
use tresor_core::SecretId;

use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// Render the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    match app.modal.active {
        Some(Modal::ConfirmDelete { id, focus }) => render_confirm_delete(frame, id, focus),
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// Centered area of the given size
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Area inside the border with a horizontal margin
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn render_confirm_delete(frame: &mut Frame, id: SecretId, focus: usize) {
    let area = centered_rect(40, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {DELETE_CONFIRM_PROMPT}"),
            Style::default().fg(Color::White),
        ),
        Line::styled(format!("  Secret ID: {id}"), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Delete ", confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner(area));
}

fn render_help(frame: &mut Frame) {
    const BINDINGS: [(&str, &str); 11] = [
        ("↑/↓", "Select secret"),
        ("Alt+e", "Edit selected secret"),
        ("Tab", "Next field"),
        ("Shift+Tab", "Previous field"),
        ("Enter", "Save"),
        ("Esc", "Cancel editing"),
        ("Alt+d", "Delete secret"),
        ("Alt+r", "Reload"),
        ("Alt+h", "This help"),
        ("Alt+q", "Quit"),
        ("Ctrl+c", "Quit"),
    ];

    let height = u16::try_from(BINDINGS.len()).unwrap_or(u16::MAX) + 4;
    let area = centered_rect(44, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:<11}"), Styles::hint_key()),
                Span::styled(*desc, Styles::hint_desc()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc or Enter to close",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner(area));
}
