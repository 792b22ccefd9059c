//! Bottom status bar component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// Render the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // Status message on the right
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current input mode
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => {
            vec![("←→", "Switch"), ("Enter", "Confirm"), ("Esc", "Cancel")]
        }
        Some(Modal::Help) => vec![("Esc", "Close")],
        None if app.secrets.is_editing() => vec![
            ("Tab", "Next Field"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
            ("Alt+d", "Delete"),
        ],
        None => vec![
            ("↑↓", "Select"),
            ("Alt+e", "Edit"),
            ("Alt+d", "Delete"),
            ("Alt+r", "Reload"),
            ("Alt+h", "Help"),
            ("Alt+q", "Quit"),
        ],
    }
}
