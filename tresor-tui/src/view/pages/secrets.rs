//! Secret list page view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use tresor_core::presentation::{ENCRYPTION_PASSWORD_LABEL, LOADING_TEXT};
use tresor_core::{CardMode, DraftField, EditDraft, SecretCard, SecretsView};
use unicode_width::UnicodeWidthChar;

use crate::model::{App, EditFocus};
use crate::view::theme::{colors, Styles};

const CURSOR: &str = "▏";
const MASK: char = '•';

/// Render the secret list page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let view = app.secrets.view();

    let header = header_lines(&view);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::try_from(header.len()).unwrap_or(u16::MAX)),
            Constraint::Min(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(header), chunks[0]);

    if let Some(text) = view.empty_text {
        render_empty(frame, chunks[1], text);
    } else {
        render_cards(app, &view, frame, chunks[1]);
    }
}

/// Error and loading lines
fn header_lines(view: &SecretsView) -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = Vec::new();
    if let Some(error) = &view.error {
        lines.push(Line::styled(format!(" {error}"), Style::default().fg(c.error)));
    }
    if view.loading {
        lines.push(Line::styled(
            format!(" {LOADING_TEXT}"),
            Style::default().fg(c.warning),
        ));
    }
    lines
}

fn render_empty(frame: &mut Frame, area: Rect, text: &str) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {text}"), Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled("  Alt+r: Reload", Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_cards(app: &App, view: &SecretsView, frame: &mut Frame, area: Rect) {
    let width = usize::from(area.width);
    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| ListItem::new(card_text(card, app.secrets.edit_focus, width)))
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.secrets.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn card_text(card: &SecretCard, focus: EditFocus, width: usize) -> Text<'static> {
    let c = colors();
    let mut title = vec![
        Span::styled(
            format!(" Secret ID: {}", card.id),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   User ID: {}", card.user_id),
            Style::default().fg(c.muted),
        ),
    ];
    if card.busy {
        title.push(Span::styled("   working…", Style::default().fg(c.warning)));
    }
    let mut lines = vec![Line::from(title)];

    match &card.mode {
        CardMode::View { fields } => {
            for field in fields {
                lines.push(labeled(field.label, &field.value, width, false));
            }
        }
        CardMode::Edit {
            draft,
            ask_encryption_password,
            encryption_password,
        } => {
            lines.extend(edit_lines(
                draft,
                *ask_encryption_password,
                encryption_password,
                focus,
                width,
            ));
            lines.push(edit_actions(card));
        }
    }

    lines.push(Line::from(""));
    Text::from(lines)
}

fn edit_lines(
    draft: &EditDraft,
    ask_encryption_password: bool,
    encryption_password: &str,
    focus: EditFocus,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = DraftField::ALL
        .into_iter()
        .map(|field| {
            labeled(
                field.label(),
                draft.get(field),
                width,
                focus == EditFocus::Field(field),
            )
        })
        .collect();

    if ask_encryption_password {
        let masked: String = encryption_password.chars().map(|_| MASK).collect();
        lines.push(labeled(
            ENCRYPTION_PASSWORD_LABEL,
            &masked,
            width,
            focus == EditFocus::EncryptionPassword,
        ));
    }
    lines
}

/// Save/cancel hint; disabled actions are greyed out
fn edit_actions(card: &SecretCard) -> Line<'static> {
    let c = colors();
    let style = |enabled: bool| {
        if enabled {
            Styles::hint_key()
        } else {
            Style::default().fg(c.muted)
        }
    };
    Line::from(vec![
        Span::raw("   "),
        Span::styled("[Enter] Save", style(card.save_enabled)),
        Span::raw("  "),
        Span::styled("[Esc] Cancel", style(card.actions_enabled)),
        Span::raw("  "),
        Span::styled("[Alt+d] Delete", style(card.actions_enabled)),
    ])
}

fn labeled(label: &str, value: &str, width: usize, focused: bool) -> Line<'static> {
    let c = colors();
    let marker = if focused { " ▸ " } else { "   " };
    let prefix = format!("{marker}{label}: ");
    let room = width.saturating_sub(prefix.chars().count() + 1);

    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(c.highlight)),
        Span::styled(format!("{label}: "), Styles::label()),
        Span::styled(truncate_to_width(value, room), Style::default().fg(c.fg)),
    ];
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(c.highlight)));
    }
    Line::from(spans)
}

/// Cut `s` to at most `max` terminal columns, marking the cut with `…`
fn truncate_to_width(s: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max {
            out.pop();
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}
