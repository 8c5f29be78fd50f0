//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Screen, ToastKind};
use crate::tui::theme::get_theme;
use crate::tui::truncate_str;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{clip_preview, help, results};

/// Main layout structure:
/// ┌──────────────────────────────────────────────┐
/// │ Lyric-to-Clip                   Dark Mode ○  │
/// ├──────────────────────────────────────────────┤
/// │        Search (query + results lists)        │
/// │                     or                       │
/// │        Clip preview (selected lyric)         │
/// ├──────────────────────────────────────────────┤
/// │ status / toast                        ? help │
/// └──────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let theme = get_theme(state.dark_mode);
    let root = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.bg_primary)),
        root,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Body
            Constraint::Length(1), // Status line
        ])
        .split(root);

    render_header(frame, state, rows[0]);

    match state.screen {
        Screen::Search => results::render(frame, state, rows[1]),
        Screen::Preview => clip_preview::render(frame, state, rows[1]),
    }

    render_status(frame, state, rows[2]);

    if state.show_help {
        let area = centered_rect(70, 80, rows[1]);
        frame.render_widget(Clear, area);
        help::render(frame, state, area);
    }
}

fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", icons.music),
            Style::default().fg(theme.palette.accent),
        ),
        Span::styled(
            "Lyric-to-Clip",
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), cols[0]);

    let (icon, label) = if state.dark_mode {
        (icons.moon, "Dark Mode on ")
    } else {
        (icons.sun, "Dark Mode off")
    };
    let toggle = Line::from(vec![
        Span::styled(label, Style::default().fg(theme.palette.fg_secondary)),
        Span::raw(" "),
        Span::styled(icon, Style::default().fg(theme.palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(toggle).alignment(Alignment::Right), cols[1]);
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let icons = &theme.icons;
    let width = area.width as usize;
    let hint = " ? help  Ctrl+t theme ";

    let line = match &state.toast {
        Some(toast) if !toast.is_expired() => {
            let (prefix, color) = match toast.kind {
                ToastKind::Error => (icons.error, theme.palette.error),
            };
            Line::from(vec![
                Span::styled(format!(" {} ", prefix), Style::default().fg(color)),
                Span::styled(
                    truncate_str(&toast.message, width.saturating_sub(hint.len() + 4)),
                    Style::default().fg(color),
                ),
            ])
        }
        _ => Line::from(Span::styled(
            format!(" {}", truncate_str(&state.status, width.saturating_sub(hint.len() + 2))),
            Style::default().fg(theme.palette.fg_secondary),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(theme.palette.fg_secondary)))
            .alignment(Alignment::Right),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
