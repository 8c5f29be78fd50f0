//! Help overlay showing keybindings

use crate::app::state::AppState;
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {} Keybinds ", theme.icons.help))
        .title_style(Style::default().fg(theme.palette.accent))
        .style(Style::default().bg(theme.palette.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Search box", &theme),
        keybind("Enter", "Search lyrics + videos", &theme),
        keybind("Backspace", "Delete character", &theme),
        keybind("Ctrl+u", "Clear input", &theme),
        keybind("Tab / Down", "Focus results", &theme),
        keybind("Esc", "Quit", &theme),
        Line::default(),
        section_header("Results", &theme),
        keybind("j / Down", "Move down", &theme),
        keybind("k / Up", "Move up", &theme),
        keybind("g / G", "Top / bottom", &theme),
        keybind("Tab", "Switch list", &theme),
        keybind("Enter", "Preview clip", &theme),
        keybind("/ or i", "Back to search box", &theme),
        keybind("Ctrl+r", "Search again", &theme),
    ];

    let right_content = vec![
        section_header("Clip preview", &theme),
        keybind("j / k", "Scroll lyrics", &theme),
        keybind("Esc / b", "Back to results", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("Ctrl+t / D", "Toggle dark mode", &theme),
        keybind("? / F1", "Toggle this help", &theme),
        keybind("q", "Quit", &theme),
    ];

    frame.render_widget(Paragraph::new(left_content).wrap(Wrap { trim: false }), cols[0]);
    frame.render_widget(Paragraph::new(right_content).wrap(Wrap { trim: false }), cols[1]);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
