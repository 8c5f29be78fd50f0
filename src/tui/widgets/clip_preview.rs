//! Clip preview - the selected lyric snippet next to its video link

use crate::app::state::{AppState, Selection};
use crate::tui::theme::{get_theme, Theme};
use crate::tui::truncate_str;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let Some(sel) = &state.selection else {
        frame.render_widget(
            Paragraph::new("Nothing selected").style(Style::default().fg(theme.palette.fg_secondary)),
            area,
        );
        return;
    };

    let snippet_height = (sel.snippet.len().max(1) as u16).saturating_add(2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(snippet_height),
            Constraint::Min(3),
        ])
        .split(area);

    render_info(frame, &theme, sel, rows[0]);
    render_snippet(frame, &theme, sel, rows[1]);
    render_full_lyrics(frame, &theme, sel, rows[2]);
}

fn block<'a>(theme: &Theme, title: String) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent))
}

fn render_info(frame: &mut Frame, theme: &Theme, sel: &Selection, area: Rect) {
    let icons = &theme.icons;
    let b = block(theme, format!(" {} Clip Preview ", icons.video));
    let inner = b.inner(area);
    frame.render_widget(b, area);

    let width = inner.width.saturating_sub(4) as usize;
    let secondary = Style::default().fg(theme.palette.fg_secondary);

    let start = match sel.start_secs {
        Some(s) => format!("starts at {}:{:02}", s / 60, s % 60),
        None => "starts at the beginning".to_string(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icons.music), Style::default().fg(theme.palette.accent)),
            Span::styled(
                truncate_str(&sel.record.track_name, width),
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", icons.artist), secondary),
            Span::styled(truncate_str(&sel.record.artist_name, width), secondary),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", icons.link), Style::default().fg(theme.palette.accent_alt)),
            Span::styled(sel.clip_url(), Style::default().fg(theme.palette.accent_alt)),
        ]),
        Line::from(Span::styled(
            format!("  {} · {}", truncate_str(&sel.video.label(), width / 2), start),
            secondary,
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_snippet(frame: &mut Frame, theme: &Theme, sel: &Selection, area: Rect) {
    let b = block(theme, format!(" {} \"{}\" ", theme.icons.lyrics, sel.query));
    let inner = b.inner(area);
    frame.render_widget(b, area);

    if sel.snippet.is_empty() {
        frame.render_widget(
            Paragraph::new("No lyrics text for this track")
                .style(Style::default().fg(theme.palette.fg_secondary)),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = sel
        .snippet
        .lines
        .iter()
        .enumerate()
        .map(|(offset, text)| {
            let is_match = sel.snippet.matched == Some(sel.snippet.start + offset);
            lyric_line(theme, text, is_match, true)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_full_lyrics(frame: &mut Frame, theme: &Theme, sel: &Selection, area: Rect) {
    let total = sel.document.len();
    let b = block(theme, format!(" Full Lyrics ({} lines) ", total));
    let inner = b.inner(area);
    frame.render_widget(b, area);

    let lines: Vec<Line> = sel
        .document
        .lines
        .iter()
        .enumerate()
        .skip(sel.scroll)
        .take(inner.height as usize)
        .map(|(i, line)| {
            let is_match = sel.snippet.matched == Some(i);
            lyric_line(theme, &line.text, is_match, sel.snippet.contains(i))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn lyric_line<'a>(theme: &Theme, text: &'a str, is_match: bool, in_snippet: bool) -> Line<'a> {
    let style = if is_match {
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else if in_snippet {
        Style::default().fg(theme.palette.fg_primary)
    } else {
        Style::default().fg(theme.palette.fg_secondary)
    };
    let prefix = if is_match {
        format!("{} ", theme.icons.marker)
    } else {
        "  ".to_string()
    };
    Line::from(vec![Span::styled(prefix, style), Span::styled(text, style)])
}
