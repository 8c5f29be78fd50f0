//! Search screen - query box plus the lyrics and YouTube result lists

use crate::app::state::{AppState, Focus};
use crate::tui::theme::{get_theme, LoadingSpinner, Theme};
use crate::tui::truncate_str;
use crate::youtube::models::format_duration;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(area);

    render_search_box(frame, state, rows[0]);
    render_lyrics_list(frame, state, rows[1]);
    render_video_list(frame, state, rows[2]);
}

fn panel<'a>(theme: &Theme, title: String, focused: bool) -> Block<'a> {
    let border_color = if focused {
        theme.palette.accent
    } else {
        theme.palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent))
}

/// Render the search input box
pub fn render_search_box(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let is_focused = state.focus == Focus::Input;
    let block = panel(&theme, format!(" {} Search ", theme.icons.search), is_focused);

    let line = if state.query.is_empty() && !state.loading {
        Line::from(Span::styled(
            "Type your message...",
            Style::default().fg(theme.palette.fg_secondary),
        ))
    } else if state.loading {
        let spinner = LoadingSpinner::frame(state.tick);
        Line::from(format!("{} {}", state.query, spinner))
    } else {
        let cursor = if is_focused { "▏" } else { "" };
        Line::from(format!("{}{}", state.query, cursor))
    };

    let p = Paragraph::new(line)
        .style(Style::default().fg(theme.palette.fg_primary))
        .block(block);
    frame.render_widget(p, area);
}

fn render_lyrics_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let focused = state.focus == Focus::Lyrics;
    let block = panel(&theme, format!(" {} Lyrics Results ", theme.icons.lyrics), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let list = &state.lyrics_list;
    if list.is_empty() {
        let msg = match state.last_search.as_deref() {
            _ if state.loading => "Searching...",
            Some(_) => "No lyrics found",
            None => "Search for a lyric above",
        };
        frame.render_widget(
            Paragraph::new(msg).style(Style::default().fg(theme.palette.fg_secondary)),
            inner,
        );
        return;
    }

    let query = state.effective_query().trim().to_lowercase();
    let width = inner.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = list
        .items
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let title = Line::from(Span::styled(
                truncate_str(&record.label(), width),
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD),
            ));

            let preview = state
                .lyrics_previews
                .get(i)
                .and_then(Option::as_deref)
                .map(|text| truncate_str(text, width.saturating_sub(2)));

            let detail_style = Style::default().fg(theme.palette.fg_secondary);
            let detail = match preview {
                Some(text) => {
                    let mut spans = vec![Span::styled(format!("{} ", theme.icons.marker), detail_style)];
                    spans.extend(highlight_text(text, &query, detail_style, &theme));
                    Line::from(spans)
                }
                None if record.instrumental => Line::from(Span::styled("(instrumental)", detail_style)),
                None => Line::from(Span::styled("(no lyrics text)", detail_style)),
            };

            ListItem::new(vec![title, detail])
        })
        .collect();

    render_list(frame, &theme, items, list.selected, list.scroll_offset, focused, inner);
}

fn render_video_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme(state.dark_mode);
    let focused = state.focus == Focus::Videos;
    let block = panel(&theme, format!(" {} YouTube Results ", theme.icons.video), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let list = &state.video_list;
    if list.is_empty() {
        let msg = if state.lyrics_list.is_empty() {
            "Videos appear for the top lyrics result"
        } else {
            "No videos found"
        };
        frame.render_widget(
            Paragraph::new(msg).style(Style::default().fg(theme.palette.fg_secondary)),
            inner,
        );
        return;
    }

    let width = inner.width.saturating_sub(12) as usize;
    let items: Vec<ListItem> = list
        .items
        .iter()
        .map(|v| {
            let duration = v
                .duration_seconds
                .map(|d| format!("  {}", format_duration(d)))
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_str(&v.label(), width),
                    Style::default().fg(theme.palette.fg_primary),
                ),
                Span::styled(duration, Style::default().fg(theme.palette.fg_secondary)),
            ]))
        })
        .collect();

    render_list(frame, &theme, items, list.selected, list.scroll_offset, focused, inner);
}

fn render_list(
    frame: &mut Frame,
    theme: &Theme,
    items: Vec<ListItem>,
    selected: usize,
    offset: usize,
    focused: bool,
    area: Rect,
) {
    let mut list_state = ListState::default()
        .with_offset(offset)
        .with_selected(Some(selected));

    let highlight = if focused {
        Style::default()
            .bg(theme.palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol(if focused { "\u{f054} " } else { "  " }); // nf-fa-chevron_right

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Highlight matches of an already lowercased `query` in text
fn highlight_text(text: String, query: &str, base_style: Style, theme: &Theme) -> Vec<Span<'static>> {
    let highlight_style = base_style
        .fg(theme.palette.accent)
        .add_modifier(Modifier::BOLD);
    if query.is_empty() {
        return vec![Span::styled(text, base_style)];
    }

    // Lowercasing can change byte lengths, so keep the original offset of
    // every lowercased byte.
    let mut lower = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len() + 1);
    for (idx, ch) in text.char_indices() {
        lower.extend(ch.to_lowercase());
        origin.resize(lower.len(), idx);
    }
    origin.push(text.len());

    let mut spans = Vec::new();
    let mut last_end = 0;
    let mut search_start = 0;

    while let Some(found) = lower[search_start..].find(query) {
        let lower_end = search_start + found + query.len();
        let start = origin[search_start + found];
        let end = origin[lower_end];
        if start < last_end || end <= start {
            break;
        }
        if start > last_end {
            spans.push(Span::styled(text[last_end..start].to_string(), base_style));
        }
        spans.push(Span::styled(text[start..end].to_string(), highlight_style));
        last_end = end;
        search_start = lower_end;
    }

    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
    spans
}
