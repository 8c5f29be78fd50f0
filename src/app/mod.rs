pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::lyrics::LrclibClient;
use crate::search::{self, SearchOutcome};
use crate::tui::{self, TuiTerminal};
use crate::youtube::YoutubeClient;
use actions::Action;
use events::{Event, NetworkEvent};
use state::{AppState, Focus, Screen, Selection, Toast};
use tokio::sync::mpsc;

/// Rows assumed visible when keeping list selections on screen
const LIST_PAGE: usize = 10;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    lrclib: LrclibClient,
    youtube: YoutubeClient,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf) -> anyhow::Result<Self> {
        let lrclib = LrclibClient::new(&cfg.lyrics)?;
        let youtube = YoutubeClient::new(&cfg.youtube)?;

        let mut state = AppState::new();
        state.dark_mode = cfg.theme.dark_mode;
        state.context_radius = cfg.snippet.context_radius;

        Ok(Self {
            cfg,
            config_path,
            state,
            lrclib,
            youtube,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        spawn_ticker(tx.clone());

        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Network(ne) => {
                    handle_network(&mut self.state, ne);
                }
                Event::Tick => {
                    self.state.tick = self.state.tick.wrapping_add(1);
                    // Only the spinner and toasts animate.
                    if !self.state.loading && self.state.toast.is_none() {
                        continue;
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        if self.cfg.theme.dark_mode == self.state.dark_mode {
            return;
        }
        self.cfg.theme.dark_mode = self.state.dark_mode;
        if let Err(e) = crate::config::save(&self.cfg, Some(&self.config_path)) {
            tracing::warn!("failed to save config: {e:#}");
        }
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::StartSearch => self.spawn_search(tx),
            _ => reduce(&mut self.state, action),
        }
    }

    fn spawn_search(&mut self, tx: &mpsc::Sender<Event>) {
        let Some(query) = begin_search(&mut self.state) else {
            return;
        };

        let lrclib = self.lrclib.clone();
        let youtube = self.youtube.clone();
        let tx = tx.clone();

        tokio::spawn(async move {
            let ev = match search::run(&lrclib, &youtube, &query).await {
                Ok(outcome) => NetworkEvent::SearchFinished(outcome),
                Err(e) => NetworkEvent::SearchFailed {
                    query,
                    error: format!("{e:#}"),
                },
            };
            let _ = tx.send(Event::Network(ev)).await;
        });
    }
}

fn spawn_ticker(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}

/// Validate and mark a search as in flight. Returns the query to send.
fn begin_search(state: &mut AppState) -> Option<String> {
    if state.loading {
        return None;
    }
    let query = state.query.trim().to_string();
    if query.is_empty() {
        state.status = "Type a lyric first".into();
        return None;
    }
    state.loading = true;
    state.status = format!("Searching: {query}");
    tracing::info!("searching lyrics for {query:?}");
    Some(query)
}

fn handle_network(state: &mut AppState, ne: NetworkEvent) {
    match ne {
        NetworkEvent::SearchFinished(outcome) => apply_search_outcome(state, outcome),
        NetworkEvent::SearchFailed { query, error } => {
            tracing::warn!("search for {query:?} failed: {error}");
            state.loading = false;
            state.toast = Some(Toast::error(error.clone()));
            state.status = format!("Error: {error} (Enter to retry)");
        }
    }
}

fn apply_search_outcome(state: &mut AppState, outcome: SearchOutcome) {
    let SearchOutcome {
        query,
        lyrics,
        videos,
        video_error,
    } = outcome;

    state.loading = false;
    state.set_search_results(query, lyrics, videos);
    state.status = format!(
        "Results: {} lyrics, {} videos",
        state.lyrics_list.items.len(),
        state.video_list.items.len()
    );

    if let Some(err) = video_error {
        state.toast = Some(Toast::error(format!("YouTube search failed: {err}")));
    }
    state.focus = if state.lyrics_list.is_empty() {
        Focus::Input
    } else {
        Focus::Lyrics
    };
}

fn select(state: &mut AppState) {
    let Some(record) = state.lyrics_list.selected_item().cloned() else {
        state.status = "No lyrics selected".into();
        return;
    };
    let Some(video) = state.video_list.selected_item().cloned() else {
        state.status = "No video to pair with these lyrics".into();
        return;
    };

    let selection = Selection::new(record, video, state.effective_query(), state.context_radius);
    tracing::debug!(
        "selected {:?} with video {} (snippet lines {}..={})",
        selection.record.track_name,
        selection.video.video_id,
        selection.snippet.start,
        selection.snippet.end()
    );
    state.status = match selection.snippet.matched {
        Some(i) => format!("Matched line {}", i + 1),
        None => "No matching line, showing the opening".into(),
    };
    state.selection = Some(selection);
    state.screen = Screen::Preview;
}

fn next_focus(state: &AppState, forward: bool) -> Focus {
    let order = [Focus::Input, Focus::Lyrics, Focus::Videos];
    let available = |f: Focus| match f {
        Focus::Input => true,
        Focus::Lyrics => !state.lyrics_list.is_empty(),
        Focus::Videos => !state.video_list.is_empty(),
    };
    let pos = order.iter().position(|f| *f == state.focus).unwrap_or(0);
    (1..=order.len())
        .map(|step| {
            if forward {
                order[(pos + step) % order.len()]
            } else {
                order[(pos + order.len() * 2 - step) % order.len()]
            }
        })
        .find(|f| available(*f))
        .unwrap_or(Focus::Input)
}

fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::Quit => state.should_quit = true,
        Action::ToggleHelp => state.show_help = !state.show_help,
        Action::ToggleDarkMode => state.dark_mode = !state.dark_mode,
        Action::SetFocus(focus) => state.focus = focus,
        Action::FocusNext => state.focus = next_focus(state, true),
        Action::FocusPrev => state.focus = next_focus(state, false),
        Action::InputChar(c) => state.query.push(c),
        Action::Backspace => {
            state.query.pop();
        }
        Action::ClearInput => state.query.clear(),
        Action::ListUp => match state.focus {
            Focus::Lyrics => {
                state.lyrics_list.select_prev();
                state.lyrics_list.update_scroll(LIST_PAGE);
            }
            Focus::Videos => {
                state.video_list.select_prev();
                state.video_list.update_scroll(LIST_PAGE);
            }
            Focus::Input => {}
        },
        Action::ListDown => match state.focus {
            Focus::Lyrics => {
                state.lyrics_list.select_next();
                state.lyrics_list.update_scroll(LIST_PAGE);
            }
            Focus::Videos => {
                state.video_list.select_next();
                state.video_list.update_scroll(LIST_PAGE);
            }
            Focus::Input => {}
        },
        Action::GoTop => match state.focus {
            Focus::Lyrics => {
                state.lyrics_list.select_first();
                state.lyrics_list.update_scroll(LIST_PAGE);
            }
            Focus::Videos => {
                state.video_list.select_first();
                state.video_list.update_scroll(LIST_PAGE);
            }
            Focus::Input => {}
        },
        Action::GoBottom => match state.focus {
            Focus::Lyrics => {
                state.lyrics_list.select_last();
                state.lyrics_list.update_scroll(LIST_PAGE);
            }
            Focus::Videos => {
                state.video_list.select_last();
                state.video_list.update_scroll(LIST_PAGE);
            }
            Focus::Input => {}
        },
        Action::Select => select(state),
        Action::Back => {
            state.selection = None;
            state.screen = Screen::Search;
            state.status.clear();
        }
        Action::ScrollUp => {
            if let Some(sel) = state.selection.as_mut() {
                sel.scroll_up();
            }
        }
        Action::ScrollDown => {
            if let Some(sel) = state.selection.as_mut() {
                sel.scroll_down();
            }
        }
        Action::StartSearch | Action::Resize => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::LyricsRecord;
    use crate::youtube::Video;

    fn record(track: &str, lyrics: &str) -> LyricsRecord {
        LyricsRecord {
            id: 1,
            track_name: track.into(),
            artist_name: "Artist".into(),
            album_name: None,
            duration: None,
            instrumental: false,
            plain_lyrics: Some(lyrics.into()),
            synced_lyrics: None,
        }
    }

    fn video(id: &str) -> Video {
        Video {
            video_id: id.into(),
            title: format!("video {id}"),
            channel: None,
            duration_seconds: None,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        state.query = "love".into();
        assert_eq!(begin_search(&mut state).as_deref(), Some("love"));
        apply_search_outcome(
            &mut state,
            SearchOutcome {
                query: "love".into(),
                lyrics: vec![
                    record("First", "I walk alone\nThinking of you\nLove is all I need\nNight falls again"),
                    record("Second", "nothing here\nat all"),
                ],
                videos: vec![video("v1"), video("v2")],
                video_error: None,
            },
        );
        state
    }

    #[test]
    fn test_empty_query_does_not_search() {
        let mut state = AppState::new();
        state.query = "   ".into();
        assert_eq!(begin_search(&mut state), None);
        assert!(!state.loading);
        assert!(!state.status.is_empty());
    }

    #[test]
    fn test_second_search_ignored_while_loading() {
        let mut state = AppState::new();
        state.query = "a".into();
        assert!(begin_search(&mut state).is_some());
        assert!(begin_search(&mut state).is_none());
    }

    #[test]
    fn test_outcome_replaces_lists_and_focuses_lyrics() {
        let state = loaded_state();
        assert!(!state.loading);
        assert_eq!(state.lyrics_list.items.len(), 2);
        assert_eq!(state.video_list.items.len(), 2);
        assert_eq!(state.focus, Focus::Lyrics);
        assert_eq!(state.last_search.as_deref(), Some("love"));
    }

    #[test]
    fn test_failed_search_clears_loading() {
        let mut state = AppState::new();
        state.query = "x".into();
        begin_search(&mut state);
        handle_network(
            &mut state,
            NetworkEvent::SearchFailed {
                query: "x".into(),
                error: "boom".into(),
            },
        );
        assert!(!state.loading);
        assert!(state.toast.is_some());
    }

    #[test]
    fn test_select_builds_snippet_and_back_discards() {
        let mut state = loaded_state();
        reduce(&mut state, Action::Select);
        assert_eq!(state.screen, Screen::Preview);
        let sel = state.selection.as_ref().unwrap();
        assert_eq!(sel.record.track_name, "First");
        assert_eq!(sel.video.video_id, "v1");
        assert_eq!(sel.snippet.matched, Some(2));
        assert_eq!(sel.snippet.start, 0);
        assert_eq!(sel.snippet.len(), 4);
        assert_eq!(sel.clip_url(), "https://www.youtube.com/watch?v=v1");

        reduce(&mut state, Action::Back);
        assert_eq!(state.screen, Screen::Search);
        assert!(state.selection.is_none());
    }

    #[test]
    fn test_select_pairs_highlighted_video() {
        let mut state = loaded_state();
        reduce(&mut state, Action::ListDown);
        reduce(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Videos);
        reduce(&mut state, Action::ListDown);
        reduce(&mut state, Action::Select);
        let sel = state.selection.as_ref().unwrap();
        assert_eq!(sel.record.track_name, "Second");
        assert_eq!(sel.video.video_id, "v2");
        assert_eq!(sel.snippet.matched, None);
        assert_eq!(sel.snippet.start, 0);
    }

    #[test]
    fn test_select_without_videos_is_refused() {
        let mut state = loaded_state();
        state.video_list.set_items(Vec::new());
        reduce(&mut state, Action::Select);
        assert!(state.selection.is_none());
        assert_eq!(state.screen, Screen::Search);
    }

    #[test]
    fn test_focus_cycle_skips_empty_lists() {
        let mut state = AppState::new();
        reduce(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Input);

        let mut state = loaded_state();
        state.video_list.set_items(Vec::new());
        state.focus = Focus::Input;
        reduce(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Lyrics);
        reduce(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Input);
        reduce(&mut state, Action::FocusPrev);
        assert_eq!(state.focus, Focus::Lyrics);
    }

    #[test]
    fn test_typing_and_preview_scroll() {
        let mut state = AppState::new();
        for c in "hey".chars() {
            reduce(&mut state, Action::InputChar(c));
        }
        reduce(&mut state, Action::Backspace);
        assert_eq!(state.query, "he");
        reduce(&mut state, Action::ClearInput);
        assert!(state.query.is_empty());

        let mut state = loaded_state();
        reduce(&mut state, Action::Select);
        for _ in 0..10 {
            reduce(&mut state, Action::ScrollDown);
        }
        assert_eq!(state.selection.as_ref().unwrap().scroll, 3);
        reduce(&mut state, Action::ScrollUp);
        assert_eq!(state.selection.as_ref().unwrap().scroll, 2);
    }
}
