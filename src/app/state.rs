use crate::lyrics::{self, LyricsDocument, LyricsRecord, Snippet};
use crate::youtube::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Search,
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Lyrics,
    Videos,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// A result list with its own selection and scroll position
#[derive(Debug, Clone)]
pub struct ResultList<T> {
    pub items: Vec<T>,
    pub selected: usize,
    pub scroll_offset: usize,
}

impl<T> Default for ResultList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            scroll_offset: 0,
        }
    }
}

impl<T> ResultList<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }
}

/// A lyrics hit paired with a video, plus the preview snippet
#[derive(Debug, Clone)]
pub struct Selection {
    pub record: LyricsRecord,
    pub document: LyricsDocument,
    pub video: Video,
    pub query: String,
    pub snippet: Snippet,
    /// Clip start in seconds, from the snippet's first synced line
    pub start_secs: Option<u64>,
    /// First visible line of the full-lyrics pane
    pub scroll: usize,
}

impl Selection {
    pub fn new(record: LyricsRecord, video: Video, query: &str, radius: usize) -> Self {
        let document = record.document();
        let (snippet, start_secs) = lyrics::preview(&document, query, radius);
        let scroll = snippet.start;
        Self {
            record,
            document,
            video,
            query: query.to_string(),
            snippet,
            start_secs,
            scroll,
        }
    }

    pub fn clip_url(&self) -> String {
        self.video.watch_url(self.start_secs)
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(self.document.len().saturating_sub(1));
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub screen: Screen,
    pub focus: Focus,

    // Search
    pub query: String,
    pub last_search: Option<String>,
    pub loading: bool,
    pub lyrics_list: ResultList<LyricsRecord>,
    /// Matching (or opening) line per lyrics result, against `last_search`
    pub lyrics_previews: Vec<Option<String>>,
    pub video_list: ResultList<Video>,

    // Detail view
    pub selection: Option<Selection>,
    pub context_radius: usize,

    pub dark_mode: bool,
    pub show_help: bool,

    pub toast: Option<Toast>,
    pub status: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            tick: 0,
            screen: Screen::Search,
            focus: Focus::Input,
            query: String::new(),
            last_search: None,
            loading: false,
            lyrics_list: ResultList::default(),
            lyrics_previews: Vec::new(),
            video_list: ResultList::default(),
            selection: None,
            context_radius: lyrics::snippet::DEFAULT_CONTEXT_RADIUS,
            dark_mode: false,
            show_help: false,
            toast: None,
            status: String::new(),
        }
    }

    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Replace both result lists with the results of `query`
    pub fn set_search_results(&mut self, query: String, lyrics: Vec<LyricsRecord>, videos: Vec<Video>) {
        self.lyrics_previews = lyrics.iter().map(|r| preview_line(r, &query)).collect();
        self.lyrics_list.set_items(lyrics);
        self.video_list.set_items(videos);
        self.last_search = Some(query);
    }

    /// Query that produced the visible results, or the typed one
    pub fn effective_query(&self) -> &str {
        self.last_search.as_deref().unwrap_or(&self.query)
    }
}

fn preview_line(record: &LyricsRecord, query: &str) -> Option<String> {
    let doc = record.document();
    let texts = doc.texts();
    let idx = lyrics::snippet::find_match(&texts, query).unwrap_or(0);
    texts.get(idx).map(|t| t.to_string())
}
