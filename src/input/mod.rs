use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Focus, Screen};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    _ => continue,
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match (m.kind, state.screen) {
            (MouseEventKind::ScrollUp, Screen::Preview) => Some(Action::ScrollUp),
            (MouseEventKind::ScrollDown, Screen::Preview) => Some(Action::ScrollDown),
            (MouseEventKind::ScrollUp, Screen::Search) => Some(Action::ListUp),
            (MouseEventKind::ScrollDown, Screen::Search) => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => handle_key(state, k),
    }
}

fn ctrl(k: &KeyEvent) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL)
}

fn handle_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    if state.show_help {
        return match k.code {
            KeyCode::Char('q') if !ctrl(&k) => Some(Action::Quit),
            _ => Some(Action::ToggleHelp),
        };
    }

    // Works everywhere, including while typing.
    if ctrl(&k) && k.code == KeyCode::Char('t') {
        return Some(Action::ToggleDarkMode);
    }
    if ctrl(&k) && k.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match state.screen {
        Screen::Preview => handle_preview(k),
        Screen::Search => match state.focus {
            Focus::Input => handle_search_input(state, k),
            Focus::Lyrics | Focus::Videos => handle_results(k),
        },
    }
}

fn handle_search_input(state: &AppState, k: KeyEvent) -> Option<Action> {
    let has_results = !state.lyrics_list.is_empty() || !state.video_list.is_empty();
    match k.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::StartSearch),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab | KeyCode::Down if has_results => Some(Action::FocusNext),
        KeyCode::BackTab if has_results => Some(Action::FocusPrev),
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Char('u') if ctrl(&k) => Some(Action::ClearInput),
        KeyCode::Char(c) if !ctrl(&k) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_results(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('/') | KeyCode::Char('i') => {
            Some(Action::SetFocus(Focus::Input))
        }
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),
        KeyCode::Char('r') if ctrl(&k) => Some(Action::StartSearch),
        KeyCode::F(5) => Some(Action::StartSearch),
        KeyCode::Char('D') => Some(Action::ToggleDarkMode),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_preview(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::Char('D') => Some(Action::ToggleDarkMode),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl_key(c: char) -> InputEvent {
        InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_typing_goes_to_query() {
        let state = AppState::new();
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('q'))),
            Some(Action::InputChar('q'))
        );
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Enter)),
            Some(Action::StartSearch)
        );
        assert_eq!(map_input_to_action(&state, ctrl_key('u')), Some(Action::ClearInput));
        // Nothing to move to yet
        assert_eq!(map_input_to_action(&state, key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_result_list_keys() {
        let mut state = AppState::new();
        state.focus = Focus::Lyrics;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(
            map_input_to_action(&state, key(KeyCode::Char('/'))),
            Some(Action::SetFocus(Focus::Input))
        );
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('j'))), Some(Action::ListDown));
    }

    #[test]
    fn test_preview_keys() {
        let mut state = AppState::new();
        state.screen = Screen::Preview;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Down)), Some(Action::ScrollDown));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut state = AppState::new();
        state.show_help = true;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Enter)), Some(Action::ToggleHelp));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn test_dark_mode_toggle_while_typing() {
        let state = AppState::new();
        assert_eq!(map_input_to_action(&state, ctrl_key('t')), Some(Action::ToggleDarkMode));
    }
}
