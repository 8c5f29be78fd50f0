use super::state::Focus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SetFocus(Focus),
    FocusNext,
    FocusPrev,

    ListUp,
    ListDown,
    GoTop,
    GoBottom,

    InputChar(char),
    Backspace,
    ClearInput,
    StartSearch,

    // Pair the highlighted lyrics hit with the highlighted video
    Select,
    Back,
    ScrollUp,
    ScrollDown,

    ToggleDarkMode,
    ToggleHelp,
    Resize,
}
