use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Page;

/// Semantic events for the dashboard TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Switch to next page
    NextPage,
    /// Switch to previous page
    PrevPage,
    /// Jump to a specific page
    GoPage(Page),
    /// Start the temp purge task
    RunTempPurge,
    /// Start the DNS flush task
    RunDnsFlush,
    /// Toggle dark/light theme
    ToggleTheme,
    /// Media transport controls
    MediaPlayPause,
    MediaNext,
    MediaPrev,
    /// Master volume nudges
    VolumeUp,
    VolumeDown,
    /// Text editing (Notes and Calendar pages)
    Input(char),
    Backspace,
    Newline,
    /// Calendar cursor movement
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// No action
    None,
}

/// Map a key press to a UI event.
///
/// The Notes and Calendar pages accept free text, so printable keys are
/// passed through there and the global single-letter shortcuts only
/// apply on the other pages. Esc and Tab always work.
pub fn map_key(page: Page, key: KeyEvent) -> UiEvent {
    // Global chords first
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => UiEvent::Quit,
            _ => UiEvent::None,
        };
    }

    match key.code {
        KeyCode::Esc => return UiEvent::Quit,
        KeyCode::Tab => return UiEvent::NextPage,
        KeyCode::BackTab => return UiEvent::PrevPage,
        _ => {}
    }

    let text_page = matches!(page, Page::Notes | Page::Calendar);

    if text_page {
        return match key.code {
            KeyCode::Char(c) => UiEvent::Input(c),
            KeyCode::Backspace => UiEvent::Backspace,
            KeyCode::Enter => UiEvent::Newline,
            KeyCode::Left => UiEvent::CursorLeft,
            KeyCode::Right => UiEvent::CursorRight,
            KeyCode::Up => UiEvent::CursorUp,
            KeyCode::Down => UiEvent::CursorDown,
            _ => UiEvent::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => UiEvent::Quit,
        KeyCode::Char('?') | KeyCode::Char('h') => UiEvent::ToggleHelp,
        KeyCode::Char('1') => UiEvent::GoPage(Page::Dashboard),
        KeyCode::Char('2') => UiEvent::GoPage(Page::Optimize),
        KeyCode::Char('3') => UiEvent::GoPage(Page::Notes),
        KeyCode::Char('4') => UiEvent::GoPage(Page::Calendar),
        KeyCode::Char('5') => UiEvent::GoPage(Page::Settings),
        KeyCode::Char('t') if page == Page::Optimize => UiEvent::RunTempPurge,
        KeyCode::Char('d') if page == Page::Optimize => UiEvent::RunDnsFlush,
        KeyCode::Char('t') if page == Page::Settings => UiEvent::ToggleTheme,
        KeyCode::Char(' ') => UiEvent::MediaPlayPause,
        KeyCode::Char('n') => UiEvent::MediaNext,
        KeyCode::Char('p') => UiEvent::MediaPrev,
        KeyCode::Char('+') | KeyCode::Char('=') => UiEvent::VolumeUp,
        KeyCode::Char('-') => UiEvent::VolumeDown,
        _ => UiEvent::None,
    }
}
