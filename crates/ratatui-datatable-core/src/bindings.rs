//! Key bindings: matching helpers, help entries and the table's default key map.

use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// A group of keys with the text shown for it in a [`crate::help::HelpBar`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyEvent>,
    pub help_key: String,
    pub help_desc: String,
}

impl Binding {
    pub fn new(
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        keys: Vec<KeyEvent>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        matches_any(&self.keys, event)
    }
}

/// Exact match on key code and all modifiers.
pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && pattern.modifiers == event.modifiers
}

pub fn matches_any(patterns: &[KeyEvent], event: &KeyEvent) -> bool {
    patterns.iter().any(|p| key_event_matches(p, event))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::ctrl())
}

/// What a key press means to [`crate::view::DataTableView`] while the table has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableCommand {
    FocusSearch,
    CursorUp,
    CursorDown,
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
    PreviousColumn,
    NextColumn,
    SortColumn,
    PageSizeUp,
    PageSizeDown,
    Activate,
}

/// Key map of [`crate::view::DataTableView`].
///
/// Digits `1`..`9` always sort by the n-th column and are not configurable here.
#[derive(Clone, Debug)]
pub struct TableBindings {
    pub focus_search: Vec<KeyEvent>,
    pub cursor_up: Vec<KeyEvent>,
    pub cursor_down: Vec<KeyEvent>,
    pub previous_page: Vec<KeyEvent>,
    pub next_page: Vec<KeyEvent>,
    pub first_page: Vec<KeyEvent>,
    pub last_page: Vec<KeyEvent>,
    pub previous_column: Vec<KeyEvent>,
    pub next_column: Vec<KeyEvent>,
    pub sort_column: Vec<KeyEvent>,
    pub page_size_up: Vec<KeyEvent>,
    pub page_size_down: Vec<KeyEvent>,
    pub activate: Vec<KeyEvent>,
}

impl Default for TableBindings {
    fn default() -> Self {
        Self {
            focus_search: vec![key_char('/'), key_ctrl('f')],
            cursor_up: vec![key(KeyCode::Up), key_char('k')],
            cursor_down: vec![key(KeyCode::Down), key_char('j')],
            previous_page: vec![key(KeyCode::Left), key_char('h'), key(KeyCode::PageUp)],
            next_page: vec![key(KeyCode::Right), key_char('l'), key(KeyCode::PageDown)],
            first_page: vec![key(KeyCode::Home), key_char('g')],
            last_page: vec![key(KeyCode::End), key_char('G')],
            previous_column: vec![key(KeyCode::BackTab), key_char('[')],
            next_column: vec![key(KeyCode::Tab), key_char(']')],
            sort_column: vec![key_char('s')],
            page_size_up: vec![key_char('+'), key_char('=')],
            page_size_down: vec![key_char('-')],
            activate: vec![key(KeyCode::Enter)],
        }
    }
}

impl TableBindings {
    pub fn command_for(&self, event: &KeyEvent) -> Option<TableCommand> {
        let table = [
            (&self.focus_search, TableCommand::FocusSearch),
            (&self.cursor_up, TableCommand::CursorUp),
            (&self.cursor_down, TableCommand::CursorDown),
            (&self.previous_page, TableCommand::PreviousPage),
            (&self.next_page, TableCommand::NextPage),
            (&self.first_page, TableCommand::FirstPage),
            (&self.last_page, TableCommand::LastPage),
            (&self.previous_column, TableCommand::PreviousColumn),
            (&self.next_column, TableCommand::NextColumn),
            (&self.sort_column, TableCommand::SortColumn),
            (&self.page_size_up, TableCommand::PageSizeUp),
            (&self.page_size_down, TableCommand::PageSizeDown),
            (&self.activate, TableCommand::Activate),
        ];
        table
            .into_iter()
            .find(|(keys, _)| matches_any(keys, event))
            .map(|(_, cmd)| cmd)
    }

    /// Help entries for the default key map.
    pub fn help(&self) -> Vec<Binding> {
        vec![
            Binding::new("/", "search", self.focus_search.clone()),
            Binding::new("1-9/s", "sort", self.sort_column.clone()),
            Binding::new("←/→", "page", self.next_page.clone()),
            Binding::new("+/-", "page size", self.page_size_up.clone()),
            Binding::new("enter", "open", self.activate.clone()),
        ]
    }
}
