//! # Key Map
//!
//! Translates terminal events into core `Action`s. The same key can mean
//! different things depending on the active view, so the mapping reads the
//! current `App` (view, editor focus, filter mode) but never changes it.
//!
//! ```text
//! Dashboard      Tab switch · n new note · t new todo · q quit
//! NoteList       ↑/k ↓/j move · Enter edit · n new · d/x delete · / filter · Tab · q
//! TodoList       ↑/k ↓/j move · Space/Enter toggle · n new · d/x delete · / filter · Tab · q
//! NoteEdit       Tab next field · Ctrl+S save · Esc back · everything else edits
//! TodoAdd        Enter add · Esc back · everything else edits
//! DeleteConfirm  y/Enter confirm · n/Esc cancel · q
//! ```
//!
//! Ctrl+C quits from every view. While a list filter is active, typed
//! characters edit the filter: Enter keeps it, Esc clears it.

use crate::core::action::Action;
use crate::core::state::{App, EditorField, View};
use crate::core::text_field::TextEdit;
use crate::tui::event::TuiEvent;

/// The action for `event` in the current state, if it means anything there.
pub fn action_for(app: &App, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        // Layout only; never reaches the state machine.
        TuiEvent::Resize(..) => return None,
        _ => {}
    }

    match app.view {
        View::Dashboard => dashboard_action(event),
        View::NoteList | View::TodoList => {
            let filtering = app.active_cursor().is_some_and(|c| c.filtering);
            if filtering {
                filter_action(event)
            } else {
                let has_filter = app.active_cursor().is_some_and(|c| !c.filter.is_empty());
                list_action(app.view, event, has_filter)
            }
        }
        View::NoteEdit => editor_action(app.editor.focus, event),
        View::TodoAdd => composer_action(event),
        View::DeleteConfirm => confirm_action(event),
    }
}

fn dashboard_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Tab => Some(Action::SwitchView),
        TuiEvent::InputChar('n' | 'N') => Some(Action::NewNote),
        TuiEvent::InputChar('t' | 'T') => Some(Action::NewTodo),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        _ => None,
    }
}

fn list_action(view: View, event: &TuiEvent, has_filter: bool) -> Option<Action> {
    match event {
        TuiEvent::Tab => Some(Action::SwitchView),
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => Some(Action::CursorUp),
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => Some(Action::CursorDown),
        TuiEvent::InputChar('/') => Some(Action::BeginFilter),
        TuiEvent::Escape if has_filter => Some(Action::ClearFilter),
        TuiEvent::Submit => Some(Action::Select),
        TuiEvent::InputChar('d' | 'x') => Some(Action::RequestDelete),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('n' | 'N') if view == View::NoteList => Some(Action::NewNote),
        TuiEvent::InputChar('n' | 'N' | 't' | 'T') if view == View::TodoList => {
            Some(Action::NewTodo)
        }
        TuiEvent::InputChar(' ') if view == View::TodoList => Some(Action::ToggleDone),
        _ => None,
    }
}

fn filter_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Submit => Some(Action::EndFilter),
        TuiEvent::Escape => Some(Action::ClearFilter),
        TuiEvent::CursorUp => Some(Action::CursorUp),
        TuiEvent::CursorDown => Some(Action::CursorDown),
        TuiEvent::InputChar('\n') => None,
        TuiEvent::InputChar(c) => Some(Action::FilterEdit(TextEdit::Insert(*c))),
        TuiEvent::Paste(text) => Some(Action::FilterEdit(TextEdit::Paste(text.clone()))),
        TuiEvent::Backspace => Some(Action::FilterEdit(TextEdit::Backspace)),
        _ => None,
    }
}

fn editor_action(focus: EditorField, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape => Some(Action::Back),
        TuiEvent::Save => Some(Action::Save),
        TuiEvent::Tab => Some(Action::FocusNext),
        TuiEvent::Submit if focus == EditorField::Content => Some(Action::Edit(TextEdit::Newline)),
        TuiEvent::Submit => Some(Action::FocusNext),
        _ => text_edit(event).map(Action::Edit),
    }
}

fn composer_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape => Some(Action::Back),
        TuiEvent::Submit => Some(Action::Submit),
        TuiEvent::CursorUp | TuiEvent::CursorDown => None,
        _ => text_edit(event).map(Action::Edit),
    }
}

fn confirm_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Submit | TuiEvent::InputChar('y' | 'Y') => Some(Action::ConfirmDelete),
        TuiEvent::Escape | TuiEvent::InputChar('n' | 'N') => Some(Action::CancelDelete),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Editing keys shared by every text-capturing view.
fn text_edit(event: &TuiEvent) -> Option<TextEdit> {
    match event {
        TuiEvent::InputChar(c) => Some(TextEdit::Insert(*c)),
        TuiEvent::Paste(text) => Some(TextEdit::Paste(text.clone())),
        TuiEvent::Backspace => Some(TextEdit::Backspace),
        TuiEvent::Delete => Some(TextEdit::Delete),
        TuiEvent::CursorLeft => Some(TextEdit::Left),
        TuiEvent::CursorRight => Some(TextEdit::Right),
        TuiEvent::CursorUp => Some(TextEdit::Up),
        TuiEvent::CursorDown => Some(TextEdit::Down),
        TuiEvent::CursorHome => Some(TextEdit::Home),
        TuiEvent::CursorEnd => Some(TextEdit::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn app_in(view: View) -> App {
        let mut app = test_app();
        app.view = view;
        app
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for view in [
            View::Dashboard,
            View::NoteList,
            View::NoteEdit,
            View::TodoList,
            View::TodoAdd,
            View::DeleteConfirm,
        ] {
            assert_eq!(
                action_for(&app_in(view), &TuiEvent::ForceQuit),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn test_q_types_in_text_views() {
        assert_eq!(
            action_for(&app_in(View::Dashboard), &TuiEvent::InputChar('q')),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for(&app_in(View::NoteEdit), &TuiEvent::InputChar('q')),
            Some(Action::Edit(TextEdit::Insert('q')))
        );
        assert_eq!(
            action_for(&app_in(View::TodoAdd), &TuiEvent::InputChar('q')),
            Some(Action::Edit(TextEdit::Insert('q')))
        );
    }

    #[test]
    fn test_dashboard_shortcuts() {
        let app = app_in(View::Dashboard);
        assert_eq!(action_for(&app, &TuiEvent::Tab), Some(Action::SwitchView));
        assert_eq!(
            action_for(&app, &TuiEvent::InputChar('N')),
            Some(Action::NewNote)
        );
        assert_eq!(
            action_for(&app, &TuiEvent::InputChar('t')),
            Some(Action::NewTodo)
        );
        assert_eq!(action_for(&app, &TuiEvent::Submit), None);
    }

    #[test]
    fn test_space_toggles_only_in_todo_list() {
        assert_eq!(
            action_for(&app_in(View::TodoList), &TuiEvent::InputChar(' ')),
            Some(Action::ToggleDone)
        );
        assert_eq!(
            action_for(&app_in(View::NoteList), &TuiEvent::InputChar(' ')),
            None
        );
    }

    #[test]
    fn test_n_creates_kind_of_current_list() {
        assert_eq!(
            action_for(&app_in(View::NoteList), &TuiEvent::InputChar('n')),
            Some(Action::NewNote)
        );
        assert_eq!(
            action_for(&app_in(View::TodoList), &TuiEvent::InputChar('n')),
            Some(Action::NewTodo)
        );
    }

    #[test]
    fn test_filter_mode_captures_typing() {
        let mut app = app_in(View::NoteList);
        assert_eq!(
            action_for(&app, &TuiEvent::InputChar('/')),
            Some(Action::BeginFilter)
        );
        app.note_cursor.begin_filter();
        assert_eq!(
            action_for(&app, &TuiEvent::InputChar('d')),
            Some(Action::FilterEdit(TextEdit::Insert('d')))
        );
        assert_eq!(action_for(&app, &TuiEvent::Submit), Some(Action::EndFilter));
        assert_eq!(action_for(&app, &TuiEvent::Escape), Some(Action::ClearFilter));
    }

    #[test]
    fn test_escape_clears_kept_filter() {
        let mut app = app_in(View::TodoList);
        assert_eq!(action_for(&app, &TuiEvent::Escape), None);
        app.todo_cursor.filter = "milk".to_string();
        assert_eq!(action_for(&app, &TuiEvent::Escape), Some(Action::ClearFilter));
    }

    #[test]
    fn test_enter_in_editor_depends_on_focus() {
        let mut app = app_in(View::NoteEdit);
        assert_eq!(action_for(&app, &TuiEvent::Submit), Some(Action::FocusNext));
        app.editor.focus = EditorField::Content;
        assert_eq!(
            action_for(&app, &TuiEvent::Submit),
            Some(Action::Edit(TextEdit::Newline))
        );
        assert_eq!(action_for(&app, &TuiEvent::Save), Some(Action::Save));
        assert_eq!(action_for(&app, &TuiEvent::Escape), Some(Action::Back));
    }

    #[test]
    fn test_confirm_keys() {
        let app = app_in(View::DeleteConfirm);
        assert_eq!(
            action_for(&app, &TuiEvent::InputChar('y')),
            Some(Action::ConfirmDelete)
        );
        assert_eq!(action_for(&app, &TuiEvent::Submit), Some(Action::ConfirmDelete));
        assert_eq!(
            action_for(&app, &TuiEvent::InputChar('n')),
            Some(Action::CancelDelete)
        );
        assert_eq!(action_for(&app, &TuiEvent::Escape), Some(Action::CancelDelete));
    }

    #[test]
    fn test_resize_never_maps() {
        assert_eq!(action_for(&app_in(View::NoteEdit), &TuiEvent::Resize(10, 10)), None);
    }
}
