use crate::core::model::RecordKind;
use crate::core::projection::Row;
use crate::core::state::{App, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    Dashboard, DeleteConfirm, Editor, HelpBar, RecordList, TextInput, TitleBar,
};

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Draw one frame. Reads `App`, never mutates it.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.view.label().to_string(), app.status_message.clone())
        .render(frame, title_area);

    match app.view {
        View::Dashboard => {
            Dashboard::new(app.stats(), Local::now()).render(frame, main_area);
        }
        View::NoteList => draw_list(frame, main_area, app, tui, RecordKind::Note),
        View::TodoList => draw_list(frame, main_area, app, tui, RecordKind::Todo),
        View::NoteEdit => Editor::new(&app.editor).render(frame, main_area),
        View::TodoAdd => {
            let [list_area, input_area] = Layout::vertical([Min(0), Length(3)]).areas(main_area);
            draw_list(frame, list_area, app, tui, RecordKind::Todo);
            TextInput::new("New todo", &app.composer, true)
                .placeholder("What needs doing? (end with /daily, /weekly or /monthly)")
                .render(frame, input_area);
        }
        View::DeleteConfirm => draw_delete_confirm(frame, main_area, app, tui),
    }

    let filtering = app.active_cursor().is_some_and(|c| c.filtering);
    HelpBar::new(app.view, filtering).render(frame, help_area);
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, kind: RecordKind) {
    match kind {
        RecordKind::Note => {
            let rows = app.note_rows();
            RecordList::new("Notes", &rows, &app.note_cursor, &mut tui.note_list)
                .empty_message("No notes yet. Press n to write one.")
                .render(frame, area);
        }
        RecordKind::Todo => {
            let rows = app.todo_rows();
            RecordList::new("Todos", &rows, &app.todo_cursor, &mut tui.todo_list)
                .empty_message("No todos yet. Press n to add one.")
                .render(frame, area);
        }
    }
}

/// The originating list with the confirmation overlay on top.
fn draw_delete_confirm(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let Some(pending) = &app.pending_delete else {
        Dashboard::new(app.stats(), Local::now()).render(frame, area);
        return;
    };

    draw_list(frame, area, app, tui, pending.kind);

    let label = match pending.kind {
        RecordKind::Note => app
            .notes
            .iter()
            .find(|n| n.id == pending.id)
            .map(|n| Row::Note(n).filter_value()),
        RecordKind::Todo => app
            .todos
            .iter()
            .find(|t| t.id == pending.id)
            .map(|t| Row::Todo(t).filter_value()),
    };
    DeleteConfirm {
        kind: pending.kind,
        label: label.unwrap_or_default(),
        in_flight: pending.in_flight,
    }
    .render(frame, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::model::{Frequency, Todo};
    use crate::test_support::{test_app, test_note};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut tui = TuiState::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_dashboard_frame() {
        let text = render(&test_app());
        assert!(text.contains("noteme | Dashboard"));
        assert!(text.contains("Nothing here yet."));
        assert!(text.contains("n new note"));
    }

    #[test]
    fn test_note_list_frame() {
        let mut app = test_app();
        update(&mut app, Action::NotesLoaded(vec![test_note("a", "Groceries")]));
        app.view = View::NoteList;
        let text = render(&app);
        assert!(text.contains("Notes (1)"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("[general]"));
    }

    #[test]
    fn test_todo_add_frame_keeps_list_visible() {
        let mut app = test_app();
        app.todos = vec![Todo::new("existing", Frequency::Once)];
        update(&mut app, Action::NewTodo);
        let text = render(&app);
        assert!(text.contains("[ ] existing"));
        assert!(text.contains("New todo"));
    }

    #[test]
    fn test_delete_confirm_frame_names_record() {
        let mut app = test_app();
        app.notes = vec![test_note("a", "Groceries")];
        app.view = View::NoteList;
        update(&mut app, Action::RequestDelete);
        let text = render(&app);
        assert!(text.contains("Delete note?"));
        assert!(text.contains("Groceries"));
    }
}
