//! # Editor Component
//!
//! The `NoteEdit` view: title and folder side by side above the content
//! area. Only the focused field shows the cursor.
//!
//! ```text
//! ╭ Title ─────────────────────╮╭ Folder ──────╮
//! │ Groceries                  ││ general      │
//! ╰────────────────────────────╯╰──────────────╯
//! ╭ Content ────────────────────────────────────╮
//! │ eggs                                        │
//! │ milk                                        │
//! ╰─────────────────────────────────────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{EditorField, NoteEditor};
use crate::tui::component::Component;
use crate::tui::components::TextInput;

pub struct Editor<'a> {
    pub editor: &'a NoteEditor,
}

impl<'a> Editor<'a> {
    pub fn new(editor: &'a NoteEditor) -> Self {
        Self { editor }
    }
}

impl Component for Editor<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header, content_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);
        let [title_area, folder_area] =
            Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
                .areas(header);

        let focus = self.editor.focus;
        let title_label = if self.editor.is_new() {
            "New note"
        } else {
            "Title"
        };

        TextInput::new(title_label, &self.editor.title, focus == EditorField::Title)
            .placeholder("Untitled")
            .render(frame, title_area);
        TextInput::new("Folder", &self.editor.folder, focus == EditorField::Folder)
            .render(frame, folder_area);
        TextInput::new("Content", &self.editor.content, focus == EditorField::Content)
            .render(frame, content_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_note;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(editor: &NoteEditor) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| Editor::new(editor).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_all_three_fields() {
        let mut note = test_note("n1", "Groceries");
        note.content = "eggs\nmilk".to_string();
        note.folder = "home".to_string();
        let text = render(&NoteEditor::from_note(&note));

        assert!(text.contains("Groceries"));
        assert!(text.contains("home"));
        assert!(text.contains("eggs"));
        assert!(text.contains("milk"));
        assert!(!text.contains("New note"));
    }

    #[test]
    fn test_blank_editor_labels_new_note() {
        let text = render(&NoteEditor::blank("general"));
        assert!(text.contains("New note"));
        assert!(text.contains("Untitled"));
        assert!(text.contains("general"));
    }
}
