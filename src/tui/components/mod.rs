//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state. This keeps dependencies explicit and lets
//! each component be tested alone against a `TestBackend`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! HelpBar::new(app.view, filtering).render(frame, area);
//!
//! // Bad: hidden dependency on App
//! HelpBar::render(frame, area);
//! ```
//!
//! `RecordList` is the one stateful component: it borrows a `ListState` from
//! `TuiState` for the duration of a frame.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status line)
//! ├── help_bar.rs        (bottom key hints)
//! ├── dashboard.rs       (counts / empty state)
//! ├── record_list.rs     (note and todo lists with filter line)
//! ├── text_input.rs      (bordered single/multi-line field)
//! ├── editor.rs          (note editor: title, folder, content)
//! └── delete_confirm.rs  (centered confirmation overlay)
//! ```

mod dashboard;
mod delete_confirm;
mod editor;
mod help_bar;
mod record_list;
mod text_input;
mod title_bar;

pub use dashboard::Dashboard;
pub use delete_confirm::DeleteConfirm;
pub use editor::Editor;
pub use help_bar::HelpBar;
pub use record_list::RecordList;
pub use text_input::TextInput;
pub use title_bar::TitleBar;
