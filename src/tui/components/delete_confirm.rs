//! # DeleteConfirm Component
//!
//! Centered overlay asking whether to delete the pending record. Drawn on
//! top of the list the delete was requested from.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::model::RecordKind;
use crate::tui::component::Component;

pub struct DeleteConfirm<'a> {
    pub kind: RecordKind,
    /// Title or content of the record, empty if it is no longer in memory.
    pub label: &'a str,
    /// The delete command has been issued and is awaiting its result.
    pub in_flight: bool,
}

impl Component for DeleteConfirm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 40, area);
        frame.render_widget(Clear, overlay);

        let help = if self.in_flight {
            " Deleting... "
        } else {
            " y/Enter Delete  n/Esc Cancel "
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Delete {}? ", self.kind))
            .title_bottom(Line::from(help).centered())
            .padding(Padding::new(1, 1, 1, 0));

        let label = if self.label.is_empty() {
            "(untitled)"
        } else {
            self.label
        };
        let text = vec![
            Line::from(format!("This {} will be removed permanently:", self.kind)),
            Line::from(""),
            Line::from(Span::styled(
                label,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(confirm: &mut DeleteConfirm<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| confirm.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_names_kind_and_record() {
        let text = render(&mut DeleteConfirm {
            kind: RecordKind::Todo,
            label: "buy milk",
            in_flight: false,
        });
        assert!(text.contains("Delete todo?"));
        assert!(text.contains("buy milk"));
        assert!(text.contains("y/Enter Delete"));
    }

    #[test]
    fn test_in_flight_hides_prompt() {
        let text = render(&mut DeleteConfirm {
            kind: RecordKind::Note,
            label: "",
            in_flight: true,
        });
        assert!(text.contains("Deleting..."));
        assert!(text.contains("(untitled)"));
        assert!(!text.contains("n/Esc Cancel"));
    }

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 30, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.x, 20);
        assert!(inner.bottom() <= outer.bottom());
    }
}
