//! # Dashboard Component
//!
//! Landing view: a time-of-day greeting with today's date, then counts of
//! notes and active/done todos, or a short getting-started message while
//! both collections are empty.

use chrono::{DateTime, Local, Timelike};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::state::Stats;
use crate::tui::component::Component;

pub struct Dashboard {
    pub stats: Stats,
    /// Drives the greeting and the date line.
    pub now: DateTime<Local>,
}

impl Dashboard {
    pub fn new(stats: Stats, now: DateTime<Local>) -> Self {
        Self { stats, now }
    }

    fn header(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(
                    format!("Good {}", time_of_day(self.now.hour())),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("    {}", self.now.format("%A, %b %d")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
        ]
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = self.header();
        if self.stats.is_empty() {
            lines.extend([
                Line::from("Nothing here yet."),
                Line::from(""),
                Line::from(Span::styled(
                    "Press n for a new note or t for a new todo.",
                    Style::default().fg(Color::DarkGray),
                )),
            ]);
            return lines;
        }

        let count = |value: usize, label: &str, color: Color| {
            Line::from(vec![
                Span::styled(
                    format!("{value:>4}"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {label}")),
            ])
        };
        lines.extend([
            count(self.stats.notes, "notes", Color::Cyan),
            count(self.stats.active_todos, "active todos", Color::Yellow),
            count(self.stats.done_todos, "done todos", Color::Green),
            Line::from(""),
            Line::from(Span::styled(
                "Press Tab to switch lists",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        lines
    }
}

fn time_of_day(hour: u32) -> &'static str {
    match hour {
        0..12 => "morning",
        12..18 => "afternoon",
        _ => "evening",
    }
}

impl Component for Dashboard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Dashboard ")
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(self.lines())
            .alignment(Alignment::Left)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
