//! # Button Component
//!
//! A bordered, centered label. Screens lay buttons out with `Button::area`
//! so the same rectangle is used for drawing and for click hit-testing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct Button<'a> {
    pub label: &'a str,
    pub accent: Color,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            accent: Color::Cyan,
        }
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Width needed for the label plus borders and one space of padding.
    pub fn width(label: &str) -> u16 {
        label.chars().count() as u16 + 4
    }

    /// The button's rectangle at `(x, y)`, clipped to `bounds`.
    pub fn area(label: &str, x: u16, y: u16, bounds: Rect) -> Rect {
        Rect::new(x, y, Self::width(label), 3).intersection(bounds)
    }

    pub fn hit(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}

impl Component for Button<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(self.accent).add_modifier(Modifier::BOLD);
        let button = Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(Style::default().fg(self.accent)));
        frame.render_widget(button, area);
    }
}
