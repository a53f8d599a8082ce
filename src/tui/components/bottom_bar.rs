//! # BottomBar Component
//!
//! Four evenly spaced section shortcuts on Home.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::destination::Destination;
use crate::tui::component::Component;

/// Bottom bar entries in display order, with their number key.
pub const ENTRIES: [(char, Destination); 4] = [
    ('1', Destination::Library),
    ('2', Destination::Music),
    ('3', Destination::Movies),
    ('4', Destination::Settings),
];

pub struct BottomBar;

impl BottomBar {
    pub fn slots(area: Rect) -> [Rect; 4] {
        let inner = Block::bordered().inner(area);
        Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(inner)
    }

    pub fn hit(area: Rect, column: u16, row: u16) -> Option<Destination> {
        let pos = Position::new(column, row);
        Self::slots(area)
            .into_iter()
            .zip(ENTRIES)
            .find(|(slot, _)| slot.contains(pos))
            .map(|(_, (_, dest))| dest)
    }

    pub fn for_key(c: char) -> Option<Destination> {
        ENTRIES.iter().find(|(key, _)| *key == c).map(|(_, dest)| *dest)
    }
}

impl Component for BottomBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Block::bordered().border_style(Style::default().fg(Color::DarkGray)),
            area,
        );
        for (slot, (key, dest)) in Self::slots(area).into_iter().zip(ENTRIES) {
            let label = Paragraph::new(format!("{} {}", key, dest.title()))
                .alignment(Alignment::Center);
            frame.render_widget(label, slot);
        }
    }
}
