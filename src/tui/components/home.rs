//! # Home Screen
//!
//! The scaffold: top bar, main content with the floating-button counter and
//! the "Go to Music" button, the floating `+` button in the bottom-right
//! corner of the content, and the bottom bar.
//!
//! ```text
//! ┌ ≡ │ menu :b                         │ s Search │ p Profile ┐
//! │ Main content                                                │
//! │                                                             │
//! │ You have pressed the floating button 3 times                │
//! │ ┌─────────────┐                                             │
//! │ │ Go to Music │                                     ┌─────┐ │
//! │ └─────────────┘                                     │  +  │ │
//! │                                                     └─────┘ │
//! │ 1 Library    2 Music    3 Movies    4 Settings              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The counter value comes from the screen state registry as a prop; this
//! component never stores it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::destination::Destination;
use crate::core::registry::FAB_COUNT;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::bottom_bar::BottomBar;
use crate::tui::components::button::Button;
use crate::tui::components::top_bar::TopBar;
use crate::tui::event::TuiEvent;

const MUSIC_BUTTON: &str = "Go to Music";
const FAB_LABEL: &str = "+";
const FAB_WIDTH: u16 = 7;
const FAB_HEIGHT: u16 = 3;

pub struct HomeScreen<'a> {
    pub title: &'a str,
    pub fab_count: i64,
    pub status: &'a str,
    /// Frame area the screen was (or will be) drawn in. Used for hit-testing.
    pub area: Rect,
}

/// Every clickable and drawable region of Home, derived from the frame area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub top_bar: Rect,
    pub heading: Rect,
    pub counter: Rect,
    pub music_button: Rect,
    pub status: Rect,
    pub fab: Rect,
    pub bottom_bar: Rect,
}

impl HomeLayout {
    pub fn new(area: Rect) -> Self {
        let [top_bar, content, bottom_bar] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(area);

        let padded = content.inner(ratatui::layout::Margin::new(2, 1));
        let [heading, _, counter, _, button_row, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(padded);
        let music_button = Button::area(MUSIC_BUTTON, button_row.x, button_row.y, button_row);

        let fab = Rect::new(
            padded.right().saturating_sub(FAB_WIDTH),
            padded.bottom().saturating_sub(FAB_HEIGHT),
            FAB_WIDTH,
            FAB_HEIGHT,
        )
        .intersection(padded);

        Self {
            top_bar,
            heading,
            counter,
            music_button,
            status,
            fab,
            bottom_bar,
        }
    }
}

impl<'a> HomeScreen<'a> {
    pub fn new(title: &'a str, fab_count: i64, status: &'a str, area: Rect) -> Self {
        Self {
            title,
            fab_count,
            status,
            area,
        }
    }

    fn click(&self, column: u16, row: u16) -> Option<Action> {
        let layout = HomeLayout::new(self.area);
        let pos = Position::new(column, row);
        // The floating button sits on top of the content, so it wins.
        if layout.fab.contains(pos) {
            Some(Action::Increment(FAB_COUNT))
        } else if layout.music_button.contains(pos) {
            Some(Action::Navigate(Destination::Music))
        } else if layout.top_bar.contains(pos) {
            TopBar::hit(layout.top_bar, column, row)
        } else if layout.bottom_bar.contains(pos) {
            BottomBar::hit(layout.bottom_bar, column, row).map(Action::Navigate)
        } else {
            None
        }
    }
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = HomeLayout::new(area);

        TopBar::new(self.title).render(frame, layout.top_bar);

        frame.render_widget(
            Span::styled(
                "Main content",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            layout.heading,
        );
        frame.render_widget(
            Paragraph::new(format!(
                "You have pressed the floating button {} times",
                self.fab_count
            )),
            layout.counter,
        );
        Button::new(MUSIC_BUTTON).render(frame, layout.music_button);

        if !self.status.is_empty() {
            frame.render_widget(
                Line::from(Span::styled(self.status, Style::default().fg(Color::Yellow))),
                layout.status,
            );
        }

        Button::new(FAB_LABEL)
            .accent(Color::Magenta)
            .render(frame, layout.fab);

        BottomBar.render(frame, layout.bottom_bar);
    }
}

impl EventHandler for HomeScreen<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Submit => Some(Action::Navigate(Destination::Music)),
            TuiEvent::InputChar('+') => Some(Action::Increment(FAB_COUNT)),
            TuiEvent::InputChar('m') => Some(Action::Menu),
            TuiEvent::InputChar('s') | TuiEvent::InputChar('/') => {
                Some(Action::Navigate(Destination::Library))
            }
            TuiEvent::InputChar('p') => Some(Action::Navigate(Destination::Profile)),
            TuiEvent::InputChar(c) => BottomBar::for_key(*c).map(Action::Navigate),
            TuiEvent::MouseClick(column, row) => self.click(*column, *row),
            _ => None,
        }
    }
}
