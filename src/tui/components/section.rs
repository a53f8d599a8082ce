//! # Section Screen
//!
//! Library, Music, Movies and Settings share one layout: a heading, a line
//! of placeholder content, a Back button that pops the stack and a Home
//! button that pushes Home.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::destination::Destination;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button::Button;
use crate::tui::components::hint_line;
use crate::tui::event::TuiEvent;

const BACK_BUTTON: &str = "Back";
const HOME_BUTTON: &str = "Home";

pub struct SectionScreen {
    pub destination: Destination,
    pub area: Rect,
}

struct SectionLayout {
    heading: Rect,
    body: Rect,
    back_button: Rect,
    home_button: Rect,
    hint: Rect,
}

impl SectionLayout {
    fn new(area: Rect) -> Self {
        let [main, hint] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let padded = main.inner(Margin::new(2, 1));
        let [heading, _, body, _, button_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(padded);
        let back_button = Button::area(BACK_BUTTON, button_row.x, button_row.y, button_row);
        let home_button = Button::area(
            HOME_BUTTON,
            back_button.right() + 2,
            button_row.y,
            button_row,
        );
        Self {
            heading,
            body,
            back_button,
            home_button,
            hint,
        }
    }
}

impl SectionScreen {
    pub fn new(destination: Destination, area: Rect) -> Self {
        Self { destination, area }
    }

    fn body(&self) -> &'static str {
        match self.destination {
            Destination::Library => "Library contents...",
            Destination::Music => "Songs and playlists...",
            Destination::Movies => "Movie listings...",
            Destination::Settings => "Configuration options...",
            Destination::Home | Destination::Profile => "",
        }
    }
}

impl Component for SectionScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = SectionLayout::new(area);
        frame.render_widget(
            Span::styled(
                self.destination.title(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            layout.heading,
        );
        frame.render_widget(
            Paragraph::new(self.body()).style(Style::default().fg(Color::Gray)),
            layout.body,
        );
        Button::new(BACK_BUTTON).render(frame, layout.back_button);
        Button::new(HOME_BUTTON)
            .accent(Color::Green)
            .render(frame, layout.home_button);
        frame.render_widget(
            hint_line("Enter/b back · h home · Esc back · q quit"),
            layout.hint,
        );
    }
}

impl EventHandler for SectionScreen {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Submit | TuiEvent::InputChar('b') => Some(Action::Back),
            TuiEvent::InputChar('h') => Some(Action::Navigate(Destination::Home)),
            TuiEvent::MouseClick(column, row) => {
                let layout = SectionLayout::new(self.area);
                if Button::hit(layout.back_button, *column, *row) {
                    Some(Action::Back)
                } else if Button::hit(layout.home_button, *column, *row) {
                    Some(Action::Navigate(Destination::Home))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
