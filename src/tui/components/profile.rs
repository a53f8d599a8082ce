//! # Profile Screen
//!
//! Name and email from config, and a Back button that pops the stack.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::core::destination::Destination;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button::Button;
use crate::tui::components::hint_line;
use crate::tui::event::TuiEvent;

const BACK_BUTTON: &str = "Back";

pub struct ProfileScreen<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub area: Rect,
}

struct ProfileLayout {
    heading: Rect,
    name: Rect,
    email: Rect,
    back_button: Rect,
    hint: Rect,
}

impl ProfileLayout {
    fn new(area: Rect) -> Self {
        let [body, hint] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let padded = body.inner(Margin::new(2, 1));
        let [heading, _, name, email, _, button_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(padded);
        Self {
            heading,
            name,
            email,
            back_button: Button::area(BACK_BUTTON, button_row.x, button_row.y, button_row),
            hint,
        }
    }
}

impl<'a> ProfileScreen<'a> {
    pub fn new(name: &'a str, email: &'a str, area: Rect) -> Self {
        Self { name, email, area }
    }
}

impl Component for ProfileScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = ProfileLayout::new(area);
        frame.render_widget(
            Span::styled(
                Destination::Profile.title(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            layout.heading,
        );
        frame.render_widget(Paragraph::new(format!("Name: {}", self.name)), layout.name);
        frame.render_widget(Paragraph::new(format!("Email: {}", self.email)), layout.email);
        Button::new(BACK_BUTTON).render(frame, layout.back_button);
        frame.render_widget(hint_line("Enter/b back · Esc back · q quit"), layout.hint);
    }
}

impl EventHandler for ProfileScreen<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Submit | TuiEvent::InputChar('b') => Some(Action::Back),
            TuiEvent::MouseClick(column, row) => {
                let layout = ProfileLayout::new(self.area);
                Button::hit(layout.back_button, *column, *row).then_some(Action::Back)
            }
            _ => None,
        }
    }
}
