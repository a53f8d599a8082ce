//! # TopBar Component
//!
//! Home's app bar: menu icon on the left, title, then the search and
//! profile icons on the right.
//!
//! ```text
//! ┌────┬──────────────────────────────┬──────────┬───────────┐
//! │ ≡  │ menu :b                      │ s Search │ p Profile │
//! └────┴──────────────────────────────┴──────────┴───────────┘
//! ```
//!
//! Stateless: it receives the title as a prop. `TopBar::areas` is shared by
//! rendering and click hit-testing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::core::action::Action;
use crate::core::destination::Destination;
use crate::tui::component::Component;

const MENU_LABEL: &str = " ≡ ";
const SEARCH_LABEL: &str = " s Search ";
const PROFILE_LABEL: &str = " p Profile ";

pub struct TopBar<'a> {
    pub title: &'a str,
}

pub struct TopBarAreas {
    pub menu: Rect,
    pub title: Rect,
    pub search: Rect,
    pub profile: Rect,
}

impl<'a> TopBar<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn areas(area: Rect) -> TopBarAreas {
        let [menu, title, search, profile] = Layout::horizontal([
            Constraint::Length(MENU_LABEL.chars().count() as u16 + 1),
            Constraint::Min(0),
            Constraint::Length(SEARCH_LABEL.len() as u16),
            Constraint::Length(PROFILE_LABEL.len() as u16),
        ])
        .areas(area);
        TopBarAreas {
            menu,
            title,
            search,
            profile,
        }
    }

    /// Which icon, if any, a click at (column, row) lands on.
    pub fn hit(area: Rect, column: u16, row: u16) -> Option<Action> {
        let areas = Self::areas(area);
        let pos = Position::new(column, row);
        if areas.menu.contains(pos) {
            Some(Action::Menu)
        } else if areas.search.contains(pos) {
            Some(Action::Navigate(Destination::Library))
        } else if areas.profile.contains(pos) {
            Some(Action::Navigate(Destination::Profile))
        } else {
            None
        }
    }
}

impl Component for TopBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().bg(Color::Blue).fg(Color::White);
        frame.render_widget(Block::default().style(bar_style), area);

        let areas = Self::areas(area);
        let icon_style = bar_style.add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(MENU_LABEL, icon_style), areas.menu);
        frame.render_widget(Span::styled(self.title, bar_style), areas.title);
        frame.render_widget(Span::styled(SEARCH_LABEL, icon_style), areas.search);
        frame.render_widget(Span::styled(PROFILE_LABEL, icon_style), areas.profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn bar() -> Rect {
        Rect::new(0, 0, 60, 1)
    }

    #[test]
    fn test_icons_map_to_actions() {
        let areas = TopBar::areas(bar());
        assert_eq!(TopBar::hit(bar(), areas.menu.x, 0), Some(Action::Menu));
        assert_eq!(
            TopBar::hit(bar(), areas.search.x + 1, 0),
            Some(Action::Navigate(Destination::Library))
        );
        assert_eq!(
            TopBar::hit(bar(), areas.profile.right() - 1, 0),
            Some(Action::Navigate(Destination::Profile))
        );
    }

    #[test]
    fn test_title_and_other_rows_do_nothing() {
        let areas = TopBar::areas(bar());
        assert_eq!(TopBar::hit(bar(), areas.title.x + 2, 0), None);
        assert_eq!(TopBar::hit(bar(), areas.search.x, 1), None);
    }

    #[test]
    fn test_renders_title_and_icons() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|f| TopBar::new("menu :b").render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("menu :b"));
        assert!(text.contains("Search"));
        assert!(text.contains("Profile"));
    }
}
