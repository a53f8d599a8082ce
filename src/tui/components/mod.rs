//! # TUI Components
//!
//! One component per screen, plus the pieces Home is built from.
//!
//! ## Component Architecture
//!
//! Every component is stateless: it is created per frame (or per event) from
//! props and thrown away. Screen state that has to survive lives in the core
//! registry, never in a component.
//!
//! Screens implement both `Component` (drawing) and `EventHandler` with
//! `Event = Action`. A screen can only *ask* for a navigation, a back, or a
//! counter increment; the event loop feeds that request to `update()`.
//!
//! Each component derives its layout from the frame area with a pure
//! function, so the rectangles used to draw a button are the same ones used
//! to hit-test a click on it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file, Screen dispatch)
//! ├── button.rs      (bordered label)
//! ├── top_bar.rs     (menu, title, search, profile)
//! ├── bottom_bar.rs  (four section shortcuts)
//! ├── home.rs        (scaffold + floating button counter)
//! ├── profile.rs     (profile fields + back)
//! └── section.rs     (library / music / movies / settings)
//! ```

pub mod bottom_bar;
pub mod button;
pub mod home;
pub mod profile;
pub mod section;
pub mod top_bar;

pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use section::SectionScreen;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::destination::Destination;
use crate::core::registry::{FAB_COUNT, ScreenStateView};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Everything a screen may read.
#[derive(Clone, Copy)]
pub struct ScreenProps<'a> {
    pub config: &'a ResolvedConfig,
    pub state: ScreenStateView<'a>,
    pub status: &'a str,
}

/// The component for the current destination.
pub enum Screen<'a> {
    Home(HomeScreen<'a>),
    Profile(ProfileScreen<'a>),
    Section(SectionScreen),
}

impl<'a> Screen<'a> {
    pub fn new(destination: Destination, props: ScreenProps<'a>, area: Rect) -> Self {
        match destination {
            Destination::Home => Screen::Home(HomeScreen::new(
                &props.config.title,
                props.state.get(FAB_COUNT),
                props.status,
                area,
            )),
            Destination::Profile => Screen::Profile(ProfileScreen::new(
                &props.config.profile_name,
                &props.config.profile_email,
                area,
            )),
            Destination::Library
            | Destination::Music
            | Destination::Movies
            | Destination::Settings => Screen::Section(SectionScreen::new(destination, area)),
        }
    }
}

impl Component for Screen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            Screen::Home(screen) => screen.render(frame, area),
            Screen::Profile(screen) => screen.render(frame, area),
            Screen::Section(screen) => screen.render(frame, area),
        }
    }
}

impl EventHandler for Screen<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match self {
            Screen::Home(screen) => screen.handle_event(event),
            Screen::Profile(screen) => screen.handle_event(event),
            Screen::Section(screen) => screen.handle_event(event),
        }
    }
}

/// Dim one-line key hint shown at the bottom of secondary screens.
pub fn hint_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::ScreenStateRegistry;
    use crate::test_support::test_config;

    #[test]
    fn test_screen_for_each_destination() {
        let config = test_config();
        let mut registry = ScreenStateRegistry::new();
        registry.set(FAB_COUNT, 2);
        let props = ScreenProps {
            config: &config,
            state: registry.view(),
            status: "",
        };
        let area = Rect::new(0, 0, 80, 24);

        for dest in Destination::ALL {
            let screen = Screen::new(dest, props, area);
            match (dest, screen) {
                (Destination::Home, Screen::Home(home)) => {
                    assert_eq!(home.fab_count, 2);
                    assert_eq!(home.title, "test shell");
                }
                (Destination::Profile, Screen::Profile(profile)) => {
                    assert_eq!(profile.name, "Test User");
                }
                (_, Screen::Section(section)) => assert_eq!(section.destination, dest),
                (dest, _) => panic!("wrong screen for {dest}"),
            }
        }
    }
}
