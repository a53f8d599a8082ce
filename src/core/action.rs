//! # Actions
//!
//! Everything a screen can ask for becomes an `Action`.
//! User taps the search icon? That's `Action::Navigate(Destination::Library)`.
//! User taps the floating button? That's `Action::Increment(FAB_COUNT)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the host what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  Effect (None | Render | Exit)
//! ```

use log::{debug, info};

use crate::core::destination::Destination;
use crate::core::navigation::Navigator;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Destination),
    /// The back button, either on screen or the host's.
    Back,
    /// Bump a screen-state counter by one.
    Increment(&'static str),
    /// Top-bar menu icon. It has no destination.
    Menu,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Render,
    Exit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(dest) => {
            if app.navigation.navigate(dest) {
                app.status_message.clear();
                Effect::Render
            } else {
                Effect::None
            }
        }
        Action::Back => {
            if app.on_back_pressed() {
                app.status_message.clear();
                Effect::Render
            } else {
                info!("Back pressed at root, exiting");
                Effect::Exit
            }
        }
        Action::Increment(key) => {
            app.screen_state.increment(key);
            Effect::Render
        }
        Action::Menu => {
            app.status_message = String::from("Menu has no entries yet");
            Effect::Render
        }
        Action::Quit => Effect::Exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::LaunchMode;
    use crate::core::registry::FAB_COUNT;
    use crate::test_support::{test_app, test_app_with_mode};

    #[test]
    fn test_navigate_renders() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Navigate(Destination::Music)), Effect::Render);
        assert_eq!(app.current(), Destination::Music);
    }

    #[test]
    fn test_back_at_root_exits() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Back), Effect::Exit);
        assert_eq!(app.navigation.back_stack(), &[Destination::Home]);
    }

    #[test]
    fn test_back_above_root_renders() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Destination::Profile));
        assert_eq!(update(&mut app, Action::Back), Effect::Render);
        assert_eq!(app.current(), Destination::Home);
    }

    #[test]
    fn test_increment_bumps_counter() {
        let mut app = test_app();
        for _ in 0..3 {
            assert_eq!(update(&mut app, Action::Increment(FAB_COUNT)), Effect::Render);
        }
        assert_eq!(app.screen_state.get(FAB_COUNT), 3);
    }

    #[test]
    fn test_single_top_repeat_needs_no_render() {
        let mut app = test_app_with_mode(LaunchMode::SingleTop);
        assert_eq!(update(&mut app, Action::Navigate(Destination::Home)), Effect::None);
    }

    #[test]
    fn test_menu_sets_status_and_stays_put() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Menu), Effect::Render);
        assert!(!app.status_message.is_empty());
        assert_eq!(app.current(), Destination::Home);

        // Any navigation clears the status line.
        update(&mut app, Action::Navigate(Destination::Library));
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_quit_exits_without_touching_stack() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Destination::Movies));
        assert_eq!(update(&mut app, Action::Quit), Effect::Exit);
        assert_eq!(app.current(), Destination::Movies);
    }
}
