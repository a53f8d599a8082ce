//! # TUI Adapter
//!
//! The ratatui-specific host. Handles terminal I/O, renders the current
//! screen, and translates keyboard and mouse events into core `Action`s.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Host Contract
//!
//! - **Start**: `App::on_start(config, None)`, a cold start.
//! - **Taps**: keys and left clicks go to the current screen, which answers
//!   with an `Action` for `update()`.
//! - **Back**: Esc/Backspace call `on_back_pressed()`; `false` ends the loop.
//! - **Configuration change**: a terminal resize snapshots the app, drops it
//!   and the TUI state, and recreates both from the snapshot.
//!
//! ## Redraw Strategy
//!
//! One input event per loop turn. After each event the change subscriptions
//! are drained and, if anything changed, the frame is redrawn before the
//! next event is read. Navigation is never batched behind pending input.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::notify::{Change, Region};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{Screen, ScreenProps};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::ui::TerminalRenderer;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic).
/// Rebuilt from scratch on every configuration change.
pub struct TuiState {
    /// Area of the last drawn frame.
    pub frame_area: Rect,
    subscriptions: Vec<Receiver<Change>>,
}

impl TuiState {
    /// Subscribe to both of the app's stores.
    pub fn attach(app: &mut App, frame_area: Rect) -> Self {
        Self {
            frame_area,
            subscriptions: vec![app.navigation.subscribe(), app.screen_state.subscribe()],
        }
    }

    /// Drain all pending change notifications. Returns the widest region
    /// affected, or `None` if nothing changed.
    pub fn drain_changes(&self) -> Option<Region> {
        let mut widest = None;
        for rx in &self.subscriptions {
            for change in rx.try_iter() {
                debug!("Change: {:?}", change);
                widest = match (widest, change.region()) {
                    (Some(Region::Screen), _) | (_, Region::Screen) => Some(Region::Screen),
                    _ => Some(Region::Content),
                };
            }
        }
        widest
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Route one input event. Returns the effect for the loop.
fn dispatch(app: &mut App, tui: &TuiState, event: &TuiEvent) -> Effect {
    let action = match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Back => Some(Action::Back),
        // Handled by the loop: it replaces the app.
        TuiEvent::Resize(..) => None,
        _ => {
            let props = ScreenProps {
                config: &app.config,
                state: app.screen_state.view(),
                status: &app.status_message,
            };
            Screen::new(app.current(), props, tui.frame_area).handle_event(event)
        }
    };
    match action {
        Some(action) => update(app, action),
        None => Effect::None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::on_start(config, None);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app));

    info!("Shutting down at {}", app.current());
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    let mut tui = TuiState::attach(app, Rect::default());
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            let mut renderer = TerminalRenderer::new(terminal, &app.config, &app.status_message);
            app.render(&mut renderer)?;
            tui.frame_area = renderer.drawn_area;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(IDLE_POLL) else {
            continue;
        };

        if let TuiEvent::Resize(cols, rows) = event {
            info!("Terminal resized to {}x{}", cols, rows);
            app.on_configuration_change();
            tui = TuiState::attach(app, Rect::new(0, 0, cols, rows));
            needs_redraw = true;
            continue;
        }

        if dispatch(app, &tui, &event) == Effect::Exit {
            return Ok(());
        }

        if let Some(region) = tui.drain_changes() {
            debug!("Redraw for {:?}", region);
            needs_redraw = true;
        }
        // Status line changes are not store changes.
        if matches!(event, TuiEvent::InputChar(_) | TuiEvent::MouseClick(..)) {
            needs_redraw = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::destination::Destination;
    use crate::core::registry::FAB_COUNT;
    use crate::test_support::test_app;

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_dispatch_routes_keys_through_current_screen() {
        let mut app = test_app();
        let tui = TuiState::attach(&mut app, area());

        assert_eq!(dispatch(&mut app, &tui, &TuiEvent::InputChar('p')), Effect::Render);
        assert_eq!(app.current(), Destination::Profile);

        // '+' means nothing on Profile.
        assert_eq!(dispatch(&mut app, &tui, &TuiEvent::InputChar('+')), Effect::None);
        assert_eq!(app.screen_state.get(FAB_COUNT), 0);

        assert_eq!(dispatch(&mut app, &tui, &TuiEvent::Submit), Effect::Render);
        assert_eq!(app.current(), Destination::Home);
    }

    #[test]
    fn test_back_at_root_and_quit_exit() {
        let mut app = test_app();
        let tui = TuiState::attach(&mut app, area());
        assert_eq!(dispatch(&mut app, &tui, &TuiEvent::Back), Effect::Exit);
        assert_eq!(dispatch(&mut app, &tui, &TuiEvent::Quit), Effect::Exit);
        assert_eq!(dispatch(&mut app, &tui, &TuiEvent::ForceQuit), Effect::Exit);
    }

    #[test]
    fn test_drain_reports_widest_region() {
        let mut app = test_app();
        let tui = TuiState::attach(&mut app, area());
        assert_eq!(tui.drain_changes(), None);

        dispatch(&mut app, &tui, &TuiEvent::InputChar('+'));
        assert_eq!(tui.drain_changes(), Some(Region::Content));

        dispatch(&mut app, &tui, &TuiEvent::InputChar('+'));
        dispatch(&mut app, &tui, &TuiEvent::InputChar('2'));
        assert_eq!(tui.drain_changes(), Some(Region::Screen));
        assert_eq!(tui.drain_changes(), None);
    }

    #[test]
    fn test_resize_recreates_app_and_resubscribes() {
        let mut app = test_app();
        let tui = TuiState::attach(&mut app, area());
        for _ in 0..5 {
            dispatch(&mut app, &tui, &TuiEvent::InputChar('+'));
        }
        dispatch(&mut app, &tui, &TuiEvent::InputChar('1'));

        app.on_configuration_change();
        let tui = TuiState::attach(&mut app, Rect::new(0, 0, 100, 30));

        assert_eq!(app.current(), Destination::Library);
        assert_eq!(app.screen_state.get(FAB_COUNT), 5);

        dispatch(&mut app, &tui, &TuiEvent::Back);
        assert_eq!(tui.drain_changes(), Some(Region::Screen));
        assert_eq!(app.current(), Destination::Home);
    }

    #[test]
    fn test_resize_event_is_not_dispatched() {
        let mut app = test_app();
        let tui = TuiState::attach(&mut app, area());
        assert_eq!(dispatch(&mut app, &tui, &TuiEvent::Resize(10, 10)), Effect::None);
    }
}
