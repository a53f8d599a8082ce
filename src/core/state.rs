//! # Application State
//!
//! Core business state for the shell. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigation: NavigationStore       // back stack, current screen
//! ├── screen_state: ScreenStateRegistry // counters that survive a resize
//! ├── config: ResolvedConfig            // title, launch mode, profile
//! └── status_message: String            // status line text
//! ```
//!
//! Navigation and screen state are independent: nothing in the back stack
//! owns a counter, and the registry never looks at the stack.
//!
//! State changes only happen through `update(state, action)` in action.rs
//! and the lifecycle hooks in lifecycle.rs.

use crate::core::config::ResolvedConfig;
use crate::core::destination::Destination;
use crate::core::navigation::{NavigationStore, Navigator};
use crate::core::registry::ScreenStateRegistry;

pub struct App {
    pub navigation: NavigationStore,
    pub screen_state: ScreenStateRegistry,
    pub config: ResolvedConfig,
    pub status_message: String,
}

impl App {
    /// A freshly started app: stack `[Home]`, all counters at 0.
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            navigation: NavigationStore::new(config.launch_mode),
            screen_state: ScreenStateRegistry::new(),
            config,
            status_message: String::new(),
        }
    }

    pub fn current(&self) -> Destination {
        self.navigation.current()
    }
}
