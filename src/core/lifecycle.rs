//! # Host Lifecycle
//!
//! The contract between the shell core and whatever hosts it (the terminal,
//! in this crate). The host drives four hooks and supplies one renderer:
//!
//! ```text
//! host                          core
//! ────                          ────
//! start ──────────────────────► App::on_start(config, None)
//! resize (config change) ─────► app.on_configuration_change()
//!                                 ├─ on_save_instance_state() → bundle
//!                                 └─ *self = App::on_start(config, Some(bundle))
//! back key ───────────────────► app.on_back_pressed() → false = exit
//! draw ───────────────────────► app.render(&mut renderer)
//! ```
//!
//! The bundle lives only in memory for the length of one configuration
//! change. A cold start never has one, which is what resets screen state
//! when the process itself restarts.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::config::ResolvedConfig;
use crate::core::destination::Destination;
use crate::core::navigation::{NavError, NavigationStore, Navigator};
use crate::core::registry::{ScreenStateView, SnapshotError};
use crate::core::state::App;

/// What the host keeps across a configuration change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedInstanceState {
    /// Route names, root first.
    #[serde(default)]
    pub back_stack: Vec<String>,
    /// Screen state registry blob.
    #[serde(default)]
    pub screen_state: Option<String>,
}

impl SavedInstanceState {
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(bundle: &str) -> Result<Self, SnapshotError> {
        if bundle.trim().is_empty() {
            return Err(SnapshotError::Empty);
        }
        Ok(serde_json::from_str(bundle)?)
    }

    /// Parse the saved routes and rebuild a store from them.
    fn navigation(&self, config: &ResolvedConfig) -> Result<NavigationStore, SnapshotError> {
        let stack = self
            .back_stack
            .iter()
            .map(|route| route.parse::<Destination>())
            .collect::<Result<Vec<_>, NavError>>()?;
        Ok(NavigationStore::from_back_stack(stack, config.launch_mode)?)
    }
}

/// Draws the current destination. The core decides what to show; the
/// renderer decides how.
pub trait Renderer {
    type Error;

    fn render(
        &mut self,
        destination: Destination,
        state: ScreenStateView<'_>,
    ) -> Result<(), Self::Error>;
}

impl App {
    /// Create the app. `saved` is `None` on a cold start, or the bundle from
    /// `on_save_instance_state` when recreating after a configuration change.
    pub fn on_start(config: ResolvedConfig, saved: Option<&str>) -> Self {
        let mut app = App::new(config);
        let Some(bundle) = saved else {
            info!("Cold start at {}", app.current());
            return app;
        };

        let saved = match SavedInstanceState::decode(bundle) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Discarding saved instance state: {e}");
                return app;
            }
        };

        match saved.navigation(&app.config) {
            Ok(navigation) => app.navigation = navigation,
            Err(e) => warn!("Discarding saved back stack: {e}"),
        }
        app.screen_state.restore_blob(saved.screen_state.as_deref());
        info!(
            "Restored at {} (depth {})",
            app.current(),
            app.navigation.depth()
        );
        app
    }

    pub fn on_save_instance_state(&self) -> String {
        SavedInstanceState {
            back_stack: self
                .navigation
                .back_stack()
                .iter()
                .map(|d| d.route().to_string())
                .collect(),
            screen_state: Some(self.screen_state.snapshot().to_blob()),
        }
        .encode()
    }

    /// Tear this instance down and recreate it in place from its own
    /// snapshot. Subscriptions on the old instance end here; subscribe again
    /// afterwards.
    pub fn on_configuration_change(&mut self) {
        let bundle = self.on_save_instance_state();
        info!("Configuration change: recreating");
        *self = App::on_start(self.config.clone(), Some(&bundle));
    }

    /// Returns `false` when the back stack is at its root and the host
    /// should exit.
    pub fn on_back_pressed(&mut self) -> bool {
        self.navigation.pop()
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.render(self.current(), self.screen_state.view())
    }
}
