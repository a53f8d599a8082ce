//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::convert::Infallible;

use crate::core::config::ResolvedConfig;
use crate::core::destination::Destination;
use crate::core::lifecycle::Renderer;
use crate::core::navigation::LaunchMode;
use crate::core::registry::{FAB_COUNT, ScreenStateView};
use crate::core::state::App;

/// Config with fixed values, independent of the environment.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        title: "test shell".to_string(),
        launch_mode: LaunchMode::Standard,
        log_level: log::LevelFilter::Off,
        log_file: std::env::temp_dir().join("menu-shell-test.log"),
        profile_name: "Test User".to_string(),
        profile_email: "test@example.com".to_string(),
    }
}

/// Creates a cold-started test App.
pub fn test_app() -> App {
    App::new(test_config())
}

pub fn test_app_with_mode(launch_mode: LaunchMode) -> App {
    App::new(ResolvedConfig {
        launch_mode,
        ..test_config()
    })
}

/// Records each render call as (destination, fabCount).
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<(Destination, i64)>,
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn render(
        &mut self,
        destination: Destination,
        state: ScreenStateView<'_>,
    ) -> Result<(), Self::Error> {
        self.frames.push((destination, state.get(FAB_COUNT)));
        Ok(())
    }
}
