use ratatui::layout::Rect;
use ratatui::{DefaultTerminal, Frame};

use crate::core::config::ResolvedConfig;
use crate::core::destination::Destination;
use crate::core::lifecycle::Renderer;
use crate::core::registry::ScreenStateView;
use crate::tui::component::Component;
use crate::tui::components::{Screen, ScreenProps};

pub fn draw_ui(frame: &mut Frame, destination: Destination, props: ScreenProps<'_>) {
    let area = frame.area();
    Screen::new(destination, props, area).render(frame, area);
}

/// Draws into the real terminal on behalf of `App::render`.
pub struct TerminalRenderer<'a> {
    terminal: &'a mut DefaultTerminal,
    config: &'a ResolvedConfig,
    status: &'a str,
    /// Area of the last completed frame, kept for click hit-testing.
    pub drawn_area: Rect,
}

impl<'a> TerminalRenderer<'a> {
    pub fn new(terminal: &'a mut DefaultTerminal, config: &'a ResolvedConfig, status: &'a str) -> Self {
        Self {
            terminal,
            config,
            status,
            drawn_area: Rect::default(),
        }
    }
}

impl Renderer for TerminalRenderer<'_> {
    type Error = std::io::Error;

    fn render(
        &mut self,
        destination: Destination,
        state: ScreenStateView<'_>,
    ) -> Result<(), Self::Error> {
        let props = ScreenProps {
            config: self.config,
            state,
            status: self.status,
        };
        let completed = self.terminal.draw(|f| draw_ui(f, destination, props))?;
        self.drawn_area = completed.area;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{FAB_COUNT, ScreenStateRegistry};
    use crate::test_support::test_config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(destination: Destination, count: i64) -> String {
        let config = test_config();
        let mut registry = ScreenStateRegistry::new();
        registry.set(FAB_COUNT, count);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                draw_ui(
                    f,
                    destination,
                    ScreenProps {
                        config: &config,
                        state: registry.view(),
                        status: "",
                    },
                )
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_home_shows_counter() {
        let text = draw(Destination::Home, 12);
        assert!(text.contains("test shell"));
        assert!(text.contains("floating button 12 times"));
    }

    #[test]
    fn test_draw_ui_profile_uses_config() {
        let text = draw(Destination::Profile, 0);
        assert!(text.contains("Name: Test User"));
        assert!(text.contains("Email: test@example.com"));
        assert!(!text.contains("floating button"));
    }

    #[test]
    fn test_draw_ui_section() {
        let text = draw(Destination::Settings, 0);
        assert!(text.contains("Settings"));
        assert!(text.contains("Configuration options..."));
    }

    #[test]
    fn test_draw_ui_tiny_terminal_does_not_panic() {
        let config = test_config();
        let registry = ScreenStateRegistry::new();
        for dest in Destination::ALL {
            let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
            terminal
                .draw(|f| {
                    draw_ui(
                        f,
                        dest,
                        ScreenProps {
                            config: &config,
                            state: registry.view(),
                            status: "",
                        },
                    )
                })
                .unwrap();
        }
    }
}
