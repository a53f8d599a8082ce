use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a rectangle of the frame.
///
/// Screens and bars are built from props each frame, so `render` may
/// recompute layout freely. It takes `&mut self` to match ratatui's
/// `StatefulWidget` shape.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw terminal input into a request the caller understands.
///
/// Screens use `Event = Action`: a key or click becomes at most one
/// navigation, back, or counter request. Returning `None` means the input
/// means nothing on this screen.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
