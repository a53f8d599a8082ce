//! # Change Notifications
//!
//! Both stores announce every mutation to their subscribers. The TUI
//! subscribes once per `App` instance and drains the receivers before each
//! draw, so a change is always visible before the next input is read.
//!
//! ```text
//! NavigationStore ──┐
//!                   ├── Change ──► mpsc::Receiver (TUI) ──► redraw region
//! ScreenStateRegistry ┘
//! ```

use std::sync::mpsc::{self, Receiver, Sender};

use crate::core::destination::Destination;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The top of the back stack is now this destination.
    Destination(Destination),
    /// A screen-state field was written.
    Field(String),
}

/// Part of the screen a change affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Whole screen: a different destination is showing.
    Screen,
    /// Only the content that reads screen state.
    Content,
}

impl Change {
    pub fn region(&self) -> Region {
        match self {
            Change::Destination(_) => Region::Screen,
            Change::Field(_) => Region::Content,
        }
    }
}

/// Fan-out list of subscribers. Receivers that were dropped are pruned on
/// the next notification.
#[derive(Debug, Default)]
pub struct Subscribers {
    senders: Vec<Sender<Change>>,
}

impl Subscribers {
    pub fn subscribe(&mut self) -> Receiver<Change> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    pub fn notify(&mut self, change: Change) {
        self.senders.retain(|tx| tx.send(change.clone()).is_ok());
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_receives_change() {
        let mut subs = Subscribers::default();
        let a = subs.subscribe();
        let b = subs.subscribe();

        subs.notify(Change::Destination(Destination::Music));

        assert_eq!(a.try_recv().unwrap(), Change::Destination(Destination::Music));
        assert_eq!(b.try_recv().unwrap(), Change::Destination(Destination::Music));
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut subs = Subscribers::default();
        let kept = subs.subscribe();
        drop(subs.subscribe());
        assert_eq!(subs.len(), 2);

        subs.notify(Change::Field("fabCount".to_string()));

        assert_eq!(subs.len(), 1);
        assert_eq!(kept.try_recv().unwrap(), Change::Field("fabCount".to_string()));
    }

    #[test]
    fn test_change_regions() {
        assert_eq!(Change::Destination(Destination::Home).region(), Region::Screen);
        assert_eq!(Change::Field("x".to_string()).region(), Region::Content);
    }
}
