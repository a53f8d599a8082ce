//! # Navigation Store
//!
//! Single source of truth for which screen is showing and what Back does.
//!
//! ```text
//! back_stack: [Home, Library, Music]
//!               ▲               ▲
//!               root            current (top)
//! ```
//!
//! Invariants:
//! - The stack is never empty and its root is always `Home`.
//! - `pop()` never removes the root. At the root it returns `false`, which the
//!   host reads as "exit the application".
//! - Every push or pop notifies subscribers before returning.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;
use thiserror::Error;

use crate::core::destination::Destination;
use crate::core::notify::{Change, Subscribers};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("unknown destination: {0:?}")]
    UnknownDestination(String),
    #[error("back stack is empty")]
    EmptyBackStack,
    #[error("back stack root is {0}, expected home")]
    RootNotHome(Destination),
}

/// What `navigate` does when the target is already on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    /// Always push. Navigating to the current screen leaves two identical
    /// entries on the stack.
    #[default]
    Standard,
    /// Navigating to the current screen is a no-op.
    SingleTop,
}

/// The capability a screen action needs: move forward, move back, look at
/// where we are. Nothing else about the store is reachable through it.
pub trait Navigator {
    /// Returns whether the back stack changed.
    fn navigate(&mut self, dest: Destination) -> bool;
    /// Returns `false` when already at the root.
    fn pop(&mut self) -> bool;
    fn current(&self) -> Destination;
}

#[derive(Debug)]
pub struct NavigationStore {
    back_stack: Vec<Destination>,
    launch_mode: LaunchMode,
    subscribers: Subscribers,
}

impl NavigationStore {
    pub fn new(launch_mode: LaunchMode) -> Self {
        Self {
            back_stack: vec![Destination::Home],
            launch_mode,
            subscribers: Subscribers::default(),
        }
    }

    /// Rebuild a store from a saved back stack.
    pub fn from_back_stack(
        back_stack: Vec<Destination>,
        launch_mode: LaunchMode,
    ) -> Result<Self, NavError> {
        match back_stack.first() {
            None => return Err(NavError::EmptyBackStack),
            Some(&root) if root != Destination::Home => return Err(NavError::RootNotHome(root)),
            Some(_) => {}
        }
        Ok(Self {
            back_stack,
            launch_mode,
            subscribers: Subscribers::default(),
        })
    }

    pub fn back_stack(&self) -> &[Destination] {
        &self.back_stack
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    pub fn can_pop(&self) -> bool {
        self.back_stack.len() > 1
    }

    pub fn launch_mode(&self) -> LaunchMode {
        self.launch_mode
    }

    pub fn subscribe(&mut self) -> Receiver<Change> {
        self.subscribers.subscribe()
    }
}

impl Navigator for NavigationStore {
    fn navigate(&mut self, dest: Destination) -> bool {
        if self.launch_mode == LaunchMode::SingleTop && self.current() == dest {
            debug!("navigate({dest}) ignored: already on top (single-top)");
            return false;
        }
        self.back_stack.push(dest);
        info!("navigate -> {} (depth {})", dest, self.back_stack.len());
        self.subscribers.notify(Change::Destination(dest));
        true
    }

    fn pop(&mut self) -> bool {
        if !self.can_pop() {
            debug!("pop at root: stack unchanged");
            return false;
        }
        let popped = self.back_stack.pop();
        let current = self.current();
        info!(
            "pop {} -> {} (depth {})",
            popped.map(Destination::route).unwrap_or("?"),
            current,
            self.back_stack.len()
        );
        self.subscribers.notify(Change::Destination(current));
        true
    }

    fn current(&self) -> Destination {
        // Root is never popped, so the stack always has a last element.
        self.back_stack.last().copied().unwrap_or(Destination::Home)
    }
}
