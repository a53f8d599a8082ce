//! # Core Application Logic
//!
//! This module contains the shell's navigation and screen-state logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavigationStore      │
//!                    │  • ScreenStateRegistry  │
//!                    │  • Action + update()    │
//!                    │  • lifecycle hooks      │
//!                    │                         │
//!                    │  No terminal. No I/O    │
//!                    │  beyond config loading. │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │   Host     │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`destination`]: The six screens
//! - [`navigation`]: Back stack and the `Navigator` capability
//! - [`registry`]: Screen state that survives a configuration change
//! - [`notify`]: Change notifications from both stores
//! - [`state`]: The `App` struct, owner of both stores
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`lifecycle`]: Start, save, configuration change, back, render
//! - [`config`]: Settings file, env and CLI overrides

pub mod action;
pub mod config;
pub mod destination;
pub mod lifecycle;
pub mod navigation;
pub mod notify;
pub mod registry;
pub mod state;
