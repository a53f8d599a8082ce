//! # Destinations
//!
//! The fixed set of screens the shell can show. There are no parameters and
//! no nested graphs: a destination is just one of six names.
//!
//! Untyped input (saved bundles, anything read from outside the process)
//! becomes a `Destination` only through `FromStr`, which rejects unknown
//! routes. Everything inside the crate passes the enum around, so an unknown
//! destination can never reach the navigation store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::navigation::NavError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Home,
    Profile,
    Library,
    Music,
    Movies,
    Settings,
}

impl Destination {
    pub const ALL: [Destination; 6] = [
        Destination::Home,
        Destination::Profile,
        Destination::Library,
        Destination::Music,
        Destination::Movies,
        Destination::Settings,
    ];

    /// Route name, as used in saved bundles and logs.
    pub fn route(self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::Profile => "profile",
            Destination::Library => "library",
            Destination::Music => "music",
            Destination::Movies => "movies",
            Destination::Settings => "settings",
        }
    }

    /// Heading shown at the top of the screen.
    pub fn title(self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Profile => "User Profile",
            Destination::Library => "Library",
            Destination::Music => "Music",
            Destination::Movies => "Movies",
            Destination::Settings => "Settings",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Destination {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .into_iter()
            .find(|d| d.route() == s)
            .ok_or_else(|| NavError::UnknownDestination(s.to_string()))
    }
}
