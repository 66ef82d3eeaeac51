//! Player identification.
//!
//! ## PlayerId
//!
//! Stable, name-based player identifier. It doubles as the location tag
//! for cards held in that player's hand (`Zone::Player`).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Player identifier: the player's name.
///
/// ```
/// use rust_cards::core::PlayerId;
///
/// let fred = PlayerId::new("fred");
/// assert_eq!(fred.as_str(), "fred");
/// assert_eq!(fred.to_string(), "fred");
/// assert_eq!(fred, PlayerId::from("fred"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the player's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlayerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
