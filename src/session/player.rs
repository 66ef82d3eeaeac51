//! Seated players.

use serde::{Deserialize, Serialize};

use crate::cards::{Deck, Hand};
use crate::core::PlayerId;

/// A seated player.
///
/// The player's hand lives in the game's deck as cards tagged with the
/// player's id; `hand` builds the view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self { id: id.into() }
    }

    #[must_use]
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// This player's hand in `deck`.
    #[must_use]
    pub fn hand<'a>(&'a self, deck: &'a Deck) -> Hand<'a> {
        deck.hand(&self.id)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
