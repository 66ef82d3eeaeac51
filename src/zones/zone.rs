//! The `Zone` location tag.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where a card currently is.
///
/// ```
/// use rust_cards::zones::Zone;
///
/// assert_eq!(Zone::named("discard"), Zone::Discard);
/// assert_eq!(Zone::named("crib"), Zone::Custom("crib".into()));
/// assert_eq!(Zone::player("fred").to_string(), "fred");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Undealt, still in the deck.
    #[default]
    Deck,
    /// In a player's hand.
    Player(PlayerId),
    /// The shared discard pile.
    Discard,
    /// Any other game-defined zone (crib, kitty, table, ...).
    Custom(String),
}

impl Zone {
    /// Zone for a player's hand.
    #[must_use]
    pub fn player(id: impl Into<PlayerId>) -> Self {
        Zone::Player(id.into())
    }

    /// Zone for a non-player name. `"deck"` and `"discard"` map to the
    /// built-in zones, anything else becomes `Custom`.
    #[must_use]
    pub fn named(name: &str) -> Self {
        match name {
            "deck" => Zone::Deck,
            "discard" => Zone::Discard,
            other => Zone::Custom(other.to_string()),
        }
    }

    #[must_use]
    pub fn is_deck(&self) -> bool {
        matches!(self, Zone::Deck)
    }

    /// The player holding this zone, if it is a hand.
    #[must_use]
    pub fn owner(&self) -> Option<&PlayerId> {
        match self {
            Zone::Player(id) => Some(id),
            _ => None,
        }
    }
}

impl From<PlayerId> for Zone {
    fn from(id: PlayerId) -> Self {
        Zone::Player(id)
    }
}

impl From<&PlayerId> for Zone {
    fn from(id: &PlayerId) -> Self {
        Zone::Player(id.clone())
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Deck => f.write_str("deck"),
            Zone::Player(id) => write!(f, "{}", id),
            Zone::Discard => f.write_str("discard"),
            Zone::Custom(name) => f.write_str(name),
        }
    }
}
