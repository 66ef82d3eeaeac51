//! Error taxonomy for cards, decks, hands and game sessions.
//!
//! All errors are deterministic functions of the inputs and the current
//! state. None are transient, and none are swallowed internally: they
//! surface to the caller of the operation that detected them.

use thiserror::Error;

use crate::cards::Card;
use crate::core::player::PlayerId;
use crate::zones::Zone;

/// Errors raised by card construction, deck population and dealing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("unrecognized rank {0:?}")]
    InvalidRank(String),

    #[error("unrecognized suit {0:?}")]
    InvalidSuit(String),

    /// Card text without the `"<rank> of <suit>"` shape.
    #[error("expected \"<rank> of <suit>\", got {0:?}")]
    MalformedCard(String),

    /// A custom deck entry that does not describe a card.
    #[error("entry {index} is not a card: {entry:?}")]
    InvalidCard { index: usize, entry: String },

    #[error("no cards left in the deck")]
    EmptyDeck,

    /// Checked before any card moves, so a failed deal leaves the deck untouched.
    #[error("deal needs {needed} cards but only {available} remain in the deck")]
    InsufficientCards { needed: usize, available: usize },

    #[error("{card} is not in the hand of {zone}")]
    NotInHand { card: Card, zone: Zone },
}

/// Errors raised by game session bookkeeping.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player {0} is already seated")]
    DuplicatePlayer(PlayerId),

    #[error("no player named {0}")]
    UnknownPlayer(PlayerId),

    #[error(transparent)]
    Deck(#[from] DeckError),

    /// Turn history could not be encoded or decoded.
    #[error("turn history snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_insufficient_cards_message() {
        let err = DeckError::InsufficientCards { needed: 54, available: 52 };
        assert_eq!(
            err.to_string(),
            "deal needs 54 cards but only 52 remain in the deck"
        );
    }

    #[test]
    fn test_malformed_card_message() {
        let err = DeckError::MalformedCard("8".to_string());
        assert_eq!(err.to_string(), r#"expected "<rank> of <suit>", got "8""#);
    }

    #[test]
    fn test_not_in_hand_message() {
        let err = DeckError::NotInHand {
            card: Card::new(Rank::Queen, Suit::Hearts),
            zone: Zone::player("fred"),
        };
        assert_eq!(err.to_string(), "queen of hearts is not in the hand of fred");
    }

    #[test]
    fn test_deck_error_converts_into_game_error() {
        let err: GameError = DeckError::EmptyDeck.into();
        assert!(matches!(err, GameError::Deck(DeckError::EmptyDeck)));
        assert_eq!(err.to_string(), "no cards left in the deck");
    }
}
