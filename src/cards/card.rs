//! Playing cards.
//!
//! A `Card` is identified by its rank and suit. Its numeric value and its
//! current location are mutable attributes that do not take part in
//! equality or hashing.
//!
//! Rank and suit names are only checked when the value has to be derived
//! from them. A card given an explicit value keeps unknown names as
//! `Rank::Custom` / `Suit::Custom`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::rank::{Rank, Suit};
use crate::core::DeckError;
use crate::zones::Zone;

/// A playing card.
///
/// ```
/// use rust_cards::cards::{Card, Rank, Suit};
/// use rust_cards::zones::Zone;
///
/// let card = Card::new(Rank::Jack, Suit::Spades);
/// assert_eq!(card.value(), 10);
/// assert_eq!(card.location(), &Zone::Deck);
/// assert_eq!(card.to_string(), "jack of spades");
///
/// // Value is not part of identity.
/// assert_eq!(card, Card::with_value(Rank::Jack, Suit::Spades, 42));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    value: i64,
    #[serde(default)]
    location: Zone,
}

impl Card {
    /// Create a card in the deck with its standard value.
    ///
    /// A custom rank has no standard value and starts at 0.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        let value = rank.default_value().unwrap_or_default();
        Self::with_value(rank, suit, value)
    }

    /// Create a card in the deck with an explicit value.
    #[must_use]
    pub fn with_value(rank: Rank, suit: Suit, value: i64) -> Self {
        Self {
            rank,
            suit,
            value,
            location: Zone::Deck,
        }
    }

    /// Place the card in a zone at construction time.
    #[must_use]
    pub fn in_zone(mut self, location: Zone) -> Self {
        self.location = location;
        self
    }

    /// Build a card from rank and suit names.
    ///
    /// With `value: None` the standard value is derived from the rank, so
    /// both names must be standard (`InvalidRank` / `InvalidSuit` otherwise).
    /// With an explicit value any name is accepted.
    ///
    /// ```
    /// use rust_cards::cards::{Card, Suit};
    ///
    /// let card = Card::from_names("ace", "fudgeos", Some(10)).unwrap();
    /// assert_eq!(card.suit(), &Suit::Custom("fudgeos".into()));
    /// assert_eq!(card.to_string(), "ace of fudgeos");
    ///
    /// assert!(Card::from_names("ace", "fudgeos", None).is_err());
    /// ```
    pub fn from_names(rank: &str, suit: &str, value: Option<i64>) -> Result<Self, DeckError> {
        let Some(value) = value else {
            return Ok(Self::new(rank.parse()?, suit.parse()?));
        };

        let rank = rank
            .parse()
            .unwrap_or_else(|_| Rank::Custom(rank.trim().to_string()));
        let suit = suit
            .parse()
            .unwrap_or_else(|_| Suit::Custom(suit.trim().to_string()));
        Ok(Self::with_value(rank, suit, value))
    }

    #[must_use]
    pub fn rank(&self) -> &Rank {
        &self.rank
    }

    #[must_use]
    pub fn suit(&self) -> &Suit {
        &self.suit
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub fn location(&self) -> &Zone {
        &self.location
    }

    /// Re-tag the card. Only the owning deck moves cards.
    pub(crate) fn set_location(&mut self, location: Zone) {
        self.location = location;
    }

    /// Compare by value only.
    ///
    /// This is deliberately not `Ord`: two cards of equal value but
    /// different suits are unequal, and the same card may carry different
    /// values in different games.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use rust_cards::cards::{Card, Rank, Suit};
    ///
    /// let two = Card::new(Rank::Two, Suit::Hearts);
    /// let king = Card::new(Rank::King, Suit::Clubs);
    /// let ten = Card::new(Rank::Ten, Suit::Spades);
    ///
    /// assert_eq!(two.cmp_value(&king), Ordering::Less);
    /// assert_eq!(king.cmp_value(&ten), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn cmp_value(&self, other: &Card) -> Ordering {
        self.value.cmp(&other.value)
    }

    #[must_use]
    pub fn is_higher(&self, other: &Card) -> bool {
        self.cmp_value(other) == Ordering::Greater
    }

    #[must_use]
    pub fn is_lower(&self, other: &Card) -> bool {
        self.cmp_value(other) == Ordering::Less
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.rank.hash(hasher);
        self.suit.hash(hasher);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Parses `"<rank> of <suit>"`, ASCII case-insensitive, with the standard value.
///
/// Text without the `" of "` separator is `MalformedCard`. Unknown names are
/// `InvalidRank` / `InvalidSuit`.
impl FromStr for Card {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (rank, suit) = lower
            .split_once(" of ")
            .ok_or_else(|| DeckError::MalformedCard(s.to_string()))?;
        Self::from_names(rank, suit, None)
    }
}
