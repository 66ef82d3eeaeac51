//! Ranks and suits of a standard deck.
//!
//! Both have a fixed canonical order, which is also the order a fresh deck
//! is built in: ranks ace..king, suits hearts, diamonds, spades, clubs.
//!
//! A card with an explicit value may carry a rank or suit outside the
//! standard set. Those are kept verbatim as `Custom` and sort after the
//! standard symbols. Parsing from text only accepts the standard names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::DeckError;

/// One of the 13 card ranks, or a game-defined one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    /// A rank outside the standard 13. It has no standard value.
    Custom(String),
}

impl Rank {
    /// All ranks, ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// 0-based position in `ALL`, or `None` for a custom rank.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        Rank::ALL.iter().position(|r| r == self)
    }

    /// Standard value: ace is 1, two..nine are face value, ten and court cards are 10.
    ///
    /// ```
    /// use rust_cards::cards::Rank;
    ///
    /// assert_eq!(Rank::Ace.default_value(), Some(1));
    /// assert_eq!(Rank::Seven.default_value(), Some(7));
    /// assert_eq!(Rank::Queen.default_value(), Some(10));
    /// assert_eq!(Rank::Custom("knight".into()).default_value(), None);
    /// ```
    #[must_use]
    pub fn default_value(&self) -> Option<i64> {
        self.index().map(|i| (i as i64 + 1).min(10))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Custom(name) => name,
        }
    }
}

impl FromStr for Rank {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rank::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DeckError::InvalidRank(s.to_string()))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the 4 suits, or a game-defined one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
    Custom(String),
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// 0-based position in `ALL`, or `None` for a custom suit.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        Suit::ALL.iter().position(|suit| suit == self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
            Suit::Custom(name) => name,
        }
    }
}

impl FromStr for Suit {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DeckError::InvalidSuit(s.to_string()))
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
