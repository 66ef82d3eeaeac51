//! The deck: single owner of every card in a game.
//!
//! Cards are never moved out of the deck's storage. Dealing, drawing and
//! discarding only re-tag a card's `Zone`, and every other collection is a
//! filter over this storage by tag. Consequences:
//!
//! - `len()` counts only cards tagged `Zone::Deck` (the logical deck).
//! - `contains()` checks raw storage, so a dealt card is still "in" the
//!   deck it came from. Provenance lookups rely on this.
//! - The "top" of the deck is the last deck-tagged card by storage index.
//!
//! A `Deck` assumes a single writer. It holds no locks.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};

use super::card::Card;
use super::rank::{Rank, Suit};
use crate::core::{DeckError, PlayerId, Shuffler};
use crate::zones::Zone;

/// Cards received by one player in a deal, in the order received.
pub type DealtCards = SmallVec<[Card; 8]>;

/// Result of `Deck::deal`: each player's cards in the order received.
pub type DealtHands = FxHashMap<PlayerId, DealtCards>;

/// Ordered card storage with tag-based membership.
///
/// ```
/// use rust_cards::cards::{Card, Deck, Rank, Suit};
/// use rust_cards::zones::Zone;
///
/// let mut deck = Deck::standard();
/// let card = deck.deal_one(Zone::Discard).unwrap();
///
/// assert_eq!(card, Card::new(Rank::King, Suit::Clubs));
/// assert_eq!(deck.len(), 51);
/// assert!(deck.contains(&card));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the 52-card deck in creation order: for each rank ace..king,
    /// one card per suit (hearts, diamonds, spades, clubs).
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.populate();
        deck
    }

    /// Adopt caller-supplied cards verbatim, locations included.
    ///
    /// An empty list builds the standard deck instead.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut deck = Self::new();
        deck.populate_with(cards);
        deck
    }

    /// Build a deck from `"<rank> of <suit>"` entries.
    ///
    /// Fails on the first bad entry. An entry without the `" of "` shape is
    /// `InvalidCard` with its position. Unknown names surface as
    /// `InvalidRank` / `InvalidSuit`.
    ///
    /// ```
    /// use rust_cards::cards::Deck;
    /// use rust_cards::core::DeckError;
    ///
    /// let deck = Deck::parse_cards(["ace of hearts", "two of clubs"]).unwrap();
    /// assert_eq!(deck.len(), 2);
    ///
    /// let err = Deck::parse_cards(["king of spades", "8"]).unwrap_err();
    /// assert_eq!(err, DeckError::InvalidCard { index: 1, entry: "8".into() });
    ///
    /// let err = Deck::parse_cards(["knight of hearts"]).unwrap_err();
    /// assert_eq!(err, DeckError::InvalidRank("knight".into()));
    /// ```
    pub fn parse_cards<I>(entries: I) -> Result<Self, DeckError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let cards = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let entry = entry.as_ref();
                entry.parse::<Card>().map_err(|err| match err {
                    DeckError::MalformedCard(entry) => DeckError::InvalidCard { index, entry },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_cards(cards))
    }

    /// Replace the contents with a fresh standard deck.
    pub fn populate(&mut self) {
        self.cards.clear();
        self.cards.reserve(Rank::ALL.len() * Suit::ALL.len());
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.cards.push(Card::new(rank.clone(), suit));
            }
        }
    }

    /// Replace the contents with `cards`, or with the standard deck if
    /// `cards` is empty.
    pub fn populate_with(&mut self, cards: Vec<Card>) {
        if cards.is_empty() {
            self.populate();
        } else {
            self.cards = cards;
        }
    }

    // === Logical membership ===

    /// Number of cards still in the deck (tagged `Zone::Deck`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.count_in(&Zone::Deck)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.cards.iter().any(|c| c.location().is_deck())
    }

    /// Cards still in the deck, in storage order (last is the top).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.location().is_deck())
    }

    /// Cards currently tagged with `zone`, in storage order.
    pub fn cards_in<'a>(&'a self, zone: &'a Zone) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.iter().filter(move |c| c.location() == zone)
    }

    /// Number of cards currently tagged with `zone`.
    #[must_use]
    pub fn count_in(&self, zone: &Zone) -> usize {
        self.cards_in(zone).count()
    }

    // === Raw storage ===

    /// Total cards held, whatever their location.
    #[must_use]
    pub fn storage_len(&self) -> usize {
        self.cards.len()
    }

    /// Every card held, in storage order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Whether this deck holds `card` in any zone.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Storage index of `card`, in any zone.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Overwrite the card at `index`, returning the one it replaced.
    ///
    /// Returns `None` and leaves the deck untouched if `index` is out of
    /// bounds. Deck invariants (uniqueness, 52 cards) are not re-checked.
    pub fn set(&mut self, index: usize, card: Card) -> Option<Card> {
        let slot = self.cards.get_mut(index)?;
        Some(std::mem::replace(slot, card))
    }

    /// Insert a card at `index`, clamped to the end of storage.
    pub fn insert(&mut self, index: usize, card: Card) {
        let idx = index.min(self.cards.len());
        self.cards.insert(idx, card);
    }

    /// Remove and return the card at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    // === Movement ===

    /// Permute storage order. Tags and values are untouched.
    pub fn shuffle<S: Shuffler + ?Sized>(&mut self, shuffler: &mut S) {
        shuffler.shuffle_cards(&mut self.cards);
        debug!(cards = self.cards.len(), remaining = self.len(), "shuffled deck");
    }

    /// Move the top card of the deck to `to` and return it.
    pub fn deal_one(&mut self, to: impl Into<Zone>) -> Result<Card, DeckError> {
        let to = to.into();
        let idx = self
            .cards
            .iter()
            .rposition(|c| c.location().is_deck())
            .ok_or(DeckError::EmptyDeck)?;

        let card = &mut self.cards[idx];
        card.set_location(to);
        trace!(card = %card, to = %card.location(), "dealt card");
        Ok(card.clone())
    }

    /// Deal `card_count` rounds, one card per player per round, in the
    /// order `players` are given.
    ///
    /// All-or-nothing: if `players.len() * card_count` exceeds `len()`,
    /// nothing moves and `InsufficientCards` is returned.
    ///
    /// ```
    /// use rust_cards::cards::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// let hands = deck.deal(&["a", "b"], 2).unwrap();
    ///
    /// let a: Vec<_> = hands["a"].iter().map(ToString::to_string).collect();
    /// assert_eq!(a, ["king of clubs", "king of diamonds"]);
    /// assert_eq!(deck.len(), 48);
    /// ```
    pub fn deal<P: AsRef<str>>(
        &mut self,
        players: &[P],
        card_count: usize,
    ) -> Result<DealtHands, DeckError> {
        let available = self.len();
        let needed = players
            .len()
            .checked_mul(card_count)
            .filter(|&needed| needed <= available)
            .ok_or_else(|| DeckError::InsufficientCards {
                needed: players.len().saturating_mul(card_count),
                available,
            })?;

        let ids: Vec<PlayerId> = players.iter().map(|p| PlayerId::new(p.as_ref())).collect();

        let mut dealt = DealtHands::default();
        for id in &ids {
            dealt.entry(id.clone()).or_default();
        }

        for _ in 0..card_count {
            for id in &ids {
                let card = self.deal_one(Zone::from(id))?;
                dealt.entry(id.clone()).or_default().push(card);
            }
        }

        debug!(
            players = ids.len(),
            card_count,
            dealt = needed,
            remaining = self.len(),
            "dealt hands"
        );
        Ok(dealt)
    }

    /// Re-tag `card` from `from` to `to`.
    ///
    /// Returns `false` and changes nothing if `card` is not currently in `from`.
    pub fn move_card(&mut self, card: &Card, from: &Zone, to: Zone) -> bool {
        let Some(slot) = self
            .cards
            .iter_mut()
            .find(|c| **c == *card && c.location() == from)
        else {
            return false;
        };

        trace!(card = %slot, from = %from, to = %to, "moved card");
        slot.set_location(to);
        true
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl IndexMut<usize> for Deck {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cards[index]
    }
}
