//! Per-player hands as live views over a deck.
//!
//! A hand stores no cards. It is "every card in the deck tagged with this
//! player", recomputed on each call, so a card tagged to one player is
//! absent from every other hand and from the undealt deck by construction.
//!
//! - `Hand` borrows the deck shared and answers questions.
//! - `HandMut` borrows it exclusively and can draw and discard.

use tracing::debug;

use super::card::Card;
use super::deck::Deck;
use crate::core::{DeckError, PlayerId};
use crate::zones::Zone;

/// Read-only view of one player's hand.
#[derive(Clone, Copy, Debug)]
pub struct Hand<'a> {
    deck: &'a Deck,
    player: &'a PlayerId,
}

impl<'a> Hand<'a> {
    /// The player holding this hand.
    #[must_use]
    pub fn player(&self) -> &'a PlayerId {
        self.player
    }

    /// Cards in the hand, in deck storage order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Card> + 'a {
        let (deck, player): (&'a Deck, &'a PlayerId) = (self.deck, self.player);
        deck.cards()
            .iter()
            .filter(move |c| c.location().owner() == Some(player))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Sum of card values. An empty hand is worth 0.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.iter().map(Card::value).sum()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.iter().any(|c| c == card)
    }

    /// Cards in the hand, lowest value first. Ties keep storage order.
    #[must_use]
    pub fn sorted_by_value(&self) -> Vec<&'a Card> {
        let mut cards: Vec<_> = self.iter().collect();
        cards.sort_by(|a, b| a.cmp_value(b));
        cards
    }
}

/// Mutable view of one player's hand.
///
/// ```
/// use rust_cards::cards::Deck;
/// use rust_cards::core::PlayerId;
///
/// let mut deck = Deck::standard();
/// let fred = PlayerId::new("fred");
///
/// let mut hand = deck.hand_mut(&fred);
/// let card = hand.draw().unwrap();
/// assert_eq!(hand.as_hand().value(), card.value());
///
/// hand.discard(&card).unwrap();
/// assert!(hand.as_hand().is_empty());
/// assert!(deck.contains(&card));
/// ```
#[derive(Debug)]
pub struct HandMut<'a> {
    deck: &'a mut Deck,
    player: &'a PlayerId,
}

impl<'a> HandMut<'a> {
    /// Reborrow as a read-only view.
    #[must_use]
    pub fn as_hand(&self) -> Hand<'_> {
        Hand {
            deck: &*self.deck,
            player: self.player,
        }
    }

    /// Take the top card of the deck into this hand.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.deck.deal_one(Zone::from(self.player))
    }

    /// Move `card` from this hand to the discard pile.
    pub fn discard(&mut self, card: &Card) -> Result<(), DeckError> {
        self.discard_to(card, Zone::Discard)
    }

    /// Move `card` from this hand to `to`.
    ///
    /// Fails with `NotInHand` if the card is not currently held by this player.
    pub fn discard_to(&mut self, card: &Card, to: Zone) -> Result<(), DeckError> {
        let from = Zone::from(self.player);
        if self.deck.move_card(card, &from, to) {
            debug!(player = %self.player, card = %card, "discarded card");
            Ok(())
        } else {
            Err(DeckError::NotInHand {
                card: card.clone(),
                zone: from,
            })
        }
    }
}

impl Deck {
    /// View `player`'s hand.
    #[must_use]
    pub fn hand<'a>(&'a self, player: &'a PlayerId) -> Hand<'a> {
        Hand { deck: self, player }
    }

    /// Draw into and discard from `player`'s hand.
    pub fn hand_mut<'a>(&'a mut self, player: &'a PlayerId) -> HandMut<'a> {
        HandMut { deck: self, player }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_draw() {
        let mut deck = Deck::standard();
        let fred = PlayerId::new("Fred");

        let card = deck.hand_mut(&fred).draw().unwrap();

        assert_eq!(card.location(), &Zone::player("Fred"));
        assert_eq!(deck.hand(&fred).len(), 1);
        assert_eq!(deck.len(), 51);
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut deck = Deck::new();
        let fred = PlayerId::new("Fred");

        assert_eq!(deck.hand_mut(&fred).draw(), Err(DeckError::EmptyDeck));
    }

    #[test]
    fn test_discard() {
        let mut deck = Deck::standard();
        let fred = PlayerId::new("Fred");
        let mut hand = deck.hand_mut(&fred);

        let card = hand.draw().unwrap();
        hand.discard(&card).unwrap();

        assert_eq!(deck.hand(&fred).len(), 0);
        assert_eq!(deck.count_in(&Zone::Discard), 1);
    }

    #[test]
    fn test_discard_to_custom_zone() {
        let mut deck = Deck::standard();
        let fred = PlayerId::new("Fred");
        let mut hand = deck.hand_mut(&fred);

        let card = hand.draw().unwrap();
        hand.discard_to(&card, Zone::named("crib")).unwrap();

        assert_eq!(deck.cards_in(&Zone::named("crib")).next(), Some(&card));
    }

    #[test]
    fn test_discard_card_not_held() {
        let mut deck = Deck::standard();
        let fred = PlayerId::new("Fred");
        let wilma = PlayerId::new("Wilma");

        let card = deck.hand_mut(&wilma).draw().unwrap();
        let err = deck.hand_mut(&fred).discard(&card).unwrap_err();

        assert_eq!(
            err,
            DeckError::NotInHand {
                card: card.clone(),
                zone: Zone::player("Fred"),
            }
        );
        assert!(deck.hand(&wilma).contains(&card));
    }

    #[test]
    fn test_value() {
        let mut deck = Deck::standard();
        let fred = PlayerId::new("Fred");
        let mut hand = deck.hand_mut(&fred);

        let first = hand.draw().unwrap();
        let second = hand.draw().unwrap();

        assert_eq!(deck.hand(&fred).value(), first.value() + second.value());
    }

    #[test]
    fn test_empty_hand_value() {
        let deck = Deck::standard();
        let fred = PlayerId::new("Fred");

        assert!(deck.hand(&fred).is_empty());
        assert_eq!(deck.hand(&fred).value(), 0);
    }

    #[test]
    fn test_hands_are_disjoint() {
        let mut deck = Deck::standard();
        deck.deal(&["a", "b"], 5).unwrap();

        let a = PlayerId::new("a");
        let b = PlayerId::new("b");
        let hand_a = deck.hand(&a);
        let hand_b = deck.hand(&b);

        assert_eq!(hand_a.len(), 5);
        assert_eq!(hand_b.len(), 5);
        assert!(hand_a.iter().all(|c| !hand_b.contains(c)));
        assert!(hand_a.iter().all(|c| !deck.iter().any(|d| d == c)));
    }

    #[test]
    fn test_sorted_by_value() {
        let mut deck = Deck::from_cards(vec![
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
        ]);
        let fred = PlayerId::new("Fred");
        deck.deal(&[&fred], 3).unwrap();

        let values: Vec<_> = deck.hand(&fred).sorted_by_value().iter().map(|c| c.value()).collect();
        assert_eq!(values, [2, 7, 10]);
    }
}
