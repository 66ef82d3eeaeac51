//! Card system: ranks, suits, cards, decks and hands.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: the 13 ranks and 4 suits of a standard deck
//! - `Card`: identity is rank + suit; value and location are attributes
//! - `Deck`: owns every card; membership is by location tag
//! - `Hand`, `HandMut`: per-player views over a deck

pub mod rank;
pub mod card;
pub mod deck;
pub mod hand;

pub use rank::{Rank, Suit};
pub use card::Card;
pub use deck::{DealtCards, DealtHands, Deck};
pub use hand::{Hand, HandMut};
