//! # rust-cards
//!
//! The mechanical substrate for card games: cards, a deck, dealing, and
//! per-player hands, plus minimal session bookkeeping.
//!
//! ## Design Principles
//!
//! 1. **One owner per card**: The `Deck` holds every card in the game.
//!    Hands and the discard pile are filters over it by location tag.
//!
//! 2. **Move by re-tagging**: Dealing, drawing and discarding change a
//!    card's `Zone`. Cards are never copied between containers.
//!
//! 3. **Deterministic when asked**: Shuffles go through an injectable
//!    `Shuffler`; `GameRng` makes them reproducible from a seed.
//!
//! 4. **No rules**: Nothing here knows poker from blackjack. Games are
//!    built on top.
//!
//! ## Modules
//!
//! - `core`: Errors, players, RNG, configuration, turn history
//! - `zones`: Location tags
//! - `cards`: Ranks, suits, cards, decks, hands
//! - `session`: Players and the game session
//!
//! ## Single writer
//!
//! All operations are synchronous and in-memory. A `Deck` (and the `Game`
//! that owns it) assumes exclusive access and takes no locks.

pub mod core;
pub mod zones;
pub mod cards;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    DeckError, GameError,
    PlayerId,
    GameRng, GameRngState, Shuffler, ShuffleFn,
    GameConfig,
    TurnHistory, TurnRecord,
};

pub use crate::zones::Zone;

pub use crate::cards::{Rank, Suit, Card, Deck, DealtCards, DealtHands, Hand, HandMut};

pub use crate::session::{Game, Player};
