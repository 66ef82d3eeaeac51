//! Deterministic random number generation and shuffle injection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Context streams**: Independent sequences for different purposes
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: `Deck::shuffle` takes any `Shuffler`, so tests can
//!   substitute a fixed permutation
//!
//! ```
//! use rust_cards::cards::Deck;
//! use rust_cards::core::GameRng;
//!
//! let mut a = Deck::standard();
//! let mut b = Deck::standard();
//! a.shuffle(&mut GameRng::new(7));
//! b.shuffle(&mut GameRng::new(7));
//! assert_eq!(a.cards(), b.cards());
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic RNG backing deck shuffles.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept, so `seed()` can reproduce the sequence later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain: the stream seed is an FNV-1a fold of
    /// the little-endian seed bytes followed by the context bytes.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

fn context_seed(seed: u64, context: &str) -> u64 {
    seed.to_le_bytes()
        .iter()
        .chain(context.as_bytes())
        .fold(FNV_OFFSET, |hash, &byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Source of permutations for `Deck::shuffle`.
///
/// Implementations must only reorder the slice. They must not add, drop
/// or edit cards.
pub trait Shuffler {
    /// Permute `cards` in place.
    fn shuffle_cards(&mut self, cards: &mut [Card]);
}

impl Shuffler for GameRng {
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        self.shuffle(cards);
    }
}

/// Adapts a closure into a `Shuffler`.
///
/// ```
/// use rust_cards::cards::{Card, Deck};
/// use rust_cards::core::ShuffleFn;
///
/// let mut deck = Deck::standard();
/// deck.shuffle(&mut ShuffleFn(|cards: &mut [Card]| cards.reverse()));
/// assert_eq!(deck[51].to_string(), "ace of hearts");
/// ```
pub struct ShuffleFn<F>(pub F);

impl<F> Shuffler for ShuffleFn<F>
where
    F: FnMut(&mut [Card]),
{
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        (self.0)(cards);
    }
}
