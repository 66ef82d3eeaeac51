//! Core types: errors, players, RNG, configuration, turn history.
//!
//! These are the building blocks shared by the card and session layers.

pub mod error;
pub mod player;
pub mod rng;
pub mod config;
pub mod history;

pub use error::{DeckError, GameError};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState, ShuffleFn, Shuffler};
pub use config::GameConfig;
pub use history::{TurnHistory, TurnRecord};
