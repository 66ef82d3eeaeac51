//! Game session bookkeeping.
//!
//! A `Game` owns one deck and the seated players, tracks whether play has
//! started, and carries an opaque turn history. It implements no rules:
//! card games are built on top of it.
//!
//! ```
//! use rust_cards::core::GameConfig;
//! use rust_cards::session::Game;
//!
//! let mut game = Game::new(GameConfig::new(2).with_players(["a", "b"])).unwrap();
//! game.deal_hands().unwrap();
//! game.run();
//!
//! assert!(game.is_started());
//! assert_eq!(game.hand("a").unwrap().len(), 2);
//! assert_eq!(game.deck().len(), 48);
//! ```

mod player;
mod game;

pub use player::Player;
pub use game::Game;
