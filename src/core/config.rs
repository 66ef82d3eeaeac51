//! Game session configuration.
//!
//! Sessions are configured up front by a `GameConfig`:
//! - how many cards each player receives at deal time
//! - the seated players, in seating order
//! - whether the deck is shuffled on creation
//! - an optional RNG seed for reproducible shuffles
//!
//! The config is plain serde data, so a host can load it from any format.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Complete session configuration.
///
/// ```
/// use rust_cards::core::GameConfig;
///
/// let config = GameConfig::new(5)
///     .with_player("a")
///     .with_player("b")
///     .unshuffled();
///
/// assert_eq!(config.card_count, 5);
/// assert_eq!(config.players.len(), 2);
/// assert!(!config.shuffled);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each player by `Game::deal_hands`.
    pub card_count: usize,

    /// Seated players, in seating order.
    #[serde(default)]
    pub players: Vec<PlayerId>,

    /// Shuffle the fresh deck when the session is created.
    #[serde(default = "default_shuffled")]
    pub shuffled: bool,

    /// RNG seed. `None` draws one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_shuffled() -> bool {
    true
}

impl GameConfig {
    /// Create a configuration with no players and a shuffled deck.
    #[must_use]
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            players: Vec::new(),
            shuffled: true,
            seed: None,
        }
    }

    /// Seat a player.
    #[must_use]
    pub fn with_player(mut self, player: impl Into<PlayerId>) -> Self {
        self.players.push(player.into());
        self
    }

    /// Seat several players, in order.
    #[must_use]
    pub fn with_players<I>(mut self, players: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PlayerId>,
    {
        self.players.extend(players.into_iter().map(Into::into));
        self
    }

    /// Keep the deck in creation order.
    #[must_use]
    pub fn unshuffled(mut self) -> Self {
        self.shuffled = false;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(2);

        assert_eq!(config.card_count, 2);
        assert!(config.players.is_empty());
        assert!(config.shuffled);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(3)
            .with_players(["a", "b"])
            .with_player("c")
            .with_seed(9);

        let names: Vec<_> = config.players.iter().map(PlayerId::as_str).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_fresh_player_list_per_config() {
        let first = GameConfig::new(1).with_player("a");
        let second = GameConfig::new(1);

        assert_eq!(first.players.len(), 1);
        assert!(second.players.is_empty());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"card_count": 7}"#).unwrap();

        assert_eq!(config, GameConfig::new(7));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = GameConfig::new(4).with_players(["a", "b"]).unshuffled().with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back, config);
    }
}
