//! The game session.

use tracing::{debug, info};

use super::player::Player;
use crate::cards::{DealtHands, Deck, Hand, HandMut};
use crate::core::{GameConfig, GameError, GameRng, PlayerId, TurnHistory, TurnRecord};

/// A card game session.
///
/// Two states: not started, then started. `run` moves to started and the
/// session never goes back.
#[derive(Clone, Debug)]
pub struct Game {
    card_count: usize,
    deck: Deck,
    players: Vec<Player>,
    started: bool,
    history: TurnHistory,
    seed: u64,
    shuffle_rng: GameRng,
}

impl Game {
    /// Start a fresh session.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_saved_game(config, TurnHistory::new())
    }

    /// Start a session seeded with a previously saved turn history.
    ///
    /// The history is stored verbatim. The deck is always fresh.
    pub fn with_saved_game(config: GameConfig, saved: TurnHistory) -> Result<Self, GameError> {
        let base = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let mut game = Self {
            card_count: config.card_count,
            deck: Deck::standard(),
            players: Vec::with_capacity(config.players.len()),
            started: false,
            history: saved,
            seed: base.seed(),
            shuffle_rng: base.for_context("shuffle"),
        };

        if config.shuffled {
            game.shuffle();
        }

        for id in config.players {
            game.add_player(id)?;
        }

        debug!(
            players = game.players.len(),
            card_count = game.card_count,
            seed = game.seed,
            saved_turns = game.history.len(),
            "created game"
        );
        Ok(game)
    }

    /// Seat a player. Allowed before and after `run`.
    ///
    /// Player ids tag cards, so they must be unique.
    pub fn add_player(&mut self, id: impl Into<PlayerId>) -> Result<&Player, GameError> {
        let id = id.into();
        if self.player(id.as_str()).is_some() {
            return Err(GameError::DuplicatePlayer(id));
        }

        debug!(player = %id, started = self.started, "seated player");
        self.players.push(Player::new(id));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Start the game. Calling it again is a no-op.
    pub fn run(&mut self) {
        if !self.started {
            info!(players = self.players.len(), "game started");
        }
        self.started = true;
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Cards each player receives from `deal_hands`.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Seed behind this session's shuffles.
    ///
    /// A session built with the same seed shuffles identically on any
    /// platform or toolchain.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Seated players, in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn hand(&self, name: &str) -> Result<Hand<'_>, GameError> {
        let player = self
            .player(name)
            .ok_or_else(|| GameError::UnknownPlayer(PlayerId::new(name)))?;
        Ok(self.deck.hand(player.id()))
    }

    pub fn hand_mut(&mut self, name: &str) -> Result<HandMut<'_>, GameError> {
        let player = self
            .players
            .iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| GameError::UnknownPlayer(PlayerId::new(name)))?;
        Ok(self.deck.hand_mut(player.id()))
    }

    /// Shuffle the deck with this session's RNG stream.
    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.shuffle_rng);
    }

    /// Deal `card_count` cards to every seated player, round-robin in
    /// seating order.
    pub fn deal_hands(&mut self) -> Result<DealtHands, GameError> {
        let ids: Vec<&PlayerId> = self.players.iter().map(Player::id).collect();
        Ok(self.deck.deal(&ids, self.card_count)?)
    }

    /// Append a turn to the history.
    pub fn record_turn(&mut self, turn: TurnRecord) {
        self.history.record(turn);
    }

    #[must_use]
    pub fn history(&self) -> &TurnHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::core::DeckError;

    fn config() -> GameConfig {
        GameConfig::new(5).with_players(["a", "b"]).with_seed(42)
    }

    #[test]
    fn test_players_in_order() {
        let game = Game::new(config()).unwrap();

        let names: Vec<_> = game.players().iter().map(Player::name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(game.players()[0].name(), "a");
    }

    #[test]
    fn test_run() {
        let mut game = Game::new(config()).unwrap();
        assert!(!game.is_started());

        game.run();
        assert!(game.is_started());

        game.run();
        assert!(game.is_started());
    }

    #[test]
    fn test_unshuffled_deck() {
        let mut game = Game::new(config().unshuffled()).unwrap();
        let card = game.deck_mut().deal_one(crate::zones::Zone::Discard).unwrap();

        assert_eq!(card, Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let first = Game::new(config()).unwrap();
        let second = Game::new(config()).unwrap();

        assert_eq!(first.deck().cards(), second.deck().cards());
        assert_ne!(first.deck().cards(), Deck::standard().cards());
    }

    #[test]
    fn test_entropy_seed_recorded() {
        let game = Game::new(GameConfig::new(1)).unwrap();
        let replay = Game::new(GameConfig::new(1).with_seed(game.seed())).unwrap();

        assert_eq!(game.deck().cards(), replay.deck().cards());
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let mut game = Game::new(config()).unwrap();

        let err = game.add_player("a").unwrap_err();
        assert!(matches!(err, GameError::DuplicatePlayer(id) if id.as_str() == "a"));
        assert_eq!(game.players().len(), 2);

        let err = Game::new(GameConfig::new(1).with_players(["x", "x"])).unwrap_err();
        assert!(matches!(err, GameError::DuplicatePlayer(_)));
    }

    #[test]
    fn test_add_player_after_start() {
        let mut game = Game::new(config()).unwrap();
        game.run();

        let player = game.add_player("c").unwrap();
        assert_eq!(player.name(), "c");
        assert_eq!(game.players().len(), 3);
    }

    #[test]
    fn test_deal_hands() {
        let mut game = Game::new(config()).unwrap();
        let dealt = game.deal_hands().unwrap();

        assert_eq!(dealt["a"].len(), 5);
        assert_eq!(dealt["b"].len(), 5);
        assert_eq!(game.deck().len(), 42);
        assert_eq!(game.hand("b").unwrap().len(), 5);
    }

    #[test]
    fn test_deal_hands_too_many() {
        let mut game = Game::new(GameConfig::new(27).with_players(["a", "b"])).unwrap();

        let err = game.deal_hands().unwrap_err();
        assert!(matches!(
            err,
            GameError::Deck(DeckError::InsufficientCards { needed: 54, available: 52 })
        ));
        assert_eq!(game.deck().len(), 52);
    }

    #[test]
    fn test_unknown_player() {
        let mut game = Game::new(config()).unwrap();

        assert!(matches!(game.hand("zed"), Err(GameError::UnknownPlayer(_))));
        assert!(matches!(game.hand_mut("zed"), Err(GameError::UnknownPlayer(_))));
    }

    #[test]
    fn test_hand_mut_draw_and_discard() {
        let mut game = Game::new(config()).unwrap();

        let mut hand = game.hand_mut("a").unwrap();
        let card = hand.draw().unwrap();
        hand.discard(&card).unwrap();

        assert!(game.hand("a").unwrap().is_empty());
        assert!(game.deck().contains(&card));
    }

    #[test]
    fn test_saved_game() {
        let mut turn = TurnRecord::default();
        turn.insert("foo".to_string(), 1);
        let saved = TurnHistory::from_saved(vec![turn.clone()]);

        let mut game = Game::with_saved_game(config(), saved.clone()).unwrap();
        assert_eq!(game.history(), &saved);

        game.record_turn(turn);
        assert_eq!(game.history().len(), 2);
    }
}
