//! Turn history carried by a game session.
//!
//! The session never interprets turn records. It only stores them, seeds
//! them from a previously saved game, and hands them back out.
//!
//! ## State Values (i64 only)
//!
//! A `TurnRecord` is a `FxHashMap<String, i64>`. To store non-integer values:
//! - Booleans: use 0/1
//! - Enums: use discriminant values
//! - Cards: use `Rank::index() * 4 + Suit::index()` (standard cards only)

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::GameError;

/// One opaque turn entry.
pub type TurnRecord = FxHashMap<String, i64>;

/// Ordered turn log, oldest first.
///
/// Backed by `im::Vector`, so snapshotting a session clones in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnHistory {
    turns: Vector<TurnRecord>,
}

impl TurnHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a previously saved game verbatim.
    #[must_use]
    pub fn from_saved(turns: impl IntoIterator<Item = TurnRecord>) -> Self {
        Self {
            turns: turns.into_iter().collect(),
        }
    }

    /// Append a turn.
    pub fn record(&mut self, turn: TurnRecord) {
        self.turns.push_back(turn);
    }

    /// Number of recorded turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Iterate over turns, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TurnRecord> {
        self.turns.iter()
    }

    /// Most recent turn.
    #[must_use]
    pub fn last(&self) -> Option<&TurnRecord> {
        self.turns.last()
    }

    /// Encode for the persistence layer.
    pub fn encode(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a blob produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(key: &str, value: i64) -> TurnRecord {
        let mut record = TurnRecord::default();
        record.insert(key.to_string(), value);
        record
    }

    #[test]
    fn test_new_is_empty() {
        let history = TurnHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
    }

    #[test]
    fn test_saved_game_is_kept_verbatim() {
        let saved = vec![turn("foo", 1), turn("bar", 2)];
        let history = TurnHistory::from_saved(saved.clone());

        let turns: Vec<_> = history.iter().cloned().collect();
        assert_eq!(turns, saved);
    }

    #[test]
    fn test_record_appends() {
        let mut history = TurnHistory::from_saved(vec![turn("foo", 1)]);
        history.record(turn("foo", 2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(&turn("foo", 2)));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut history = TurnHistory::new();
        history.record(turn("a", 1));

        let snapshot = history.clone();
        history.record(turn("b", 2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_encode_decode() {
        let history = TurnHistory::from_saved(vec![turn("foo", 1), turn("bar", -3)]);

        let bytes = history.encode().unwrap();
        let restored = TurnHistory::decode(&bytes).unwrap();

        assert_eq!(restored, history);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = TurnHistory::decode(&[1, 2, 3]);
        assert!(matches!(err, Err(GameError::Snapshot(_))));
    }
}
