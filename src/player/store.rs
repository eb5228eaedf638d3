//! Player Store - in-memory storage for the candidate pool
//!
//! This module provides the storage layer for the guessing pool,
//! loaded once at startup and immutable afterwards.
//!
//! ## Design
//!
//! The store keeps records in load order in a vector (stable iteration
//! for suggestions) with a lowercased-name index for O(1) lookups.

use std::collections::HashMap;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};

use super::PlayerRecord;

/// In-memory store for the candidate player pool.
///
/// ## Example
///
/// ```rust
/// use stumped::player::{PlayerRecord, PlayerStore};
///
/// # fn main() -> stumped::Result<()> {
/// let store = PlayerStore::from_records(vec![
///     PlayerRecord::builder("Shane Warne", "Australia", "Bowler").build(),
///     PlayerRecord::builder("Brian Lara", "West Indies", "Batsman").build(),
/// ])?;
///
/// assert_eq!(store.len(), 2);
/// assert!(store.find_by_name("brian lara").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PlayerStore {
    players: Vec<PlayerRecord>,
    by_name: HashMap<String, usize>,
}

impl PlayerStore {
    /// Build a store from already-constructed records.
    ///
    /// Iteration order (and therefore suggestion order) is the input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Data`] on a blank name or a duplicate name
    /// (names are unique case-insensitively).
    pub fn from_records(records: Vec<PlayerRecord>) -> Result<Self> {
        let mut players = Vec::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());

        for record in records {
            if record.name().trim().is_empty() {
                return Err(Error::Data("player name is blank".to_string()));
            }
            let key = record.key();
            if by_name.contains_key(&key) {
                return Err(Error::Data(format!(
                    "duplicate player name: {:?}",
                    record.name()
                )));
            }
            by_name.insert(key, players.len());
            players.push(record);
        }

        debug!(count = players.len(), "player store built");
        Ok(Self { players, by_name })
    }

    /// Parse a store from a JSON array of player objects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the source is malformed (bad JSON,
    /// missing field, wrong type) and [`Error::Data`] on duplicate or
    /// blank names. Either failure aborts the whole load.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<PlayerRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a store from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file is unreadable, otherwise the
    /// same errors as [`PlayerStore::from_json_str`].
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check if the store holds no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get the number of players in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Iterate over all players in load order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter()
    }

    /// Look up a player by name, case-insensitively (exact match).
    #[must_use]
    pub fn find_by_name(&self, query: &str) -> Option<&PlayerRecord> {
        self.by_name
            .get(&query.to_lowercase())
            .map(|&idx| &self.players[idx])
    }

    /// Pick a secret uniformly at random from the pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStore`] if no players are loaded.
    pub fn pick_random(&self) -> Result<&PlayerRecord> {
        self.pick_random_with(&mut rand::thread_rng())
    }

    /// Pick a secret uniformly at random using the caller's RNG.
    ///
    /// The seam for deterministic selection (seeded RNGs in tests,
    /// date-derived RNGs for daily-challenge callers).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStore`] if no players are loaded.
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&PlayerRecord> {
        self.players.choose(rng).ok_or(Error::EmptyStore)
    }

    /// Suggest player names matching a partial query.
    ///
    /// Case-insensitive substring match over names, capped to `limit`,
    /// in store iteration order (stable, not relevance-ranked). A
    /// blank query yields no suggestions.
    #[must_use]
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.players
            .iter()
            .filter(|p| p.key().contains(&needle))
            .map(PlayerRecord::name)
            .take(limit)
            .collect()
    }
}
