//! # Stumped: Guess-the-Cricketer Deduction Engine
//!
//! Stumped is the game core of a browser-style deduction game: a
//! hidden player must be identified within a limited number of
//! guesses, and every guess earns deterministic per-attribute
//! feedback (exact hit, numeric direction, categorical miss).
//!
//! The crate covers the **record store** (the candidate pool) and the
//! **guess engine** (feedback scoring plus round state). Rendering,
//! animations, autocomplete UI and the rest of the presentation layer
//! are consumers of these outputs, not part of them; every public
//! output type derives `Serialize` so a WASM or HTTP boundary can
//! pass it through unchanged.
//!
//! ## Example Usage
//!
//! ```rust
//! use stumped::player::{PlayerRecord, PlayerStore};
//! use stumped::round::{Round, RoundStatus};
//! use stumped::GameConfig;
//!
//! # fn main() -> stumped::Result<()> {
//! let store = PlayerStore::from_records(vec![
//!     PlayerRecord::builder("Shane Warne", "Australia", "Bowler")
//!         .matches(339)
//!         .wickets(1001)
//!         .era("Classic")
//!         .build(),
//!     PlayerRecord::builder("Virat Kohli", "India", "Batsman")
//!         .matches(550)
//!         .runs(27599)
//!         .era("Modern")
//!         .build(),
//! ])?;
//!
//! let secret = store.find_by_name("Virat Kohli").unwrap().clone();
//! let mut round = Round::with_secret(secret, &GameConfig::new());
//!
//! let result = round.submit_guess(&store, "Shane Warne")?;
//! assert_eq!(result.attempts_remaining, 5);
//!
//! round.submit_guess(&store, "virat kohli")?;
//! assert_eq!(round.status(), RoundStatus::Won);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod feedback;
pub mod player;
pub mod round;

pub use error::{Error, Result};

use player::PlayerStore;
use round::{GuessResult, Round};

const DEFAULT_MAX_ATTEMPTS: u32 = 6;
const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: u32,
    suggestion_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create the default configuration (6 attempts, 8 suggestions).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Set the attempt budget per round (clamped to at least 1).
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = if max_attempts == 0 { 1 } else { max_attempts };
        self
    }

    /// Set the autocomplete suggestion cap.
    #[must_use]
    pub const fn with_suggestion_limit(mut self, suggestion_limit: usize) -> Self {
        self.suggestion_limit = suggestion_limit;
        self
    }

    /// Get the attempt budget per round.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Get the autocomplete suggestion cap.
    #[must_use]
    pub const fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }
}

/// Game instance: a player store, a configuration, and the live round.
///
/// The facade a presentation layer holds. State changes only through
/// [`Game::guess`] and [`Game::new_round`].
#[derive(Debug)]
pub struct Game {
    store: PlayerStore,
    config: GameConfig,
    round: Round,
}

impl Game {
    /// Create a game and start its first round.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStore`] if the store holds no players.
    pub fn new(store: PlayerStore, config: GameConfig) -> Result<Self> {
        let round = Round::start(&store, &config)?;
        Ok(Self {
            store,
            config,
            round,
        })
    }

    /// Submit a guess by player name against the live round.
    ///
    /// # Errors
    ///
    /// Propagates the per-guess errors of [`Round::submit_guess`].
    pub fn guess(&mut self, input: &str) -> Result<GuessResult> {
        self.round.submit_guess(&self.store, input)
    }

    /// Suggest player names for a partial query, capped to the
    /// configured suggestion limit.
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        self.store.suggest(query, self.config.suggestion_limit)
    }

    /// Abandon the current round and start a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStore`] if the store holds no players.
    pub fn new_round(&mut self) -> Result<()> {
        self.round.reset(&self.store)
    }

    /// Get the live round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Get the player store.
    #[must_use]
    pub const fn store(&self) -> &PlayerStore {
        &self.store
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}
