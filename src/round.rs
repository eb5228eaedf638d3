//! Round state machine: secret, attempt budget, guess log, status
//!
//! A `Round` is one play session. It owns the secret for its whole
//! lifetime, burns one attempt per resolved guess, and goes terminal
//! on a win or on the last miss. Input errors (blank input, unknown
//! names) are rejected before the attempt counter moves, so a typo
//! never costs the player a turn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::feedback::{self, AttributeFeedback};
use crate::player::{PlayerRecord, PlayerStore};
use crate::GameConfig;

/// Status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Round is live and accepting guesses.
    InProgress,
    /// Secret identified within the attempt budget.
    Won,
    /// Attempt budget exhausted without identifying the secret.
    Lost,
}

impl RoundStatus {
    /// Whether the round has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Everything a caller learns from one accepted guess.
///
/// Returned (and logged) for every consumed attempt, terminal or not;
/// the caller inspects [`Round::status`] for terminal handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessResult {
    /// The resolved guessed record
    pub player: PlayerRecord,
    /// Per-attribute feedback, in fixed attribute order
    pub feedback: Vec<AttributeFeedback>,
    /// Attempts left after this guess
    pub attempts_remaining: u32,
}

/// Terminal report for a finished round.
///
/// A win reveals the secret and the attempts it took; a loss reveals
/// the secret only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Secret identified.
    Won {
        /// The secret's name
        player: String,
        /// Attempts consumed to find it
        attempts_used: u32,
    },
    /// Budget exhausted.
    Lost {
        /// The secret's name
        player: String,
    },
}

/// One play session against a hidden secret player.
#[derive(Debug, Clone)]
pub struct Round {
    secret: PlayerRecord,
    max_attempts: u32,
    attempts_remaining: u32,
    status: RoundStatus,
    guesses: Vec<GuessResult>,
    started_at: DateTime<Utc>,
}

impl Round {
    /// Start a round with a uniformly random secret from the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStore`] if the store holds no players.
    pub fn start(store: &PlayerStore, config: &GameConfig) -> Result<Self> {
        let secret = store.pick_random()?.clone();
        Ok(Self::with_secret(secret, config))
    }

    /// Start a round against a known secret.
    ///
    /// The seam for scripted play (seeded daily challenges, tests).
    /// Callers normally pass a record taken from the same store they
    /// resolve guesses against.
    #[must_use]
    pub fn with_secret(secret: PlayerRecord, config: &GameConfig) -> Self {
        let max_attempts = config.max_attempts();
        Self {
            secret,
            max_attempts,
            attempts_remaining: max_attempts,
            status: RoundStatus::InProgress,
            guesses: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Get the round status.
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Get the attempts left in this round.
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Get the round's attempt budget.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Get the attempts consumed so far.
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.max_attempts - self.attempts_remaining
    }

    /// Get the log of accepted guesses, oldest first.
    #[must_use]
    pub fn guesses(&self) -> &[GuessResult] {
        &self.guesses
    }

    /// Get the instant the round started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Get the terminal report, once the round has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.status {
            RoundStatus::InProgress => None,
            RoundStatus::Won => Some(RoundOutcome::Won {
                player: self.secret.name().to_string(),
                attempts_used: self.attempts_used(),
            }),
            RoundStatus::Lost => Some(RoundOutcome::Lost {
                player: self.secret.name().to_string(),
            }),
        }
    }

    /// Submit a guess by player name.
    ///
    /// Resolves the name against `store`, consumes one attempt,
    /// scores every attribute against the secret and appends the
    /// result to the guess log. Transitions to [`RoundStatus::Won`]
    /// on an identity match, to [`RoundStatus::Lost`] when the last
    /// attempt misses.
    ///
    /// # Errors
    ///
    /// - [`Error::RoundOver`] if the round already ended (no state
    ///   change)
    /// - [`Error::EmptyInput`] on blank input (no attempt consumed)
    /// - [`Error::UnknownPlayer`] if the name resolves to no record
    ///   (no attempt consumed)
    pub fn submit_guess(&mut self, store: &PlayerStore, input: &str) -> Result<GuessResult> {
        if self.status.is_terminal() {
            return Err(Error::RoundOver(self.status));
        }

        let name = input.trim();
        if name.is_empty() {
            return Err(Error::EmptyInput);
        }

        let guessed = store
            .find_by_name(name)
            .ok_or_else(|| Error::UnknownPlayer(name.to_string()))?
            .clone();

        // Input is valid from here on: the attempt is spent even on a miss.
        self.attempts_remaining -= 1;

        let feedback = feedback::evaluate(&guessed, &self.secret);
        let hit = guessed.is_same_player(&self.secret);

        if hit {
            self.status = RoundStatus::Won;
            info!(
                player = %self.secret.name(),
                attempts_used = self.attempts_used(),
                "round won"
            );
        } else if self.attempts_remaining == 0 {
            self.status = RoundStatus::Lost;
            info!(player = %self.secret.name(), "round lost");
        } else {
            debug!(
                guess = %guessed.name(),
                attempts_remaining = self.attempts_remaining,
                "guess missed"
            );
        }

        let result = GuessResult {
            player: guessed,
            feedback,
            attempts_remaining: self.attempts_remaining,
        };
        self.guesses.push(result.clone());

        Ok(result)
    }

    /// Reset the round: fresh random secret, full attempt budget,
    /// empty guess log, back to [`RoundStatus::InProgress`]. Valid
    /// from any state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStore`] if the store holds no players.
    pub fn reset(&mut self, store: &PlayerStore) -> Result<()> {
        self.secret = store.pick_random()?.clone();
        self.attempts_remaining = self.max_attempts;
        self.status = RoundStatus::InProgress;
        self.guesses.clear();
        self.started_at = Utc::now();
        debug!("round reset");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> &PlayerRecord {
        &self.secret
    }
}
