//! Player Record - one candidate entity in the guessing pool

use serde::{Deserialize, Serialize};

/// Player Record represents a single candidate player.
///
/// Records are immutable once loaded. The name is the record's
/// identity (unique, case-insensitive); every other field is a
/// comparable attribute the engine scores guesses against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    name: String,
    country: String,
    role: String,
    matches: u32,
    runs: u32,
    wickets: u32,
    average: f64,
    era: String,
}

impl PlayerRecord {
    /// Create a builder for constructing a player record.
    ///
    /// Stats default to zero and the era to `"Unknown"`; data loaded
    /// from a source always carries every field explicitly.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        country: impl Into<String>,
        role: impl Into<String>,
    ) -> PlayerRecordBuilder {
        PlayerRecordBuilder::new(name, country, role)
    }

    /// Get the player name (the record identity).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the country the player represented.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Get the playing role (e.g. Batsman, Bowler).
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Get the career match count.
    #[must_use]
    pub const fn matches(&self) -> u32 {
        self.matches
    }

    /// Get the career run tally.
    #[must_use]
    pub const fn runs(&self) -> u32 {
        self.runs
    }

    /// Get the career wicket tally.
    #[must_use]
    pub const fn wickets(&self) -> u32 {
        self.wickets
    }

    /// Get the batting average.
    #[must_use]
    pub const fn average(&self) -> f64 {
        self.average
    }

    /// Get the era label (e.g. Modern, Classic, Vintage).
    #[must_use]
    pub fn era(&self) -> &str {
        &self.era
    }

    /// Case-insensitive identity test against another record.
    #[must_use]
    pub fn is_same_player(&self, other: &Self) -> bool {
        self.key() == other.key()
    }

    /// Canonical lookup key: the lowercased name.
    pub(crate) fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Builder for `PlayerRecord`.
#[derive(Debug)]
pub struct PlayerRecordBuilder {
    name: String,
    country: String,
    role: String,
    matches: u32,
    runs: u32,
    wickets: u32,
    average: f64,
    era: String,
}

impl PlayerRecordBuilder {
    /// Create a new builder with the identity fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            role: role.into(),
            matches: 0,
            runs: 0,
            wickets: 0,
            average: 0.0,
            era: "Unknown".to_string(),
        }
    }

    /// Set the career match count.
    #[must_use]
    pub const fn matches(mut self, matches: u32) -> Self {
        self.matches = matches;
        self
    }

    /// Set the career run tally.
    #[must_use]
    pub const fn runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    /// Set the career wicket tally.
    #[must_use]
    pub const fn wickets(mut self, wickets: u32) -> Self {
        self.wickets = wickets;
        self
    }

    /// Set the batting average.
    #[must_use]
    pub const fn average(mut self, average: f64) -> Self {
        self.average = average;
        self
    }

    /// Set the era label.
    #[must_use]
    pub fn era(mut self, era: impl Into<String>) -> Self {
        self.era = era.into();
        self
    }

    /// Build the `PlayerRecord`.
    #[must_use]
    pub fn build(self) -> PlayerRecord {
        PlayerRecord {
            name: self.name,
            country: self.country,
            role: self.role,
            matches: self.matches,
            runs: self.runs,
            wickets: self.wickets,
            average: self.average,
            era: self.era,
        }
    }
}
