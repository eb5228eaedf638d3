//! Per-attribute guess feedback
//!
//! Every guess is scored against the secret attribute by attribute, in
//! a fixed order. Numeric attributes carry direction (is the target
//! higher or lower than the guess); categorical attributes are a
//! binary hit or miss. Nothing softer than that: no proximity scoring,
//! no "same country, different role" hints. The reference game keeps
//! feedback this blunt and so do we.

use serde::{Deserialize, Serialize};

use crate::player::PlayerRecord;

/// The scored attributes, in display order.
///
/// The name is the record's identity, not an attribute; it never
/// appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    /// Country the player represented (categorical)
    Country,
    /// Playing role (categorical)
    Role,
    /// Career match count (numeric)
    Matches,
    /// Career run tally (numeric)
    Runs,
    /// Career wicket tally (numeric)
    Wickets,
    /// Batting average (numeric)
    Average,
    /// Era label (categorical)
    Era,
}

/// How an attribute compares: ordered numbers or labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeKind {
    /// Comparable by ordering; mismatches carry direction
    Numeric,
    /// Comparable by equality only
    Categorical,
}

/// Feedback for one attribute of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// Guessed value equals the secret's value
    Exact,
    /// Numeric miss: the target value is higher than the guess
    Higher,
    /// Numeric miss: the target value is lower than the guess
    Lower,
    /// Categorical miss
    Mismatch,
}

/// One attribute's feedback, paired with the attribute it scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFeedback {
    /// The attribute that was compared
    pub attribute: Attribute,
    /// The comparison outcome
    pub feedback: Feedback,
}

impl Attribute {
    /// All scored attributes, in the fixed display order.
    pub const ALL: [Self; 7] = [
        Self::Country,
        Self::Role,
        Self::Matches,
        Self::Runs,
        Self::Wickets,
        Self::Average,
        Self::Era,
    ];

    /// The attribute's comparison kind.
    #[must_use]
    pub const fn kind(self) -> AttributeKind {
        match self {
            Self::Country | Self::Role | Self::Era => AttributeKind::Categorical,
            Self::Matches | Self::Runs | Self::Wickets | Self::Average => AttributeKind::Numeric,
        }
    }

    /// Score one attribute of a guess against the secret.
    #[must_use]
    pub fn score(self, guess: &PlayerRecord, secret: &PlayerRecord) -> Feedback {
        match self {
            Self::Country => label_feedback(guess.country(), secret.country()),
            Self::Role => label_feedback(guess.role(), secret.role()),
            Self::Era => label_feedback(guess.era(), secret.era()),
            Self::Matches => count_feedback(guess.matches(), secret.matches()),
            Self::Runs => count_feedback(guess.runs(), secret.runs()),
            Self::Wickets => count_feedback(guess.wickets(), secret.wickets()),
            Self::Average => rate_feedback(guess.average(), secret.average()),
        }
    }
}

impl Feedback {
    /// Whether this feedback is an exact hit.
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }
}

/// Score a full guess against the secret, every attribute in order.
#[must_use]
pub fn evaluate(guess: &PlayerRecord, secret: &PlayerRecord) -> Vec<AttributeFeedback> {
    Attribute::ALL
        .into_iter()
        .map(|attribute| AttributeFeedback {
            attribute,
            feedback: attribute.score(guess, secret),
        })
        .collect()
}

fn label_feedback(guess: &str, secret: &str) -> Feedback {
    if guess == secret {
        Feedback::Exact
    } else {
        Feedback::Mismatch
    }
}

fn count_feedback(guess: u32, secret: u32) -> Feedback {
    match guess.cmp(&secret) {
        std::cmp::Ordering::Equal => Feedback::Exact,
        std::cmp::Ordering::Less => Feedback::Higher,
        std::cmp::Ordering::Greater => Feedback::Lower,
    }
}

fn rate_feedback(guess: f64, secret: f64) -> Feedback {
    match guess.total_cmp(&secret) {
        std::cmp::Ordering::Equal => Feedback::Exact,
        std::cmp::Ordering::Less => Feedback::Higher,
        std::cmp::Ordering::Greater => Feedback::Lower,
    }
}
