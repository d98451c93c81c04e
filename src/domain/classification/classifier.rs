//! Heuristic response classifier.
//!
//! Scores free text against fixed keyword lexicons plus length and
//! punctuation adjustments, then maps the score onto three bands.
//! Scores are accumulated in tenths so the band boundaries are exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keywords worth +1.0 each.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "great",
    "love",
    "awesome",
    "fun",
    "amazing",
    "happy",
    "excited",
    "cool",
    "fantastic",
];

/// Keywords worth -1.0 each.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "no",
    "nah",
    "boring",
    "whatever",
    "not really",
    "bad",
    "sorry",
    "hate",
];

/// Keywords worth +0.5 each.
pub const EMOTIONAL_KEYWORDS: &[&str] = &["heart", "feel", "memory", "special", "deep", "personal"];

/// Keywords worth +0.3 each.
pub const ENGAGEMENT_KEYWORDS: &[&str] = &["you", "we", "us", "?", "tell", "share"];

const POSITIVE_WEIGHT: i32 = 10;
const NEGATIVE_WEIGHT: i32 = -10;
const EMOTIONAL_WEIGHT: i32 = 5;
const ENGAGEMENT_WEIGHT: i32 = 3;

const LONG_ANSWER_WORDS: usize = 20;
const SHORT_ANSWER_WORDS: usize = 5;
const LONG_ANSWER_BONUS: i32 = 5;
const SHORT_ANSWER_PENALTY: i32 = -5;

const EXCLAMATION_BONUS: i32 = 2;
const TRAILING_OFF_PENALTY: i32 = -2;

/// Scores above this are positive.
const POSITIVE_ABOVE: i32 = 8;
/// Scores at or above this (and not positive) are neutral.
const NEUTRAL_FROM: i32 = -5;

/// The three-way label assigned to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Positive,
    Neutral,
    Negative,
}

impl Classification {
    /// Returns the label used as an edge key in the graph.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Positive => "positive",
            Classification::Neutral => "neutral",
            Classification::Negative => "negative",
        }
    }

    /// Returns the numeric sentiment: 1.0, 0.0 or -1.0.
    pub fn sentiment(&self) -> f64 {
        match self {
            Classification::Positive => 1.0,
            Classification::Neutral => 0.0,
            Classification::Negative => -1.0,
        }
    }

    /// Maps a score in tenths onto a band.
    fn from_tenths(tenths: i32) -> Self {
        if tenths > POSITIVE_ABOVE {
            Classification::Positive
        } else if tenths >= NEUTRAL_FROM {
            Classification::Neutral
        } else {
            Classification::Negative
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A classification together with the score that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationScore {
    tenths: i32,
    classification: Classification,
}

impl ClassificationScore {
    /// The raw score.
    pub fn value(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }
}

/// Counts space-separated words, ignoring empty segments.
pub fn word_count(text: &str) -> usize {
    text.split(' ').filter(|segment| !segment.is_empty()).count()
}

/// Deterministic keyword scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseClassifier;

impl ResponseClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies `text`.
    pub fn classify(&self, text: &str) -> Classification {
        self.score(text).classification()
    }

    /// Scores `text` and classifies the result.
    pub fn score(&self, text: &str) -> ClassificationScore {
        let lowered = text.to_lowercase();
        let mut tenths = 0;

        tenths += keyword_hits(&lowered, POSITIVE_KEYWORDS) * POSITIVE_WEIGHT;
        tenths += keyword_hits(&lowered, NEGATIVE_KEYWORDS) * NEGATIVE_WEIGHT;
        tenths += keyword_hits(&lowered, EMOTIONAL_KEYWORDS) * EMOTIONAL_WEIGHT;
        tenths += keyword_hits(&lowered, ENGAGEMENT_KEYWORDS) * ENGAGEMENT_WEIGHT;

        let words = word_count(text);
        if words > LONG_ANSWER_WORDS {
            tenths += LONG_ANSWER_BONUS;
        } else if words < SHORT_ANSWER_WORDS {
            tenths += SHORT_ANSWER_PENALTY;
        }

        if text.contains('!') {
            tenths += EXCLAMATION_BONUS;
        }
        if text.contains("...") || text.contains(":(") {
            tenths += TRAILING_OFF_PENALTY;
        }

        let classification = Classification::from_tenths(tenths);
        tracing::debug!(
            score = f64::from(tenths) / 10.0,
            words,
            classification = %classification,
            "response scored"
        );

        ClassificationScore {
            tenths,
            classification,
        }
    }
}

fn keyword_hits(lowered: &str, keywords: &[&str]) -> i32 {
    keywords
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count() as i32
}
