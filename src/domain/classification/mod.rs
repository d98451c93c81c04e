//! Response classification module.
//!
//! Turns free-text answers into a three-way sentiment label and a small
//! feature record used by learning examples.

mod attributes;
mod classifier;

pub use attributes::{AttributeExtractor, ResponseAttributes};
pub use classifier::{
    word_count, Classification, ClassificationScore, ResponseClassifier, EMOTIONAL_KEYWORDS,
    ENGAGEMENT_KEYWORDS, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS,
};
