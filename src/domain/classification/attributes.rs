//! Feature extraction for learning examples.

use serde::{Deserialize, Serialize};

use super::classifier::{word_count, Classification, ResponseClassifier};

/// Features derived from a single response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAttributes {
    /// 1.0 positive, 0.0 neutral, -1.0 negative.
    pub sentiment: f64,
    /// Number of characters in the raw text.
    pub length: usize,
    /// Whether the text contains a question mark.
    pub has_question: bool,
    /// Number of space-separated words.
    pub word_count: usize,
}

/// Derives [`ResponseAttributes`] from response text.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeExtractor {
    classifier: ResponseClassifier,
}

impl AttributeExtractor {
    pub fn new(classifier: ResponseClassifier) -> Self {
        Self { classifier }
    }

    /// Classifies `text` once and extracts its attributes.
    pub fn extract(&self, text: &str) -> ResponseAttributes {
        self.extract_with(text, self.classifier.classify(text))
    }

    /// Extracts attributes reusing an existing classification of `text`.
    pub fn extract_with(&self, text: &str, classification: Classification) -> ResponseAttributes {
        ResponseAttributes {
            sentiment: classification.sentiment(),
            length: text.chars().count(),
            has_question: text.contains('?'),
            word_count: word_count(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_features() {
        let text = "I loved that day! Did you have fun?";
        let attributes = AttributeExtractor::default().extract(text);

        assert_eq!(attributes.sentiment, 1.0);
        assert_eq!(attributes.length, text.chars().count());
        assert!(attributes.has_question);
        assert_eq!(attributes.word_count, text.split(' ').count());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let text = "I’d add a zip line";
        let attributes = AttributeExtractor::default().extract(text);
        assert_eq!(attributes.length, 18);
        assert!(text.len() > attributes.length);
    }

    #[test]
    fn sentiment_follows_classification() {
        let extractor = AttributeExtractor::default();
        assert_eq!(extractor.extract("It was okay, I guess.").sentiment, 0.0);
        assert_eq!(extractor.extract("Nah, nothing special, whatever.").sentiment, -1.0);
    }

    #[test]
    fn extract_with_uses_the_given_classification() {
        let attributes =
            AttributeExtractor::default().extract_with("anything", Classification::Negative);
        assert_eq!(attributes.sentiment, -1.0);
        assert!(!attributes.has_question);
        assert_eq!(attributes.word_count, 1);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let attributes = AttributeExtractor::default().extract("Really? Yes.");
        let json = serde_json::to_value(attributes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sentiment": 0.0,
                "length": 12,
                "hasQuestion": true,
                "wordCount": 2
            })
        );
    }
}
