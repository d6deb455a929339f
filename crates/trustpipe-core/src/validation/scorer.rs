//! Final confidence scoring.
//!
//! A second, independent blending step over the validator's partial
//! confidence: length and citation signals are intentionally weighted in
//! again even though the validator already partially captures them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::record::ValidationReport;

const VALIDATION_WEIGHT: f64 = 0.5;
const LENGTH_WEIGHT: f64 = 0.2;
const CITATION_WEIGHT: f64 = 0.3;
const FULL_LENGTH_WORDS: f64 = 200.0;
const CITED_SCORE: f64 = 0.8;
const UNCITED_SCORE: f64 = 0.6;

/// Human-readable confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Band for a final confidence value.
    pub fn from_confidence(confidence: f64) -> ConfidenceLevel {
        if confidence >= 0.85 {
            ConfidenceLevel::VeryHigh
        } else if confidence >= 0.70 {
            ConfidenceLevel::High
        } else if confidence >= 0.50 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Compute the final confidence for a response, in [0, 1], rounded to two
/// decimal places.
///
/// `validation_confidence * 0.5 + length_score * 0.2 + citation_score * 0.3`
/// where `length_score = min(words / 200, 1.0)` and `citation_score` is 0.8
/// when the text contains a single or double quote, else 0.6.
pub fn calculate_confidence(response: &str, validation: &ValidationReport) -> f64 {
    let word_count = response.split_whitespace().count() as f64;
    let length_score = (word_count / FULL_LENGTH_WORDS).min(1.0);
    let citation_score = if response.contains(['"', '\'']) {
        CITED_SCORE
    } else {
        UNCITED_SCORE
    };

    let confidence = validation.confidence * VALIDATION_WEIGHT
        + length_score * LENGTH_WEIGHT
        + citation_score * CITATION_WEIGHT;

    debug!(
        validation = validation.confidence,
        length_score,
        citation_score,
        confidence,
        "confidence calculated"
    );

    (confidence * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::ValidationStatus;

    fn report(confidence: f64) -> ValidationReport {
        ValidationReport {
            status: ValidationStatus::Passed,
            issues: vec![],
            confidence,
            issue_count: 0,
        }
    }

    #[test]
    fn test_full_length_cited_clean_text_scores_094() {
        // 250 words with a quote: length_score 1.0, citation 0.8, validation 1.0
        let text = format!("\"cited\" {}", "word ".repeat(249));
        let confidence = calculate_confidence(&text, &report(1.0));
        assert_eq!(confidence, 0.94);
    }

    #[test]
    fn test_uncited_text_uses_lower_citation_score() {
        // 200+ words, no quote characters at all
        let text = "word ".repeat(250);
        let confidence = calculate_confidence(&text, &report(1.0));
        // 1.0*0.5 + 1.0*0.2 + 0.6*0.3 = 0.88
        assert_eq!(confidence, 0.88);
    }

    #[test]
    fn test_length_score_scales_below_200_words() {
        let text = "'quoted' ".repeat(50); // 50 words, cited
        let confidence = calculate_confidence(&text, &report(1.0));
        // 1.0*0.5 + 0.25*0.2 + 0.8*0.3 = 0.79
        assert_eq!(confidence, 0.79);
    }

    #[test]
    fn test_output_always_within_unit_interval() {
        let empty = calculate_confidence("", &report(0.0));
        assert!((0.0..=1.0).contains(&empty));

        let max = calculate_confidence(&"\"w\" ".repeat(300), &report(1.0));
        assert!((0.0..=1.0).contains(&max));
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        let text = "one two three"; // 3 words: length_score 0.015
        let confidence = calculate_confidence(text, &report(1.0));
        // 0.5 + 0.003 + 0.18 = 0.683 -> 0.68
        assert_eq!(confidence, 0.68);
    }

    #[test]
    fn test_deterministic() {
        let text = "some response 'with' a quote inside of it";
        let a = calculate_confidence(text, &report(0.85));
        let b = calculate_confidence(text, &report(0.85));
        assert_eq!(a, b);
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(ConfidenceLevel::from_confidence(0.94), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_confidence(0.85), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_confidence(0.75), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(0.60), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(0.40), ConfidenceLevel::Low);
    }
}
