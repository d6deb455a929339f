//! Heuristic hallucination validation over a completed response text.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::record::{ValidationReport, ValidationStatus};
use crate::validation::patterns::PatternLibrary;

// Deduction weights and thresholds are fixed for compatibility with the
// historical scoring behavior; do not re-derive them.
const PATTERN_DEDUCTION: f64 = 0.15;
const CONTRADICTION_DEDUCTION: f64 = 0.10;
const SHORT_RESPONSE_DEDUCTION: f64 = 0.20;
const NO_QUOTES_DEDUCTION: f64 = 0.05;
const SHORT_RESPONSE_WORDS: usize = 20;
const QUOTE_CHECK_MIN_CHARS: usize = 200;
const MAX_CONTRADICTIONS: usize = 2;
const FAILED_ISSUE_THRESHOLD: usize = 3;

fn contradiction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // One match per sentence clause containing "but" or "however".
    RE.get_or_init(|| {
        Regex::new(r"[^.!?]*\b(?:but|however)\b[^.!?]*").expect("static pattern must compile")
    })
}

/// Validate a response text for hallucination indicators.
///
/// Pure function of the input text and the pattern library: deterministic,
/// no side effects. Issues appear in detection order; the partial
/// confidence starts at 1.0 and is reduced per finding, clamped at 0.0.
pub fn validate_response(response: &str) -> ValidationReport {
    let mut issues: Vec<String> = Vec::new();
    let mut confidence = 1.0_f64;

    // Indicator patterns: one deduction per matching pattern.
    for category in PatternLibrary::global().matching_categories(response) {
        issues.push(format!("Found absolute claim pattern: {category}"));
        confidence -= PATTERN_DEDUCTION;
    }

    // Contradiction clauses, capped at the first two.
    for _ in contradiction_regex()
        .find_iter(response)
        .take(MAX_CONTRADICTIONS)
    {
        issues.push("Potential contradiction detected".to_string());
        confidence -= CONTRADICTION_DEDUCTION;
    }

    // Too short to be a complete answer.
    if response.split_whitespace().count() < SHORT_RESPONSE_WORDS {
        issues.push("Response too short (may be incomplete)".to_string());
        confidence -= SHORT_RESPONSE_DEDUCTION;
    }

    // Long responses with no quoted sources at all.
    let has_quote = response.contains(['"', '\'', '`']);
    if !has_quote && response.chars().count() > QUOTE_CHECK_MIN_CHARS {
        issues.push("No quoted sources found".to_string());
        confidence -= NO_QUOTES_DEDUCTION;
    }

    let confidence = confidence.max(0.0);
    let issue_count = issues.len();
    let status = if issue_count > FAILED_ISSUE_THRESHOLD {
        ValidationStatus::Failed
    } else if issue_count > 0 {
        ValidationStatus::Flagged
    } else {
        ValidationStatus::Passed
    };

    ValidationReport {
        status,
        issues,
        confidence,
        issue_count,
    }
}
