//! Hallucination detection and confidence scoring.
//!
//! # Module layout
//!
//! - [`patterns`] — the fixed indicator pattern library (pure data)
//! - [`validator`] — `validate_response`, heuristic issue detection
//! - [`scorer`] — `calculate_confidence`, final weighted blending

pub mod patterns;
pub mod scorer;
pub mod validator;

pub use patterns::{PatternCategory, PatternLibrary, CATEGORIES};
pub use scorer::{calculate_confidence, ConfidenceLevel};
pub use validator::validate_response;
