//! Validation and execution record types.
//!
//! An [`ExecutionRecord`] is constructed exactly once per pipeline run, by
//! the execution supervisor, and handed to the audit sink. It is never
//! mutated after handoff.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of characters of result text stored in an audit record.
pub const RESULT_TRUNCATE_CHARS: usize = 5000;

/// Outcome of hallucination validation over a response text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Passed,
    Flagged,
    Failed,
}

/// Report produced by the response validator. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub status: ValidationStatus,
    /// Issue descriptions in detection order.
    pub issues: Vec<String>,
    /// Partial confidence after heuristic deductions, clamped to [0, 1].
    pub confidence: f64,
    pub issue_count: usize,
}

/// Overall classification of a completed pipeline execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Validated,
    Flagged,
    Error,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Validated => "validated",
            RecordStatus::Flagged => "flagged",
            RecordStatus::Error => "error",
        }
    }
}

/// The single audit record produced per pipeline execution.
///
/// Success records carry the (truncated) result text, its content digest,
/// the final confidence and the validation report. Failure records omit
/// those fields and carry `error` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub request_id: String,
    pub task: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// SHA-256 hex digest of the stored result text, for audit integrity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub execution_time_ms: f64,
    pub timestamp: DateTime<Utc>,
    pub status: RecordStatus,
}

impl ExecutionRecord {
    /// Build a success record from a completed, validated pipeline run.
    ///
    /// The result text is truncated to [`RESULT_TRUNCATE_CHARS`] characters
    /// before storage; the digest covers the stored (truncated) text.
    pub fn success(
        request_id: String,
        task: String,
        context: Option<String>,
        result_text: &str,
        confidence: f64,
        validation: ValidationReport,
        execution_time_ms: f64,
    ) -> Self {
        let stored: String = result_text.chars().take(RESULT_TRUNCATE_CHARS).collect();
        let digest = content_digest(stored.as_bytes());
        let status = if validation.status == ValidationStatus::Passed {
            RecordStatus::Validated
        } else {
            RecordStatus::Flagged
        };
        Self {
            request_id,
            task,
            context,
            result: Some(stored),
            result_digest: Some(digest),
            confidence: Some(confidence),
            validation: Some(validation),
            error: None,
            execution_time_ms,
            timestamp: Utc::now(),
            status,
        }
    }

    /// Build a failure record for a run that aborted before producing output.
    pub fn failure(
        request_id: String,
        task: String,
        context: Option<String>,
        error: String,
        execution_time_ms: f64,
    ) -> Self {
        Self {
            request_id,
            task,
            context,
            result: None,
            result_digest: None,
            confidence: None,
            validation: None,
            error: Some(error),
            execution_time_ms,
            timestamp: Utc::now(),
            status: RecordStatus::Error,
        }
    }
}

/// SHA-256 hex digest of the given bytes.
fn content_digest(data: &[u8]) -> String {
    use sha2::Digest;
    let mut hasher = sha2::Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_report() -> ValidationReport {
        ValidationReport {
            status: ValidationStatus::Passed,
            issues: vec![],
            confidence: 1.0,
            issue_count: 0,
        }
    }

    #[test]
    fn test_success_record_classifies_passed_as_validated() {
        let record = ExecutionRecord::success(
            "req-1".to_string(),
            "task".to_string(),
            None,
            "result text",
            0.94,
            clean_report(),
            120.0,
        );
        assert_eq!(record.status, RecordStatus::Validated);
        assert_eq!(record.result.as_deref(), Some("result text"));
        assert!(record.error.is_none());
    }

    #[test]
    fn test_success_record_classifies_flagged_validation_as_flagged() {
        let report = ValidationReport {
            status: ValidationStatus::Flagged,
            issues: vec!["Found absolute claim pattern: absolute_claims".to_string()],
            confidence: 0.85,
            issue_count: 1,
        };
        let record = ExecutionRecord::success(
            "req-1".to_string(),
            "task".to_string(),
            None,
            "result",
            0.8,
            report,
            50.0,
        );
        assert_eq!(record.status, RecordStatus::Flagged);
    }

    #[test]
    fn test_result_truncated_to_limit() {
        let long = "x".repeat(RESULT_TRUNCATE_CHARS + 500);
        let record = ExecutionRecord::success(
            "req-1".to_string(),
            "task".to_string(),
            None,
            &long,
            0.9,
            clean_report(),
            10.0,
        );
        assert_eq!(
            record.result.as_ref().unwrap().chars().count(),
            RESULT_TRUNCATE_CHARS
        );
    }

    #[test]
    fn test_digest_covers_stored_text() {
        let a = ExecutionRecord::success(
            "r".to_string(),
            "t".to_string(),
            None,
            "same text",
            0.9,
            clean_report(),
            1.0,
        );
        let b = ExecutionRecord::success(
            "r2".to_string(),
            "t".to_string(),
            None,
            "same text",
            0.9,
            clean_report(),
            2.0,
        );
        assert_eq!(a.result_digest, b.result_digest);
        assert_eq!(a.result_digest.as_ref().unwrap().len(), 64);
    }

    #[test]
    fn test_failure_record_omits_result_fields_in_json() {
        let record = ExecutionRecord::failure(
            "req-1".to_string(),
            "task".to_string(),
            None,
            "stage Manager failed: boom".to_string(),
            42.0,
        );
        assert_eq!(record.status, RecordStatus::Error);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("result").is_none());
        assert!(json.get("confidence").is_none());
        assert!(json.get("validation").is_none());
        assert!(json["error"].as_str().unwrap().contains("boom"));
        assert_eq!(json["status"], "error");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(RecordStatus::Validated).unwrap(),
            "validated"
        );
        assert_eq!(
            serde_json::to_value(ValidationStatus::Flagged).unwrap(),
            "flagged"
        );
    }
}
