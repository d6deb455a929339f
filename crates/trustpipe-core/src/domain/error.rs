//! Domain-level error taxonomy for trustpipe.

/// Errors produced by the LLM invocation boundary.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("model error: {0}")]
    Model(String),

    #[error("missing credentials: {0}")]
    MissingCredentials(String),
}

/// trustpipe domain errors.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A stage's LLM invocation failed. Fatal to the run, never retried.
    /// Carries the request id so the caller can correlate the failure with
    /// the partial audit trail.
    #[error("stage {stage} failed: {message}")]
    StageFailed {
        request_id: String,
        stage: String,
        message: String,
    },

    #[error("task must be a non-empty string")]
    EmptyTask,

    #[error("invocation error: {0}")]
    Invoke(#[from] InvokeError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for trustpipe domain operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_failed_display_names_the_stage() {
        let err = PipelineError::StageFailed {
            request_id: "req-1".to_string(),
            stage: "Manager".to_string(),
            message: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Manager"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_invoke_error_converts_into_pipeline_error() {
        let err: PipelineError = InvokeError::Transport("timed out".to_string()).into();
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_empty_task_display() {
        assert!(PipelineError::EmptyTask.to_string().contains("non-empty"));
    }
}
