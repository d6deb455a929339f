//! Structured observability hooks for pipeline execution lifecycle events.
//!
//! Emission functions for key lifecycle events: accepted, stage finished,
//! execution finished, low confidence, sink write error. The supervisor
//! wraps each run in a `trustpipe.request` span carrying the request id,
//! so events emitted inside a run omit it.
//!
//! Events are emitted at `info!` level; configure verbosity via `RUST_LOG`.

use tracing::info;

/// Emit event: task accepted for execution.
pub fn emit_task_accepted(request_id: &str, task_preview: &str) {
    info!(event = "execution.accepted", request_id = %request_id, task = %task_preview);
}

/// Emit event: one stage finished. The request id is carried by the
/// enclosing request span.
pub fn emit_stage_finished(stage: &str, success: bool) {
    info!(event = "execution.stage_finished", stage = %stage, success = success);
}

/// Emit event: full execution finished with timing and classification.
pub fn emit_execution_finished(request_id: &str, duration_ms: f64, status: &str) {
    info!(
        event = "execution.finished",
        request_id = %request_id,
        duration_ms = duration_ms,
        status = %status,
    );
}

/// Emit event: final confidence fell below the alert threshold (warning level).
pub fn emit_low_confidence(request_id: &str, confidence: f64) {
    tracing::warn!(event = "execution.low_confidence", request_id = %request_id, confidence = confidence);
}

/// Emit event: a best-effort sink write failed (warning level).
pub fn emit_sink_write_error(request_id: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "sink.write_error", request_id = %request_id, error = %error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emitters_do_not_panic_without_subscriber() {
        emit_task_accepted("req-1", "preview");
        emit_stage_finished("Manager", true);
        emit_execution_finished("req-1", 12.0, "validated");
        emit_low_confidence("req-1", 0.42);
        emit_sink_write_error("req-1", &"boom");
    }
}
