//! Execution supervision: one timed pipeline run, validated, scored,
//! classified, and recorded to the external sinks.
//!
//! The supervisor owns no global state. Its collaborators — the LLM
//! invoker, the audit sink and the metric sink — are injected at
//! construction, so concurrent supervisor runs share nothing but the sinks
//! (which accept concurrent, unordered writes keyed by request id).

use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;
use uuid::Uuid;

use trustpipe_sinks::{AuditSink, MetricSink};

use crate::domain::error::{PipelineError, Result};
use crate::domain::record::ExecutionRecord;
use crate::invoker::LlmInvoker;
use crate::metrics::METRICS;
use crate::obs;
use crate::pipeline::PipelineCoordinator;
use crate::validation::{calculate_confidence, validate_response, ConfidenceLevel};

/// Final confidence below this value raises a low-confidence alert.
const LOW_CONFIDENCE_THRESHOLD: f64 = 0.75;

const TASK_PREVIEW_CHARS: usize = 100;

/// Wraps one full pipeline run per invocation of [`ExecutionSupervisor::run`].
pub struct ExecutionSupervisor {
    invoker: Arc<dyn LlmInvoker>,
    audit: Arc<dyn AuditSink>,
    metrics: Arc<dyn MetricSink>,
}

impl ExecutionSupervisor {
    /// Create a supervisor with explicit collaborators.
    ///
    /// Deployments without an audit or metric backend pass the no-op sink
    /// implementations rather than an absent collaborator.
    pub fn new(
        invoker: Arc<dyn LlmInvoker>,
        audit: Arc<dyn AuditSink>,
        metrics: Arc<dyn MetricSink>,
    ) -> Self {
        Self {
            invoker,
            audit,
            metrics,
        }
    }

    /// Execute one task through the full pipeline.
    ///
    /// On success returns the assembled [`ExecutionRecord`], classified
    /// `validated` or `flagged`. On a stage failure, a best-effort failure
    /// record is written to the audit sink and the stage error propagates
    /// to the caller, carrying the same request id for correlation.
    ///
    /// Exactly one audit record is written per invocation, success or
    /// failure. Sink write failures are logged and swallowed; they never
    /// change the returned outcome.
    pub async fn run(
        &self,
        task: &str,
        context: Option<&str>,
        request_id: Option<String>,
    ) -> Result<ExecutionRecord> {
        if task.trim().is_empty() {
            return Err(PipelineError::EmptyTask);
        }

        let request_id = request_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let span = tracing::info_span!("trustpipe.request", request_id = %request_id);
        self.run_inner(task, context, request_id).instrument(span).await
    }

    async fn run_inner(
        &self,
        task: &str,
        context: Option<&str>,
        request_id: String,
    ) -> Result<ExecutionRecord> {
        let preview: String = task.chars().take(TASK_PREVIEW_CHARS).collect();
        obs::emit_task_accepted(&request_id, &preview);

        let start = Instant::now();

        match PipelineCoordinator::execute(self.invoker.as_ref(), task, context).await {
            Ok(outcome) => {
                let validation = validate_response(&outcome.final_text);
                let confidence = calculate_confidence(&outcome.final_text, &validation);
                let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                tracing::debug!(
                    confidence,
                    level = ?ConfidenceLevel::from_confidence(confidence),
                    issues = validation.issue_count,
                    "response scored"
                );

                if confidence < LOW_CONFIDENCE_THRESHOLD {
                    obs::emit_low_confidence(&request_id, confidence);
                    METRICS.inc_low_confidence_flags();
                    self.emit_metric(&request_id, "LowConfidenceAlerts", 1.0, None)
                        .await;
                }

                let record = ExecutionRecord::success(
                    request_id.clone(),
                    task.to_string(),
                    context.map(String::from),
                    &outcome.final_text,
                    confidence,
                    validation,
                    execution_time_ms,
                );

                self.write_audit(&record).await;
                self.emit_metric(
                    &request_id,
                    "ExecutionLatency",
                    execution_time_ms,
                    Some("Milliseconds"),
                )
                .await;

                METRICS.inc_pipelines_completed();
                obs::emit_execution_finished(&request_id, execution_time_ms, record.status.as_str());
                Ok(record)
            }
            Err(failure) => {
                let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                let error = PipelineError::StageFailed {
                    request_id: request_id.clone(),
                    stage: failure.stage.to_string(),
                    message: failure.message,
                };

                let record = ExecutionRecord::failure(
                    request_id.clone(),
                    task.to_string(),
                    context.map(String::from),
                    error.to_string(),
                    execution_time_ms,
                );
                self.write_audit(&record).await;

                METRICS.inc_pipelines_failed();
                obs::emit_execution_finished(&request_id, execution_time_ms, record.status.as_str());
                Err(error)
            }
        }
    }

    /// Best-effort audit write: serialization or sink failures are logged
    /// and counted, never surfaced.
    async fn write_audit(&self, record: &ExecutionRecord) {
        let value = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                obs::emit_sink_write_error(&record.request_id, &e);
                METRICS.inc_sink_write_errors();
                return;
            }
        };
        if let Err(e) = self.audit.write(&record.request_id, &value).await {
            obs::emit_sink_write_error(&record.request_id, &e);
            METRICS.inc_sink_write_errors();
        }
    }

    /// Best-effort metric emission, tagged with the request id.
    async fn emit_metric(&self, request_id: &str, name: &str, value: f64, unit: Option<&str>) {
        let tags = serde_json::json!({ "request_id": request_id });
        if let Err(e) = self.metrics.emit(name, value, unit, &tags).await {
            obs::emit_sink_write_error(request_id, &e);
            METRICS.inc_sink_write_errors();
        }
    }
}
