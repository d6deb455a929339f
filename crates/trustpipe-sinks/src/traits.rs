//! Sink trait definitions for trustpipe
//!
//! These traits define the two external collaborators every pipeline
//! execution writes to:
//! - `AuditSink`: durable record store (one record per execution, keyed by request id)
//! - `MetricSink`: numeric metric emission (latency, alert counters)
//!
//! Both traits are async and backend-agnostic. Writes are best-effort from
//! the caller's perspective: the execution supervisor tolerates and logs
//! failures without changing the pipeline outcome. In-memory fakes are
//! provided for testing via the `fakes` module, and no-op implementations
//! via the `noop` module for deployments without a configured backend.

use async_trait::async_trait;

use crate::error::SinkError;

/// Result type for sink operations
pub type SinkResult<T> = std::result::Result<T, SinkError>;

/// Durable audit record store.
///
/// Guarantees expected from implementations:
/// - A write is atomic per `request_id`: concurrent writes for distinct
///   request ids need no coordination.
/// - Records are opaque JSON; the sink never inspects or mutates them.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Persist one execution record under the given request id.
    async fn write(&self, request_id: &str, record: &serde_json::Value) -> SinkResult<()>;
}

/// A single emitted metric data point.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPoint {
    /// Metric name (e.g. "ExecutionLatency", "LowConfidenceAlerts")
    pub name: String,
    /// Metric value
    pub value: f64,
    /// Optional unit label (e.g. "Milliseconds")
    pub unit: Option<String>,
    /// Arbitrary key-value tags
    pub tags: serde_json::Value,
}

/// Numeric metric emitter.
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Emit one metric data point.
    async fn emit(
        &self,
        name: &str,
        value: f64,
        unit: Option<&str>,
        tags: &serde_json::Value,
    ) -> SinkResult<()>;
}
