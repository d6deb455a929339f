//! No-op sink implementations.
//!
//! A deployment without a configured audit or metric backend uses these
//! instead of branching on `Option<sink>` throughout the pipeline: the
//! absent collaborator is modeled once, at construction time, as an
//! implementation that accepts and discards every write.

use async_trait::async_trait;
use tracing::trace;

use crate::traits::{AuditSink, MetricSink, SinkResult};

/// Audit sink that discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuditSink;

#[async_trait]
impl AuditSink for NoopAuditSink {
    async fn write(&self, request_id: &str, _record: &serde_json::Value) -> SinkResult<()> {
        trace!(request_id = %request_id, "audit record discarded (no sink configured)");
        Ok(())
    }
}

/// Metric sink that discards every data point.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetricSink;

#[async_trait]
impl MetricSink for NoopMetricSink {
    async fn emit(
        &self,
        name: &str,
        _value: f64,
        _unit: Option<&str>,
        _tags: &serde_json::Value,
    ) -> SinkResult<()> {
        trace!(metric = %name, "metric discarded (no sink configured)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn noop_sinks_accept_everything() {
        let audit = NoopAuditSink;
        let metric = NoopMetricSink;

        assert!(audit.write("req-1", &json!({"a": 1})).await.is_ok());
        assert!(metric
            .emit("ExecutionLatency", 42.0, Some("Milliseconds"), &json!({}))
            .await
            .is_ok());
    }
}
