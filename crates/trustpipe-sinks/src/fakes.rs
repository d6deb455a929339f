//! In-memory fakes for sink traits (testing only)
//!
//! Provides `MemoryAuditSink` and `MemoryMetricSink` that satisfy the trait
//! contracts without any external dependencies, plus `FailingAuditSink` and
//! `FailingMetricSink` for exercising the supervisor's failure tolerance.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::SinkError;
use crate::traits::*;

// ---------------------------------------------------------------------------
// MemoryAuditSink
// ---------------------------------------------------------------------------

/// In-memory audit sink backed by a `HashMap<request_id, record>`.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve a stored record by request id.
    pub fn get(&self, request_id: &str) -> Option<serde_json::Value> {
        let records = self.records.lock().unwrap();
        records.get(request_id).cloned()
    }

    /// Number of records written so far.
    pub fn len(&self) -> usize {
        let records = self.records.lock().unwrap();
        records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn write(&self, request_id: &str, record: &serde_json::Value) -> SinkResult<()> {
        let mut records = self.records.lock().unwrap();
        records.insert(request_id.to_string(), record.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryMetricSink
// ---------------------------------------------------------------------------

/// In-memory metric sink that appends every emitted point to a `Vec`.
#[derive(Debug, Default)]
pub struct MemoryMetricSink {
    points: Mutex<Vec<MetricPoint>>,
}

impl MemoryMetricSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All points emitted so far, in emission order.
    pub fn points(&self) -> Vec<MetricPoint> {
        let points = self.points.lock().unwrap();
        points.clone()
    }

    /// Points matching the given metric name.
    pub fn points_named(&self, name: &str) -> Vec<MetricPoint> {
        self.points().into_iter().filter(|p| p.name == name).collect()
    }
}

#[async_trait]
impl MetricSink for MemoryMetricSink {
    async fn emit(
        &self,
        name: &str,
        value: f64,
        unit: Option<&str>,
        tags: &serde_json::Value,
    ) -> SinkResult<()> {
        let mut points = self.points.lock().unwrap();
        points.push(MetricPoint {
            name: name.to_string(),
            value,
            unit: unit.map(String::from),
            tags: tags.clone(),
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Failing sinks
// ---------------------------------------------------------------------------

/// Audit sink whose every write fails. Used to test failure tolerance.
#[derive(Debug, Default)]
pub struct FailingAuditSink;

#[async_trait]
impl AuditSink for FailingAuditSink {
    async fn write(&self, request_id: &str, _record: &serde_json::Value) -> SinkResult<()> {
        Err(SinkError::Write(format!(
            "simulated write failure for {request_id}"
        )))
    }
}

/// Metric sink whose every emit fails. Used to test failure tolerance.
#[derive(Debug, Default)]
pub struct FailingMetricSink;

#[async_trait]
impl MetricSink for FailingMetricSink {
    async fn emit(
        &self,
        name: &str,
        _value: f64,
        _unit: Option<&str>,
        _tags: &serde_json::Value,
    ) -> SinkResult<()> {
        Err(SinkError::Write(format!("simulated emit failure for {name}")))
    }
}
