//! trustpipe-sinks
//!
//! External collaborator abstractions for the trustpipe pipeline:
//! the audit record store and the metric emitter. Both are consumed
//! through narrow async traits so backends can be swapped without
//! touching pipeline logic.

pub mod error;
pub mod fakes;
pub mod noop;
pub mod traits;

pub use error::SinkError;
pub use noop::{NoopAuditSink, NoopMetricSink};
pub use traits::{AuditSink, MetricPoint, MetricSink, SinkResult};
