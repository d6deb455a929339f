//! Domain types shared across the trustpipe core.

pub mod error;
pub mod record;

pub use error::{InvokeError, PipelineError, Result};
pub use record::{
    ExecutionRecord, RecordStatus, ValidationReport, ValidationStatus, RESULT_TRUNCATE_CHARS,
};
