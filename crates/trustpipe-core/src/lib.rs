//! trustpipe Core Library
//!
//! Coordinates a fixed three-stage agent pipeline (plan -> implement ->
//! verify) for a single task, screens the final text for hallucination
//! indicators, and produces a confidence score used to flag untrustworthy
//! output before it reaches a caller.

pub mod domain;
pub mod invoker;
pub mod metrics;
pub mod obs;
pub mod pipeline;
pub mod supervisor;
pub mod telemetry;
pub mod validation;

pub use domain::{
    ExecutionRecord, InvokeError, PipelineError, RecordStatus, Result, ValidationReport,
    ValidationStatus,
};

pub use invoker::{LlmInvoker, OpenAiConfig, OpenAiInvoker, ScriptedInvoker};

pub use pipeline::{
    AgentProfile, PipelineCoordinator, PipelineOutcome, PipelineState, StageFailure, StageResult,
    StageRole, StageRunner, StageSpec,
};

pub use supervisor::ExecutionSupervisor;

pub use validation::{calculate_confidence, validate_response, ConfidenceLevel, PatternLibrary};

pub use metrics::METRICS;
pub use obs::{
    emit_execution_finished, emit_low_confidence, emit_sink_write_error, emit_stage_finished,
    emit_task_accepted,
};
pub use telemetry::init_tracing;

/// trustpipe version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
