//! Fixed three-stage pipeline: plan, implement, verify.
//!
//! # Module layout
//!
//! - [`stage`] — `StageRole`, `AgentProfile`, `StageSpec`, `StageResult`
//! - [`runner`] — `StageRunner::run_stage`, one model call per stage
//! - [`coordinator`] — `PipelineCoordinator::execute`, strict Manager ->
//!   Developer -> Tester ordering with fail-fast abort

pub mod coordinator;
pub mod runner;
pub mod stage;

pub use coordinator::{PipelineCoordinator, PipelineOutcome, PipelineState, StageFailure};
pub use runner::StageRunner;
pub use stage::{AgentProfile, StageResult, StageRole, StageSpec};
