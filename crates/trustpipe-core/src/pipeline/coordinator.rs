//! Sequential pipeline coordination across the three stages.

use std::time::Instant;

use tracing::info;

use crate::invoker::LlmInvoker;
use crate::pipeline::runner::StageRunner;
use crate::pipeline::stage::{StageRole, StageSpec};

/// Coordinator state. Advances strictly forward; `Failed` is terminal and
/// reachable from any `Running` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Pending,
    Running(StageRole),
    Completed,
    Failed(StageRole),
}

/// Identity and message of the stage that aborted a run.
#[derive(Debug, Clone)]
pub struct StageFailure {
    pub stage: StageRole,
    pub message: String,
    pub duration_ms: u64,
}

/// Successful pipeline output: the Tester stage's text, plus timing.
/// The two earlier stages' text is consumed internally and not returned.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub final_text: String,
    pub duration_ms: u64,
}

/// Drives the three stages in fixed order, threading each stage's output
/// forward as context for the next.
pub struct PipelineCoordinator;

impl PipelineCoordinator {
    /// Execute the full Manager -> Developer -> Tester pipeline.
    ///
    /// Each stage receives the original task (with context folded into the
    /// Manager spec) plus only the immediately preceding stage's output,
    /// which bounds prompt size. The first stage failure aborts the run;
    /// remaining stages are never invoked and no partial output is
    /// synthesized.
    pub async fn execute(
        invoker: &dyn LlmInvoker,
        task: &str,
        context: Option<&str>,
    ) -> Result<PipelineOutcome, StageFailure> {
        let start = Instant::now();
        let mut state = PipelineState::Pending;
        let mut prior_output: Option<String> = None;
        info!(state = ?state, task_chars = task.len(), "pipeline accepted");

        for role in StageRole::ORDERED {
            state = PipelineState::Running(role);
            info!(stage = %role, state = ?state, "stage started");

            let spec = StageSpec::for_role(role, task, context);
            let result = StageRunner::run_stage(&spec, prior_output.as_deref(), invoker).await;

            crate::obs::emit_stage_finished(&role.to_string(), result.succeeded);

            if !result.succeeded {
                state = PipelineState::Failed(role);
                let message = result
                    .error
                    .unwrap_or_else(|| "stage produced no output".to_string());
                info!(stage = %role, state = ?state, "pipeline aborted");
                return Err(StageFailure {
                    stage: role,
                    message,
                    duration_ms: start.elapsed().as_millis() as u64,
                });
            }

            prior_output = Some(result.output_text);
        }

        state = PipelineState::Completed;
        let duration_ms = start.elapsed().as_millis() as u64;
        info!(state = ?state, duration_ms, "pipeline completed");

        // ORDERED is non-empty, so the Tester output is always present here.
        let final_text = prior_output.unwrap_or_default();
        Ok(PipelineOutcome {
            final_text,
            duration_ms,
        })
    }
}
