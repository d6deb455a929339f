//! Single-stage execution against the LLM invoker.

use std::time::Instant;

use tracing::{debug, warn};

use crate::invoker::LlmInvoker;
use crate::pipeline::stage::{AgentProfile, StageResult, StageSpec};

/// Stage runner: builds one prompt per stage and invokes the model once.
pub struct StageRunner;

impl StageRunner {
    /// Execute a single stage.
    ///
    /// The prompt combines the role's persona, the stage description, the
    /// prior stage's output (when present) and the expected-output hint.
    /// The invoker is called exactly once; an invocation failure is
    /// captured in the returned [`StageResult`], never propagated.
    pub async fn run_stage(
        spec: &StageSpec,
        prior_output: Option<&str>,
        invoker: &dyn LlmInvoker,
    ) -> StageResult {
        let start = Instant::now();
        let prompt = build_prompt(spec, prior_output);

        debug!(stage = %spec.role, prompt_chars = prompt.len(), "invoking stage");

        match invoker.invoke(&prompt).await {
            Ok(output_text) => {
                debug!(
                    stage = %spec.role,
                    duration_ms = start.elapsed().as_millis() as u64,
                    output_chars = output_text.len(),
                    "stage completed"
                );
                StageResult::ok(spec.role, output_text)
            }
            Err(e) => {
                warn!(stage = %spec.role, error = %e, "stage invocation failed");
                StageResult::failed(spec.role, e.to_string())
            }
        }
    }
}

fn build_prompt(spec: &StageSpec, prior_output: Option<&str>) -> String {
    let profile = AgentProfile::for_role(spec.role);
    let mut prompt = format!(
        "You are the {role}. {backstory}.\nGoal: {goal}.\n\nTask:\n{description}\n",
        role = profile.role,
        backstory = profile.backstory,
        goal = profile.goal,
        description = spec.description,
    );
    if let Some(prior) = prior_output {
        prompt.push_str(&format!("\nOutput of the previous stage:\n{prior}\n"));
    }
    prompt.push_str(&format!("\nExpected output: {}\n", spec.expected_output));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::ScriptedInvoker;
    use crate::pipeline::stage::StageRole;

    #[tokio::test]
    async fn test_prompt_carries_task_and_persona() {
        let invoker = ScriptedInvoker::new();
        invoker.push_ok("a plan");

        let spec = StageSpec::for_role(StageRole::Manager, "Build a CSV parser", None);
        let result = StageRunner::run_stage(&spec, None, &invoker).await;

        assert!(result.succeeded);
        assert_eq!(result.output_text, "a plan");

        let prompt = &invoker.prompts()[0];
        assert!(prompt.contains("You are the Manager"));
        assert!(prompt.contains("Build a CSV parser"));
        assert!(prompt.contains("Expected output: Clear step-by-step"));
        assert!(!prompt.contains("previous stage"));
    }

    #[tokio::test]
    async fn test_prior_output_is_appended_for_later_stages() {
        let invoker = ScriptedInvoker::new();
        invoker.push_ok("the code");

        let spec = StageSpec::for_role(StageRole::Developer, "ignored", None);
        let result = StageRunner::run_stage(&spec, Some("step 1: parse"), &invoker).await;

        assert!(result.succeeded);
        let prompt = &invoker.prompts()[0];
        assert!(prompt.contains("Output of the previous stage:\nstep 1: parse"));
    }

    #[tokio::test]
    async fn test_invocation_failure_is_captured_not_propagated() {
        let invoker = ScriptedInvoker::new();
        invoker.push_err("connection refused");

        let spec = StageSpec::for_role(StageRole::Tester, "ignored", None);
        let result = StageRunner::run_stage(&spec, Some("code"), &invoker).await;

        assert!(!result.succeeded);
        assert_eq!(result.role, StageRole::Tester);
        assert!(result.error.as_ref().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_invoker_called_exactly_once_per_stage() {
        let invoker = ScriptedInvoker::new();
        invoker.push_err("first failure");
        invoker.push_ok("would be a retry");

        let spec = StageSpec::for_role(StageRole::Manager, "task", None);
        let result = StageRunner::run_stage(&spec, None, &invoker).await;

        assert!(!result.succeeded);
        assert_eq!(invoker.call_count(), 1);
    }
}
