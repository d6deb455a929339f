//! Stage vocabulary: `StageRole`, `AgentProfile`, `StageSpec`, `StageResult`.

use serde::{Deserialize, Serialize};

/// The three agent roles in the fixed pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageRole {
    Manager,
    Developer,
    Tester,
}

impl StageRole {
    /// The fixed pipeline order: Manager, then Developer, then Tester.
    pub const ORDERED: [StageRole; 3] = [StageRole::Manager, StageRole::Developer, StageRole::Tester];
}

impl std::fmt::Display for StageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StageRole::Manager => "Manager",
            StageRole::Developer => "Developer",
            StageRole::Tester => "Tester",
        };
        write!(f, "{s}")
    }
}

/// Static persona attached to a role. Parameterizes prompts only;
/// profiles never execute anything.
#[derive(Debug, Clone)]
pub struct AgentProfile {
    pub role: StageRole,
    pub goal: &'static str,
    pub backstory: &'static str,
    pub allow_delegation: bool,
}

impl AgentProfile {
    /// The persona for a given role.
    pub fn for_role(role: StageRole) -> AgentProfile {
        match role {
            StageRole::Manager => AgentProfile {
                role,
                goal: "Analyze project requirements and create an execution plan",
                backstory: "Expert software project manager",
                allow_delegation: true,
            },
            StageRole::Developer => AgentProfile {
                role,
                goal: "Write clean, optimized, and error-free code",
                backstory: "Senior developer with strong problem-solving skills",
                allow_delegation: false,
            },
            StageRole::Tester => AgentProfile {
                role,
                goal: "Detect bugs, fix code, and generate test cases",
                backstory: "Detail-oriented tester obsessed with correctness",
                allow_delegation: false,
            },
        }
    }
}

/// Specification for one pipeline stage, built per run from the static
/// per-role template plus the caller's task text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSpec {
    pub role: StageRole,
    /// What this stage is asked to do.
    pub description: String,
    /// What shape of output this stage is expected to produce.
    pub expected_output: String,
}

impl StageSpec {
    /// Build the spec for a role. The Manager stage receives the caller's
    /// task (with context appended when present); later stages use their
    /// fixed instructions and see the prior stage's output at prompt time.
    pub fn for_role(role: StageRole, task: &str, context: Option<&str>) -> StageSpec {
        match role {
            StageRole::Manager => {
                let description = match context {
                    Some(ctx) => format!("{task}\n\nContext:\n{ctx}"),
                    None => task.to_string(),
                };
                StageSpec {
                    role,
                    description,
                    expected_output: "Clear step-by-step implementation plan with analysis"
                        .to_string(),
                }
            }
            StageRole::Developer => StageSpec {
                role,
                description: "Implement the manager's plan. Write production-ready code."
                    .to_string(),
                expected_output: "Clean, optimized, well-commented code following best practices"
                    .to_string(),
            },
            StageRole::Tester => StageSpec {
                role,
                description: "Test the code thoroughly, find bugs, generate test cases"
                    .to_string(),
                expected_output: "Verified code with comprehensive test cases and bug report"
                    .to_string(),
            },
        }
    }
}

/// Result of a single stage execution.
///
/// Never mutated after the stage completes; only read by the subsequent
/// stage or discarded.
#[derive(Debug, Clone)]
pub struct StageResult {
    pub role: StageRole,
    pub output_text: String,
    pub succeeded: bool,
    pub error: Option<String>,
}

impl StageResult {
    pub fn ok(role: StageRole, output_text: String) -> Self {
        Self {
            role,
            output_text,
            succeeded: true,
            error: None,
        }
    }

    pub fn failed(role: StageRole, error: String) -> Self {
        Self {
            role,
            output_text: String::new(),
            succeeded: false,
            error: Some(error),
        }
    }
}
