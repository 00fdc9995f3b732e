use async_trait::async_trait;

use super::error::CoachError;

/// Seam between the interactive loop and the completion backend.
///
/// The loop only ever talks to this trait, so tests can substitute an
/// in-memory stub without touching the process environment.
#[async_trait]
pub trait PlanGenerator {
    /// Generate a workout plan (or the model's refusal text) for one
    /// free-text request. Exactly one outbound call per invocation.
    async fn generate_plan(&self, user_input: &str) -> Result<String, CoachError>;
}
