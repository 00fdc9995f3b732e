//! Prompt template for the workout generator.
//!
//! All topic and safety judgment is delegated to the remote model: the user
//! text is embedded verbatim, unescaped. Adversarial input can therefore
//! attempt prompt injection; the template does not defend against that.

/// Sentence the model is instructed to return verbatim for off-topic
/// requests. Matched loosely (substring) by consumers, never byte-for-byte.
pub const REFUSAL_SENTENCE: &str = "I am programmed only to help with workout plans.";

/// Build the single-turn instruction prompt for one user request.
///
/// Pure string construction. Callers filter out blank input before this
/// point; no validation happens here.
pub fn build_workout_prompt(user_input: &str) -> String {
    format!(
        r#"You are an expert fitness coach chatbot. Your ONLY function is to create a personalized workout plan based on the user's request.

The user's request is: "{user_input}"

**Your Task:**
1.  Analyze the user's request to determine if it is about fitness.
2.  If the request is about fitness, generate a clear, concise, and safe workout plan. The plan MUST include:
    - A suitable title.
    - A brief, encouraging description.
    - A list of 4-6 exercises with sets and reps/duration.
    - A reminder to warm up and cool down.
3.  If the user's request is NOT about fitness (e.g., asking for a joke, a story, a recipe, math help, etc.), you MUST strictly respond with the following sentence and nothing else: "{REFUSAL_SENTENCE}"
"#
    )
}
