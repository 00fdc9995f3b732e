//! # fitcoach
//!
//! Terminal fitness-coach chatbot backed by Groq's OpenAI-compatible
//! chat-completions API. One line of plain English in, one workout plan out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fitcoach::{GroqClient, PlanGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GroqClient::from_env()?;
//!     let plan = client
//!         .generate_plan("a 30-minute workout for my legs at home")
//!         .await?;
//!     println!("{plan}");
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod prompt;
pub mod provider;
pub mod repl;

pub use self::core::{ChatRole, CoachError, Message, PlanGenerator};
pub use prompt::{REFUSAL_SENTENCE, build_workout_prompt};
pub use provider::{GroqClient, GroqConfig, Provider};
pub use repl::{CoachRepl, Command, FALLBACK_MESSAGE};
