//! Interactive read loop for the fitness coach.
//!
//! The loop owns all presentation: it prints the banner, reads one line at a
//! time, dispatches non-command input to a [`PlanGenerator`], and converts
//! service errors into a single fallback sentence for the user while the
//! full error goes to the tracing log.

use std::io::{BufRead, Write};

use tracing::error;

use crate::core::PlanGenerator;

/// Fixed user-facing message shown when the remote call fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble creating a workout right now. Please try again later.";

const SEPARATOR: &str = "-----------------------------------------";
const INPUT_PROMPT: &str = "What kind of workout do you want today? > ";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Exit,
    Help,
    Request(String),
}

impl Command {
    /// Parse a raw input line. Returns `None` for blank or whitespace-only
    /// input, which the loop silently re-prompts on. Reserved keywords are
    /// case-insensitive.
    pub fn parse(line: &str) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.to_lowercase().as_str() {
            "exit" => Some(Command::Exit),
            "help" => Some(Command::Help),
            _ => Some(Command::Request(trimmed.to_string())),
        }
    }
}

/// The chatbot loop, generic over the completion backend so tests can run it
/// against an in-memory stub.
pub struct CoachRepl<G> {
    generator: G,
}

impl<G: PlanGenerator> CoachRepl<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Run the loop until `exit` or end of input.
    pub async fn run<R, W>(&self, input: R, mut out: W) -> std::io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        welcome(&mut out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{INPUT_PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                break;
            };

            match Command::parse(&line?) {
                None => continue,
                Some(Command::Exit) => {
                    writeln!(out, "\nGreat work today! Keep it up. Goodbye! 👋")?;
                    break;
                }
                Some(Command::Help) => show_help(&mut out)?,
                Some(Command::Request(text)) => {
                    writeln!(out, "\nOkay, creating a custom workout plan for you (at Groq speed!)...")?;

                    let plan = match self.generator.generate_plan(&text).await {
                        Ok(plan) => plan,
                        Err(e) => {
                            error!(error = %e, "workout generation failed");
                            FALLBACK_MESSAGE.to_string()
                        }
                    };

                    writeln!(out, "{SEPARATOR}")?;
                    writeln!(out, "{plan}")?;
                    writeln!(out, "{SEPARATOR}")?;
                }
            }
        }

        Ok(())
    }
}

fn welcome<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "💪 Welcome to your AI Fitness Coach! 💪")?;
    writeln!(out, "        (Powered by Groq)          ")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "I can create a personalized workout plan for you.")?;
    writeln!(
        out,
        "Be specific! Try 'a 30-minute workout for my legs at home' or 'a quick cardio routine for the gym'."
    )?;
    writeln!(out, "Type 'help' for more examples or 'exit' to quit.")?;
    writeln!(out)
}

fn show_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\nHow I can help:")?;
    writeln!(out, "  - Just tell me your goal in plain English and I'll generate a plan!")?;
    writeln!(out, "\nExample requests:")?;
    writeln!(out, "  'Create a beginner workout for building muscle at the gym.'")?;
    writeln!(out, "  'I need a 15-minute ab workout with no equipment.'")?;
    writeln!(out, "  'A workout to improve my stamina for running.'")?;
    writeln!(out, "\nOther commands:")?;
    writeln!(out, "  'help' - Show this message.")?;
    writeln!(out, "  'exit' - Quit the chatbot.")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::core::CoachError;

    /// Records every request and replays canned results in order.
    #[derive(Clone)]
    struct StubGenerator {
        calls: Arc<Mutex<Vec<String>>>,
        results: Arc<Mutex<Vec<Result<String, CoachError>>>>,
    }

    impl StubGenerator {
        fn new(results: Vec<Result<String, CoachError>>) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                results: Arc::new(Mutex::new(results)),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PlanGenerator for StubGenerator {
        async fn generate_plan(&self, user_input: &str) -> Result<String, CoachError> {
            self.calls.lock().unwrap().push(user_input.to_string());
            let mut results = self.results.lock().unwrap();
            if results.is_empty() {
                Ok("Leg Day".to_string())
            } else {
                results.remove(0)
            }
        }
    }

    fn service_error() -> CoachError {
        CoachError::Api {
            message: "API error (500 Internal Server Error): boom".to_string(),
            status_code: Some(500),
        }
    }

    async fn run_session(stub: &StubGenerator, input: &str) -> String {
        let repl = CoachRepl::new(stub.clone());
        let mut out = Vec::new();
        repl.run(Cursor::new(input.to_string()), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_recognizes_reserved_keywords_case_insensitively() {
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
        assert_eq!(Command::parse("EXIT"), Some(Command::Exit));
        assert_eq!(Command::parse("  Help  "), Some(Command::Help));
    }

    #[test]
    fn parse_returns_none_for_blank_input() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t"), None);
    }

    #[test]
    fn parse_trims_free_text_requests() {
        assert_eq!(
            Command::parse("  a quick cardio routine  "),
            Some(Command::Request("a quick cardio routine".to_string()))
        );
    }

    #[tokio::test]
    async fn exit_terminates_without_issuing_a_request() {
        let stub = StubGenerator::new(vec![]);
        let output = run_session(&stub, "EXIT\n").await;

        assert!(stub.calls().is_empty());
        assert!(output.contains("Goodbye"));
    }

    #[tokio::test]
    async fn help_prints_static_text_and_issues_no_request() {
        let stub = StubGenerator::new(vec![]);
        let output = run_session(&stub, "help\nexit\n").await;

        assert!(stub.calls().is_empty());
        assert!(output.contains("Example requests:"));
    }

    #[tokio::test]
    async fn blank_lines_reprompt_without_requests_or_errors() {
        let stub = StubGenerator::new(vec![]);
        let output = run_session(&stub, "\n   \nexit\n").await;

        assert!(stub.calls().is_empty());
        assert_eq!(output.matches(INPUT_PROMPT).count(), 3);
        assert!(!output.contains(FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn each_request_issues_exactly_one_call_and_prints_the_plan() {
        let stub = StubGenerator::new(vec![Ok("Day 1: squats, 3x10".to_string())]);
        let output = run_session(&stub, "a 30-minute workout for my legs at home\nexit\n").await;

        assert_eq!(
            stub.calls(),
            vec!["a 30-minute workout for my legs at home".to_string()]
        );
        assert!(output.contains("Day 1: squats, 3x10"));
        assert_eq!(output.matches(SEPARATOR).count(), 4); // banner 2 + plan 2
    }

    #[tokio::test]
    async fn service_errors_print_the_fallback_and_the_loop_continues() {
        let stub = StubGenerator::new(vec![
            Err(service_error()),
            Ok("Core Blast".to_string()),
        ]);
        let output = run_session(&stub, "leg day\nab workout\nexit\n").await;

        assert_eq!(stub.calls().len(), 2);
        assert!(output.contains(FALLBACK_MESSAGE));
        assert!(output.contains("Core Blast"));
        assert!(output.contains("Goodbye"));
    }

    #[tokio::test]
    async fn end_of_input_ends_the_loop_cleanly() {
        let stub = StubGenerator::new(vec![]);
        let output = run_session(&stub, "").await;

        assert!(stub.calls().is_empty());
        assert!(output.contains("Welcome to your AI Fitness Coach"));
    }
}
