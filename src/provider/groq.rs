//! Groq provider implementation (OpenAI-compatible chat completions).
//!
//! # API Compatibility
//!
//! The wire structs keep the fields the chat-completions contract defines,
//! even those not currently consumed. Fields marked with
//! `#[allow(dead_code)]` are retained for API contract completeness and for
//! debugging and logging purposes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChatRole, CoachError, HttpClient, Message, PlanGenerator};
use crate::prompt::build_workout_prompt;
use crate::provider::Provider;

use super::constants::groq;

/// Groq-specific configuration for the chat client.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GroqConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: groq::API_BASE.to_string(),
            model: groq::DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    fn auth_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )
    }
}

/// Long-lived session handle for the Groq chat-completions API.
///
/// Built once at startup and shared read-only for the life of the process;
/// every request goes through the same handle.
pub struct GroqClient {
    config: GroqConfig,
    http: HttpClient,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self, CoachError> {
        let http = HttpClient::new(None)?;
        Ok(Self { config, http })
    }

    /// Build a client from the process environment.
    ///
    /// A missing or empty key is a configuration error; callers treat it as
    /// fatal and exit before any request is attempted.
    pub fn from_env() -> Result<Self, CoachError> {
        let env_var = Provider::Groq.default_api_key_env_var();
        let api_key = validate_api_key(env_var, std::env::var(env_var).ok())?;
        Self::new(GroqConfig::new(api_key))
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one chat-completion request and return the first choice's text.
    async fn chat_completion(&self, messages: Vec<Message>) -> Result<String, CoachError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: messages.into_iter().map(wire_message).collect(),
        };

        let url = format!("{}{}", self.config.base_url, groq::CHAT_COMPLETIONS_ENDPOINT);
        let headers = vec![self.config.auth_header()];

        let response: ChatCompletionResponse =
            self.http.post_json(&url, &headers, &request).await?;

        debug!(id = %response.id, model = %response.model, "chat completion received");

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CoachError::Parse {
                message: "No choices in response".to_string(),
                source: None,
            })?;

        Ok(choice.message.content)
    }
}

#[async_trait]
impl PlanGenerator for GroqClient {
    async fn generate_plan(&self, user_input: &str) -> Result<String, CoachError> {
        let prompt = build_workout_prompt(user_input);
        let messages = vec![Message {
            role: ChatRole::User,
            content: prompt,
        }];

        self.chat_completion(messages).await
    }
}

fn wire_message(message: Message) -> WireMessage {
    WireMessage {
        role: match message.role {
            ChatRole::System => WireRole::System,
            ChatRole::User => WireRole::User,
            ChatRole::Assistant => WireRole::Assistant,
        },
        content: message.content,
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: WireRole,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum WireRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    id: String,
    model: String,
    choices: Vec<Choice>,
    #[allow(dead_code)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[allow(dead_code)]
    index: u32,
    message: ResponseMessage,
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    /// Always `assistant`.
    #[allow(dead_code)]
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Usage {
    prompt_tokens: i32,
    completion_tokens: i32,
    total_tokens: i32,
}

fn validate_api_key(env_var: &str, value: Option<String>) -> Result<String, CoachError> {
    value
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            CoachError::Configuration(format!("{env_var} environment variable not found"))
        })
}
