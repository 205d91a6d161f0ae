//! OpenAI-compatible HTTP implementation of review analysis.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use super::error::ProviderError;
use super::prompt::{
    ANALYSIS_TEMPERATURE, AnalysisRequest, SCHEMA_NAME, response_schema, system_prompt,
};
use super::service::ReviewAnalysisService;

/// Default base URL of the chat-completions API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const ERROR_BODY_EXCERPT_CHARS: usize = 160;

/// Configuration for [`OpenAiReviewAnalysisService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiAnalysisConfig {
    /// Base API URL (e.g., `https://api.openai.com/v1`).
    pub base_url: String,
    /// Model identifier sent in chat-completions requests.
    pub model: String,
    /// API key used for bearer authentication.
    pub api_key: Option<String>,
    /// Optional HTTP timeout; the client default applies when unset.
    pub timeout: Option<Duration>,
    /// Additional request headers (primarily useful for deterministic tests).
    #[cfg(any(test, feature = "test-support"))]
    pub additional_headers: Vec<(String, String)>,
}

impl Default for OpenAiAnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL, None, None)
    }
}

impl OpenAiAnalysisConfig {
    /// Constructs configuration with explicit API settings.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key,
            timeout,
            #[cfg(any(test, feature = "test-support"))]
            additional_headers: Vec::new(),
        }
    }

    /// Adds one extra HTTP header.
    #[cfg(any(test, feature = "test-support"))]
    #[must_use]
    pub fn with_additional_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.additional_headers.push((name.into(), value.into()));
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Analysis service backed by an OpenAI-compatible chat-completions API.
#[derive(Debug, Clone, Default)]
pub struct OpenAiReviewAnalysisService {
    config: OpenAiAnalysisConfig,
}

impl OpenAiReviewAnalysisService {
    /// Creates a service from explicit configuration.
    #[must_use]
    pub const fn new(config: OpenAiAnalysisConfig) -> Self {
        Self { config }
    }

    fn extract_api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingApiKey)
    }

    fn create_http_client(&self) -> Result<Client, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|error| ProviderError::ClientSetup {
                message: error.to_string(),
            })
    }
}

impl ReviewAnalysisService for OpenAiReviewAnalysisService {
    fn request_analysis(&self, request: &AnalysisRequest) -> Result<String, ProviderError> {
        let api_key = self.extract_api_key()?;
        let payload = ChatCompletionsRequest {
            model: self.config.model.as_str(),
            messages: vec![
                ChatCompletionsMessage {
                    role: "system",
                    content: system_prompt().to_owned(),
                },
                ChatCompletionsMessage {
                    role: "user",
                    content: request.user_prompt(),
                },
            ],
            temperature: ANALYSIS_TEMPERATURE,
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: SCHEMA_NAME,
                    strict: true,
                    schema: response_schema(),
                },
            },
        };
        let client = self.create_http_client()?;
        #[cfg(any(test, feature = "test-support"))]
        let mut request_builder = client
            .post(self.config.endpoint())
            .bearer_auth(api_key)
            .json(&payload);
        #[cfg(not(any(test, feature = "test-support")))]
        let request_builder = client
            .post(self.config.endpoint())
            .bearer_auth(api_key)
            .json(&payload);
        #[cfg(any(test, feature = "test-support"))]
        for (name, value) in &self.config.additional_headers {
            request_builder = request_builder.header(name, value);
        }

        tracing::debug!(
            model = %self.config.model,
            input_chars = request.review_text().chars().count(),
            truncated = request.was_truncated(),
            "sending review analysis request"
        );

        let response = request_builder
            .send()
            .map_err(|error| ProviderError::Transport {
                message: error.to_string(),
            })?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| truncate_for_message(content.as_str(), ERROR_BODY_EXCERPT_CHARS),
            );
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_payload: ChatCompletionsResponse =
            response.json().map_err(|error| ProviderError::Envelope {
                message: error.to_string(),
            })?;

        response_payload
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .and_then(parse_content_value)
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(ToOwned::to_owned)
            .ok_or(ProviderError::EmptyReply)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: Vec<ChatCompletionsMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatCompletionsMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: Value,
}

#[derive(Debug, serde::Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, serde::Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, serde::Deserialize)]
struct ChatChoiceMessage {
    content: Option<ChatContent>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ChatContent {
    Text(String),
    Parts(Vec<ChatContentPart>),
}

#[derive(Debug, serde::Deserialize)]
struct ChatContentPart {
    text: Option<String>,
    content: Option<String>,
}

fn parse_content_value(content: &ChatContent) -> Option<&str> {
    match content {
        ChatContent::Text(text) => Some(text.as_str()),
        ChatContent::Parts(parts) => parts
            .iter()
            .find_map(|part| part.text.as_deref().or(part.content.as_deref())),
    }
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut chars = message.chars();
    let mut output: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        output.push_str("...");
    }
    output
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod tests;
