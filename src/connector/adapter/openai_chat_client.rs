use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

// Fixed request parameters. Changing any of these is a code change.
pub const MODEL: &str = "gpt-4";
pub const SYSTEM_MESSAGE: &str = "You are a helpful assistant.";
pub const MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f64 = 0.7;

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 2],
    max_tokens: u32,
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    r#type: &'static str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl<'a> ApiRequest<'a> {
    fn for_prompt(prompt: &'a str) -> Self {
        Self {
            model: MODEL,
            messages: [
                ApiMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ApiMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            response_format: ResponseFormat { r#type: "text" },
        }
    }
}

impl ApiResponse {
    fn first_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default()
    }
}

/// HTTP client for the OpenAI Chat Completions API (and compatible servers).
///
/// ```text
/// OPENAI_API_KEY=sk-...                     required
/// OPENAI_BASE_URL=https://api.openai.com    optional
/// ```
///
/// No client-side timeout is set: the request deadline belongs to the caller.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiChatClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            url,
        }
    }

    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| DomainError::config("OPENAI_API_KEY is not set"))?;
        let base =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(key, base))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest::for_prompt(prompt);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainError::provider(
                    e.status().map(|s| s.as_u16()),
                    format!("OpenAI request failed: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAI API returned {status}: {body}");
            return Err(DomainError::provider(
                Some(status.as_u16()),
                format!("OpenAI API returned {status}: {body}"),
            ));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::provider(None, format!("Failed to parse OpenAI response: {e}"))
        })?;

        let text = api_response.first_text();
        if text.is_empty() {
            debug!("OpenAI returned no content for the first choice");
        }
        Ok(text)
    }
}
