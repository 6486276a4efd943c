use serde::{Deserialize, Serialize};

/// Inbound payload. Only `prompt` is read; any other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PromptRequest {
    #[serde(default, deserialize_with = "lenient_prompt")]
    prompt: Option<String>,
}

impl PromptRequest {
    /// Extracts the prompt from a raw request body.
    ///
    /// Bodies that are empty, not JSON, or not a JSON object yield a request
    /// without a prompt so the validator can reject them uniformly.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }
}

/// A `prompt` that is `null`, a number, an object, ... counts as absent.
fn lenient_prompt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionData {
    pub text: String,
}

/// Outbound payload. Exactly one of `data` and `error` is populated, matching
/// `success`; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<CompletionData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl PromptResponse {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(CompletionData { text: text.into() }),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn text(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.text.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
