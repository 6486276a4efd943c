use crate::domain::DomainError;

pub const MAX_PROMPT_LENGTH: usize = 2000;

pub const PROMPT_REQUIRED_MESSAGE: &str = "Prompt is required in the request body.";
pub const PROMPT_TOO_LONG_MESSAGE: &str = "Prompt must not exceed 2000 characters.";

/// Checks that a prompt is present and at most [`MAX_PROMPT_LENGTH`] long.
///
/// Length is measured in UTF-16 code units, which is how the chat clients
/// talking to this endpoint count characters.
pub fn validate_prompt(prompt: Option<&str>) -> Result<(), DomainError> {
    let prompt = match prompt {
        Some(p) if !p.is_empty() => p,
        _ => return Err(DomainError::validation(PROMPT_REQUIRED_MESSAGE)),
    };

    if prompt.encode_utf16().count() > MAX_PROMPT_LENGTH {
        return Err(DomainError::validation(PROMPT_TOO_LONG_MESSAGE));
    }

    Ok(())
}
