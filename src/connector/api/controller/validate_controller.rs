use anyhow::Result;

use crate::domain::validate_prompt;

pub struct ValidateController;

impl ValidateController {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, prompt: String) -> Result<String> {
        validate_prompt(Some(&prompt))?;
        Ok(self.format_valid(&prompt))
    }

    fn format_valid(&self, prompt: &str) -> String {
        format!(
            "Prompt is valid ({} characters).",
            prompt.encode_utf16().count()
        )
    }
}

impl Default for ValidateController {
    fn default() -> Self {
        Self::new()
    }
}
