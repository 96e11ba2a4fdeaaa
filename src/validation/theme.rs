// src/validation/theme.rs

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    Empty,
}

impl ThemeError {
    /// Presentable text for the inline validation banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            ThemeError::Empty => "Please enter a word or theme for your haiku.",
        }
    }
}

/// Trims the raw input; anything empty after trimming is rejected
/// before a generation attempt is made.
pub fn validate_theme(raw: &str) -> Result<String, ThemeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ThemeError::Empty);
    }
    Ok(trimmed.to_string())
}
