use anyhow::Result;
use log::debug;

use super::InputHandler;
use crate::cli::config::DEFAULT_SEPARATOR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub text: String,
}

impl UserInput {
    /// Nothing was entered, or the input stream was already exhausted
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn or_default(self, default: Option<&str>) -> Option<String> {
        if self.is_empty() {
            default.map(str::to_string)
        } else {
            Some(self.text)
        }
    }
}

/// A question to ask the user: prompt text, separator and fallback answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
    separator: String,
    default: Option<String>,
}

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
            default: None,
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn default(mut self, default: Option<&str>) -> Self {
        self.default = default.map(str::to_string);
        self
    }

    /// Text written before reading the answer
    pub fn get_prompt(&self) -> String {
        format!("{}{}", self.text, self.separator)
    }

    pub fn ask_with<H: InputHandler + ?Sized>(&self, handler: &mut H) -> Result<Option<String>> {
        handler.display(&self.get_prompt())?;
        let input = handler.get_user_input()?;
        if input.is_empty() {
            debug!("empty answer, using default {:?}", self.default);
        }
        Ok(input.or_default(self.default.as_deref()))
    }
}
