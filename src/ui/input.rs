//! User input abstraction layer
//!
//! Line-oriented prompts used outside the picker, for example when creating
//! a case. The CLI implementation uses `dialoguer`; tests script answers.

use super::error::Result;

/// Trait for user input operations
pub trait UserInput {
    /// Prompt for a line of text
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails, or `UiError::Required` when
    /// `allow_empty` is false and the answer is blank.
    fn prompt_text(&self, prompt: &str, allow_empty: bool) -> Result<String>;
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str, allow_empty: bool) -> Result<String> {
        use dialoguer::Input;

        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?;
        Ok(answer)
    }
}

/// Returns canned answers in order
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: std::cell::RefCell<std::collections::VecDeque<String>>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: std::cell::RefCell::new(answers.into_iter().map(Into::into).collect()),
        }
    }
}

#[cfg(test)]
impl UserInput for ScriptedInput {
    fn prompt_text(&self, prompt: &str, allow_empty: bool) -> Result<String> {
        let answer = self.answers.borrow_mut().pop_front().unwrap_or_default();
        if !allow_empty && answer.trim().is_empty() {
            return Err(super::error::UiError::Required(prompt.to_string()));
        }
        Ok(answer)
    }
}
