//! Runtime configuration for a [`Chatbot`](crate::chat::Chatbot).
//!
//! Every field has a default, so a JSON file only needs the keys it wants to
//! change:
//!
//! ```json
//! { "similarity_threshold": 0.4, "seed": 7 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ColloquyError, Result};
use crate::ml::intent_classifier::DEFAULT_SIMILARITY_THRESHOLD;

/// Reply to empty or all-whitespace input.
pub const DEFAULT_EMPTY_INPUT_PROMPT: &str = "Please say something!";

/// Reply when a session ends.
pub const DEFAULT_FAREWELL: &str = "Goodbye! Have a great day!";

/// Configuration for the chatbot and its interactive session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatbotConfig {
    /// A match is accepted only when its score is strictly greater than this.
    pub similarity_threshold: f64,
    /// Returned for empty input without classifying.
    pub empty_input_prompt: String,
    /// Printed when the session ends.
    pub farewell: String,
    /// Inputs that end an interactive session (compared case-insensitively).
    pub exit_commands: Vec<String>,
    /// Seed for response selection; random when absent.
    pub seed: Option<u64>,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        ChatbotConfig {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            empty_input_prompt: DEFAULT_EMPTY_INPUT_PROMPT.to_string(),
            farewell: DEFAULT_FAREWELL.to_string(),
            exit_commands: ["quit", "exit", "bye", "goodbye"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            seed: None,
        }
    }
}

impl ChatbotConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ChatbotConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values make sense.
    pub fn validate(&self) -> Result<()> {
        if !self.similarity_threshold.is_finite() || !(0.0..1.0).contains(&self.similarity_threshold)
        {
            return Err(ColloquyError::configuration(format!(
                "similarity_threshold must be in [0, 1), got {}",
                self.similarity_threshold
            )));
        }
        if self.empty_input_prompt.trim().is_empty() {
            return Err(ColloquyError::configuration(
                "empty_input_prompt must not be empty",
            ));
        }
        if self.farewell.trim().is_empty() {
            return Err(ColloquyError::configuration("farewell must not be empty"));
        }
        Ok(())
    }

    /// Set the similarity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the response selection seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether `input` is one of the exit commands.
    pub fn is_exit_command(&self, input: &str) -> bool {
        let input = input.trim();
        self.exit_commands
            .iter()
            .any(|command| command.eq_ignore_ascii_case(input))
    }
}
