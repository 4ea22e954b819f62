//! Chat templates and the prompt builder
//!
//! The builder owns the texts so callers can swap the system message or the
//! instructions without touching the template layout.

use crate::templates::{EXAMPLES_SEPARATOR, SELF_EDIT_INSTRUCTIONS, SYSTEM_MESSAGE};
use seal_task::{format_examples, ArcTask};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chat layout used to wrap the system and user messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatTemplate {
    /// Llama-3 header/eot special tokens
    #[default]
    Llama3,
    /// Bracketed section headers, no special tokens
    Plain,
}

impl ChatTemplate {
    /// Name used in settings files and on the command line
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatTemplate::Llama3 => "llama3",
            ChatTemplate::Plain => "plain",
        }
    }

    /// Wrap a system and a user message, leaving the assistant turn open
    #[must_use]
    pub fn render(&self, system: &str, user: &str) -> String {
        match self {
            ChatTemplate::Llama3 => format!(
                "<|begin_of_text|><|start_header_id|>system<|end_header_id|>\n\n\
                 {system}<|eot_id|><|start_header_id|>user<|end_header_id|>\n\n\
                 {user}<|eot_id|><|start_header_id|>assistant<|end_header_id|>\n\n"
            ),
            ChatTemplate::Plain => {
                format!("[SYSTEM]\n{system}\n\n[USER]\n{user}\n\n[ASSISTANT]\n")
            }
        }
    }
}

impl fmt::Display for ChatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template name that matches no [`ChatTemplate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chat template '{0}' (expected 'llama3' or 'plain')")]
pub struct UnknownTemplate(pub String);

impl FromStr for ChatTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llama3" | "llama-3" => Ok(ChatTemplate::Llama3),
            "plain" => Ok(ChatTemplate::Plain),
            _ => Err(UnknownTemplate(s.to_string())),
        }
    }
}

/// Builds self-edit prompts from ARC tasks
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    template: ChatTemplate,
    system: String,
    instructions: String,
}

impl PromptBuilder {
    /// Builder with the default texts and the Llama-3 template
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With chat template
    #[inline]
    #[must_use]
    pub fn with_template(mut self, template: ChatTemplate) -> Self {
        self.template = template;
        self
    }

    /// With system message
    #[inline]
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// With self-edit instructions
    #[inline]
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Active template
    #[inline]
    #[must_use]
    pub fn template(&self) -> ChatTemplate {
        self.template
    }

    /// User turn: formatted training pairs, separator, instructions
    #[must_use]
    pub fn user_message(&self, task: &ArcTask) -> String {
        let mut message = format_examples(task);
        message.push_str(EXAMPLES_SEPARATOR);
        message.push_str(&self.instructions);
        message
    }

    /// Full prompt for `task`
    #[must_use]
    pub fn build(&self, task: &ArcTask) -> String {
        let prompt = self.template.render(&self.system, &self.user_message(task));
        tracing::debug!(
            template = %self.template,
            examples = task.train_len(),
            chars = prompt.chars().count(),
            "built self-edit prompt"
        );
        prompt
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            template: ChatTemplate::default(),
            system: SYSTEM_MESSAGE.to_string(),
            instructions: SELF_EDIT_INSTRUCTIONS.to_string(),
        }
    }
}
