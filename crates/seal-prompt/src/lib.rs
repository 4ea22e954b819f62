//! SEAL Prompt - self-edit prompt construction
//!
//! Turns an [`ArcTask`](seal_task::ArcTask) into the chat prompt a model
//! would receive when asked to propose a self-edit:
//! - the fixed system message
//! - the formatted training pairs, a separator, and the self-edit instructions
//! - wrapped in a chat template (Llama-3 by default)
//!
//! # Example
//!
//! ```rust,ignore
//! use seal_prompt::{preview, PromptBuilder};
//!
//! let prompt = PromptBuilder::new().build(&task);
//! println!("{}", preview(&prompt, 500));
//! ```

pub mod chat;
pub mod preview;
pub mod templates;

pub use chat::{ChatTemplate, PromptBuilder, UnknownTemplate};
pub use preview::{preview, TRUNCATION_MARKER};
pub use templates::{EXAMPLES_SEPARATOR, SELF_EDIT_INSTRUCTIONS, SYSTEM_MESSAGE};
