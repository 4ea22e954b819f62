//! SEAL Task - ARC puzzles as typed data
//!
//! Loads Abstraction and Reasoning Corpus tasks from JSON, checks that every
//! training grid is well formed, and renders training pairs as the plain text
//! block that feeds the self-edit prompt.
//!
//! # Example
//!
//! ```rust,ignore
//! use seal_task::{format_examples, ArcTask};
//!
//! let task = ArcTask::load("sample_task.json")?;
//! println!("{}", format_examples(&task));
//! ```

pub mod error;
pub mod format;
pub mod grid;
pub mod task;

pub use error::{GridRole, TaskError};
pub use format::format_examples;
pub use grid::Grid;
pub use task::{ArcTask, Example, TestExample};

/// Largest cell value (colour index) an ARC grid may contain
pub const MAX_CELL_VALUE: u8 = 9;
