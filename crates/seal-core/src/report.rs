//! Text rendering for the demo report
//!
//! Pure functions, so the layout can be tested without running the demo.

use crate::config::{format_float, SelfEditConfig};
use std::fmt::Write as _;

/// Width of banners and rules
pub const RULE_WIDTH: usize = 60;

/// Work the full system would do after choosing a self-edit.
pub const NEXT_STEPS: &str = "Next steps (not in MVP):
  1. Apply data augmentations based on config
  2. Fine-tune model with LoRA using training config
  3. Evaluate adapted model on test examples
";

/// Title framed by `=` lines, newline-terminated
#[must_use]
pub fn banner(title: &str) -> String {
    let line = "=".repeat(RULE_WIDTH);
    format!("{line}\n{title}\n{line}\n")
}

/// A line of dashes, without newline
#[must_use]
pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Status label for an augmentation toggle
#[inline]
#[must_use]
pub fn flag_status(enabled: bool) -> &'static str {
    if enabled {
        "✓ ENABLED"
    } else {
        "✗ DISABLED"
    }
}

/// Human-readable explanation of a configuration
///
/// ```text
/// Data Augmentation:
///   ✓ ENABLED: use_basic_augmentations
///   ...
///
/// Training Strategy:
///   • Strategy: train_using_output_tokens
///   • Learning Rate: 0.0001
///   • Epochs: 3
/// ```
#[must_use]
pub fn explain(config: &SelfEditConfig) -> String {
    let mut out = String::from("Data Augmentation:\n");
    // Writing into a String cannot fail
    for (name, enabled) in config.data_generation.flags() {
        let _ = writeln!(out, "  {}: {name}", flag_status(enabled));
    }

    let training = &config.training;
    out.push_str("\nTraining Strategy:\n");
    let _ = writeln!(out, "  • Strategy: {}", training.strategy);
    let _ = writeln!(
        out,
        "  • Learning Rate: {}",
        format_float(training.learning_rate)
    );
    let _ = writeln!(out, "  • Epochs: {}", training.num_train_epochs);
    out
}
