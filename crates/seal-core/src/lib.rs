//! SEAL Core - self-edit generation demo
//!
//! Orchestrates one step of the self-editing workflow:
//! - Loads an ARC task and turns it into a self-edit prompt
//! - Asks a [`SelfEditGenerator`] for a self-edit configuration
//! - Validates and explains the chosen configuration
//!
//! There is no inference backend: [`SimulatedGenerator`] picks one of three
//! preset configurations at random.
//!
//! # Example
//!
//! ```rust,ignore
//! use seal_core::{DemoSettings, SelfEditDemo, SimulatedGenerator};
//!
//! let settings = DemoSettings::new().with_task_path("sample_task.json");
//! let mut demo = SelfEditDemo::new(settings, SimulatedGenerator::with_seed(42));
//! let outcome = demo.run(&mut std::io::stdout())?;
//! println!("picked preset {:?}", outcome.config.preset_number());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod demo;
pub mod error;
pub mod generator;
pub mod report;
pub mod settings;

pub use config::{
    format_float, DataGeneration, SelfEditConfig, Training, TrainingStrategy, PRESET_COUNT,
};
pub use demo::{DemoOutcome, SelfEditDemo};
pub use error::{ConfigError, DemoError, GenerateError, SettingsError};
pub use generator::{FixedGenerator, SelfEditGenerator, SimulatedGenerator};
pub use settings::{DemoSettings, DEFAULT_PREVIEW_CHARS, DEFAULT_TASK_PATH};

/// Re-exported so callers can pick a template without depending on `seal-prompt`
pub use seal_prompt::ChatTemplate;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running the demo
    pub use crate::{
        ChatTemplate, DemoSettings, FixedGenerator, SelfEditConfig, SelfEditDemo,
        SelfEditGenerator, SimulatedGenerator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
