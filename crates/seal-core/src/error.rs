//! Error types for SEAL Core
//!
//! Provides error handling for:
//! - Self-edit configuration parsing and validation
//! - Generator failures
//! - Settings file loading
//! - Demo orchestration (task, generation, output)

use seal_task::TaskError;
use std::path::PathBuf;

/// Main demo error type
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Task could not be loaded or is malformed
    #[error("failed to load ARC task")]
    Task(#[from] TaskError),

    /// Generator could not produce a configuration
    #[error("self-edit generation failed")]
    Generate(#[from] GenerateError),

    /// Generator produced an unusable configuration
    #[error("generated self-edit configuration is invalid")]
    Config(#[from] ConfigError),

    /// Settings could not be loaded
    #[error("failed to load settings")]
    Settings(#[from] SettingsError),

    /// Writing the report failed
    #[error("failed to write demo output")]
    Output(#[from] std::io::Error),

    /// Configuration could not be serialized
    #[error("failed to serialize self-edit configuration")]
    Serialize(#[from] serde_json::Error),
}

impl DemoError {
    /// Whether the error is caused by user input (task or settings files)
    /// rather than by the generator or the output stream
    #[inline]
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Task(_) | Self::Settings(_))
    }
}

/// Self-edit configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Learning rate is zero, negative, or not finite
    #[error("learning rate must be a positive finite number, got {0}")]
    InvalidLearningRate(f64),

    /// Training would not run at all
    #[error("num_train_epochs must be at least 1")]
    ZeroEpochs,

    /// Reply is not a configuration-shaped JSON object
    #[error("malformed self-edit configuration json")]
    Parse(#[from] serde_json::Error),
}

/// Generator errors
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Requested preset number does not exist
    #[error("preset {number} does not exist (choose 1 to {available})")]
    PresetOutOfRange { number: usize, available: usize },
}

/// Settings file errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("failed to read settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML or has unknown keys
    #[error("invalid settings in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
