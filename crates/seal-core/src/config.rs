//! Self-edit configurations
//!
//! A self-edit is the model's own choice of how to adapt to a task: which
//! data augmentations to generate and how to fine-tune on them. The JSON
//! shape (key names and order) is the one the self-edit instructions ask
//! the model to reply with.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

/// Number of built-in presets
pub const PRESET_COUNT: usize = 3;

/// Augmentation toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataGeneration {
    /// Rotations, flips and transpositions
    pub use_basic_augmentations: bool,
    /// Upscaled and tiled grids
    pub use_size_augmentations: bool,
    /// Compositions of basic augmentations
    pub use_chain_augmentations: bool,
    /// Repeated copies of augmented examples
    pub use_repeat_augmentations: bool,
}

impl DataGeneration {
    /// `(name, enabled)` for each toggle, in declaration order
    #[must_use]
    pub fn flags(&self) -> [(&'static str, bool); 4] {
        [
            ("use_basic_augmentations", self.use_basic_augmentations),
            ("use_size_augmentations", self.use_size_augmentations),
            ("use_chain_augmentations", self.use_chain_augmentations),
            ("use_repeat_augmentations", self.use_repeat_augmentations),
        ]
    }

    /// Number of enabled toggles
    #[inline]
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.flags().iter().filter(|(_, enabled)| *enabled).count()
    }
}

/// Which tokens contribute to the fine-tuning loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStrategy {
    /// Loss on the output grid tokens only
    TrainUsingOutputTokens,
    /// Loss on every token of the example
    TrainUsingAllTokens,
}

impl TrainingStrategy {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingStrategy::TrainUsingOutputTokens => "train_using_output_tokens",
            TrainingStrategy::TrainUsingAllTokens => "train_using_all_tokens",
        }
    }
}

impl fmt::Display for TrainingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-tuning hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Training {
    /// Loss strategy
    pub strategy: TrainingStrategy,
    /// Optimizer learning rate
    #[serde(serialize_with = "serialize_float")]
    pub learning_rate: f64,
    /// Passes over the generated data
    pub num_train_epochs: u32,
}

/// Shortest round-trip text for a float
///
/// Exponent form (`5e-05`, `1e+16`) when the decimal exponent is below -4 or
/// at least 16, with an explicit sign and two or more exponent digits.
/// Otherwise positional, always with a fractional part (`0.0001`, `3.0`).
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    if let Some((mantissa, exp)) = scientific.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            if value != 0.0 && !(-4..16).contains(&exp) {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
            }
        }
    }

    let positional = value.to_string();
    if positional.contains('.') {
        positional
    } else {
        format!("{positional}.0")
    }
}

/// Writes finite floats as [`format_float`] text; JSON has no literal for
/// the others, so they go through the serializer unchanged
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return serializer.serialize_f64(*value);
    }
    let raw = RawValue::from_string(format_float(*value)).map_err(serde::ser::Error::custom)?;
    raw.serialize(serializer)
}

/// Complete self-edit: data generation plus training
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelfEditConfig {
    /// Augmentations to generate
    pub data_generation: DataGeneration,
    /// How to fine-tune
    pub training: Training,
}

impl SelfEditConfig {
    /// The three built-in configurations the simulated model chooses from
    #[must_use]
    pub fn presets() -> [SelfEditConfig; PRESET_COUNT] {
        [
            SelfEditConfig {
                data_generation: DataGeneration {
                    use_basic_augmentations: true,
                    use_size_augmentations: false,
                    use_chain_augmentations: false,
                    use_repeat_augmentations: true,
                },
                training: Training {
                    strategy: TrainingStrategy::TrainUsingOutputTokens,
                    learning_rate: 0.0001,
                    num_train_epochs: 3,
                },
            },
            SelfEditConfig {
                data_generation: DataGeneration {
                    use_basic_augmentations: true,
                    use_size_augmentations: true,
                    use_chain_augmentations: false,
                    use_repeat_augmentations: false,
                },
                training: Training {
                    strategy: TrainingStrategy::TrainUsingAllTokens,
                    learning_rate: 5e-5,
                    num_train_epochs: 5,
                },
            },
            SelfEditConfig {
                data_generation: DataGeneration {
                    use_basic_augmentations: false,
                    use_size_augmentations: true,
                    use_chain_augmentations: true,
                    use_repeat_augmentations: false,
                },
                training: Training {
                    strategy: TrainingStrategy::TrainUsingOutputTokens,
                    learning_rate: 0.0005,
                    num_train_epochs: 2,
                },
            },
        ]
    }

    /// 1-based preset number, if this configuration is one of the presets
    #[must_use]
    pub fn preset_number(&self) -> Option<usize> {
        Self::presets()
            .iter()
            .position(|preset| preset == self)
            .map(|idx| idx + 1)
    }

    /// Check that training would actually run
    ///
    /// # Errors
    /// - `ConfigError::InvalidLearningRate` unless the rate is finite and positive
    /// - `ConfigError::ZeroEpochs` if no epochs are requested
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lr = self.training.learning_rate;
        if !lr.is_finite() || lr <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(lr));
        }
        if self.training.num_train_epochs == 0 {
            return Err(ConfigError::ZeroEpochs);
        }
        Ok(())
    }

    /// Parse a model reply and validate it
    ///
    /// Unknown keys are rejected so that typos in a reply do not silently
    /// fall back to defaults.
    ///
    /// # Errors
    /// `ConfigError::Parse` for malformed JSON, otherwise any validation error.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Two-space indented JSON
    ///
    /// # Errors
    /// Only if serialization itself fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
