//! Demo settings
//!
//! Loaded from an optional TOML file; every key may be omitted:
//!
//! ```toml
//! task_path = "sample_task.json"
//! preview_chars = 500
//! seed = 42          # reproducible simulated choice
//! preset = 2         # bypass the simulation entirely (1-based)
//! template = "llama3"
//! ```

use crate::error::{GenerateError, SettingsError};
use crate::generator::{FixedGenerator, SelfEditGenerator, SimulatedGenerator};
use seal_prompt::{ChatTemplate, PromptBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default task file, relative to the working directory
pub const DEFAULT_TASK_PATH: &str = "sample_task.json";

/// Default number of prompt characters shown in the preview
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Demo settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSettings {
    /// ARC task file
    pub task_path: PathBuf,
    /// Characters of the prompt shown before the truncation marker
    pub preview_chars: usize,
    /// Seed for the simulated generator
    pub seed: Option<u64>,
    /// Fixed preset number (1-based); takes precedence over `seed`
    pub preset: Option<usize>,
    /// Chat template for the prompt
    pub template: ChatTemplate,
}

impl DemoSettings {
    /// Default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from TOML text
    ///
    /// # Errors
    /// `SettingsError::Parse` for invalid TOML or unknown keys.
    pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
        Self::parse(raw, Path::new("<inline>"))
    }

    /// Load settings from a TOML file
    ///
    /// # Errors
    /// `SettingsError::Io` if unreadable, `SettingsError::Parse` if invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&raw, path)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    fn parse(raw: &str, origin: &Path) -> Result<Self, SettingsError> {
        toml::from_str(raw).map_err(|source| SettingsError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// With task file
    #[inline]
    #[must_use]
    pub fn with_task_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.task_path = path.into();
        self
    }

    /// With preview length
    #[inline]
    #[must_use]
    pub fn with_preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    /// With simulation seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// With fixed preset (1-based)
    #[inline]
    #[must_use]
    pub fn with_preset(mut self, number: usize) -> Self {
        self.preset = Some(number);
        self
    }

    /// With chat template
    #[inline]
    #[must_use]
    pub fn with_template(mut self, template: ChatTemplate) -> Self {
        self.template = template;
        self
    }

    /// Prompt builder for the configured template
    #[must_use]
    pub fn prompt_builder(&self) -> PromptBuilder {
        PromptBuilder::new().with_template(self.template)
    }

    /// Generator selected by these settings
    ///
    /// `preset` wins over `seed`; with neither, the simulation is seeded from
    /// OS entropy.
    ///
    /// # Errors
    /// `GenerateError::PresetOutOfRange` for an unknown preset number.
    pub fn generator(&self) -> Result<Box<dyn SelfEditGenerator>, GenerateError> {
        match (self.preset, self.seed) {
            (Some(number), _) => Ok(Box::new(FixedGenerator::preset(number)?)),
            (None, Some(seed)) => Ok(Box::new(SimulatedGenerator::with_seed(seed))),
            (None, None) => Ok(Box::new(SimulatedGenerator::new())),
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            task_path: PathBuf::from(DEFAULT_TASK_PATH),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            seed: None,
            preset: None,
            template: ChatTemplate::default(),
        }
    }
}
