//! Self-edit demo orchestration
//!
//! Workflow:
//! 1. Load the ARC task
//! 2. Build the self-edit prompt
//! 3. Ask the generator for a self-edit configuration
//! 4. Report the configuration, its explanation and the deferred next steps

use crate::config::SelfEditConfig;
use crate::error::DemoError;
use crate::generator::SelfEditGenerator;
use crate::report::{banner, explain, rule, NEXT_STEPS};
use crate::settings::DemoSettings;
use seal_prompt::{preview, PromptBuilder};
use seal_task::ArcTask;
use std::io::Write;

/// Everything one demo run produced
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    /// Loaded task
    pub task: ArcTask,
    /// Full prompt handed to the generator
    pub prompt: String,
    /// Chosen self-edit
    pub config: SelfEditConfig,
    /// Name of the generator that chose it
    pub generator: String,
}

/// Runs the self-edit demo with a given generator
#[derive(Debug)]
pub struct SelfEditDemo<G> {
    settings: DemoSettings,
    builder: PromptBuilder,
    generator: G,
}

impl<G: SelfEditGenerator> SelfEditDemo<G> {
    /// Create demo; the prompt template comes from `settings`
    #[must_use]
    pub fn new(settings: DemoSettings, generator: G) -> Self {
        Self {
            builder: settings.prompt_builder(),
            settings,
            generator,
        }
    }

    /// With a custom prompt builder (overrides the settings template)
    #[inline]
    #[must_use]
    pub fn with_prompt_builder(mut self, builder: PromptBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Active settings
    #[inline]
    #[must_use]
    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    /// Load the task named in the settings
    ///
    /// # Errors
    /// `DemoError::Task` if the file is missing, malformed or invalid.
    pub fn load_task(&self) -> Result<ArcTask, DemoError> {
        let task = ArcTask::load(&self.settings.task_path)?;
        tracing::info!(
            path = %self.settings.task_path.display(),
            train = task.train_len(),
            test = task.test.len(),
            "task loaded"
        );
        Ok(task)
    }

    /// Self-edit prompt for `task`
    #[must_use]
    pub fn build_prompt(&self, task: &ArcTask) -> String {
        self.builder.build(task)
    }

    /// Ask the generator for a configuration and validate it
    ///
    /// # Errors
    /// `DemoError::Generate` if the generator fails, `DemoError::Config` if
    /// its configuration is unusable.
    pub fn generate_config(&mut self, prompt: &str) -> Result<SelfEditConfig, DemoError> {
        let config = self.generator.generate(prompt)?;
        config.validate()?;
        tracing::info!(
            generator = self.generator.name(),
            preset = ?config.preset_number(),
            strategy = %config.training.strategy,
            "self-edit configuration generated"
        );
        Ok(config)
    }

    /// Run the pipeline without writing a report
    ///
    /// # Errors
    /// Any task or generation error.
    pub fn generate(&mut self) -> Result<DemoOutcome, DemoError> {
        let task = self.load_task()?;
        let prompt = self.build_prompt(&task);
        let config = self.generate_config(&prompt)?;
        Ok(self.outcome(task, prompt, config))
    }

    /// Run the pipeline and write the full report to `out`
    ///
    /// Progress lines are written before each step, so a failure leaves the
    /// report cut off at the step that failed.
    ///
    /// # Errors
    /// Any task or generation error, or a failed write.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<DemoOutcome, DemoError> {
        write!(out, "{}", banner("SEAL MVP - Self-Editing Demo"))?;
        writeln!(out)?;

        writeln!(out, "[1/3] Loading sample ARC task...")?;
        let task = self.load_task()?;
        writeln!(
            out,
            "   ✓ Loaded task with {} training examples",
            task.train_len()
        )?;
        writeln!(out)?;

        writeln!(out, "[2/3] Generating self-edit prompt...")?;
        let prompt = self.build_prompt(&task);
        writeln!(out, "   ✓ Prompt created")?;
        writeln!(out)?;
        writeln!(out, "Prompt Preview:")?;
        writeln!(out, "{}", rule())?;
        writeln!(out, "{}", preview(&prompt, self.settings.preview_chars))?;
        writeln!(out, "{}", rule())?;
        writeln!(out)?;

        writeln!(out, "[3/3] Generating self-edit configuration...")?;
        writeln!(
            out,
            "   (In real implementation, this would use vLLM or transformers)"
        )?;
        let config = self.generate_config(&prompt)?;
        writeln!(out, "   ✓ Configuration generated")?;
        writeln!(out)?;

        write!(out, "{}", banner("Generated Self-Edit Configuration:"))?;
        writeln!(out, "{}", config.to_pretty_json()?)?;
        writeln!(out)?;

        write!(out, "{}", banner("Configuration Explanation:"))?;
        writeln!(out)?;
        write!(out, "{}", explain(&config))?;
        writeln!(out)?;

        write!(out, "{}", banner("Demo Complete!"))?;
        writeln!(out)?;
        write!(out, "{NEXT_STEPS}")?;
        writeln!(out)?;
        out.flush()?;

        Ok(self.outcome(task, prompt, config))
    }

    fn outcome(&self, task: ArcTask, prompt: String, config: SelfEditConfig) -> DemoOutcome {
        DemoOutcome {
            task,
            prompt,
            config,
            generator: self.generator.name().to_string(),
        }
    }
}
