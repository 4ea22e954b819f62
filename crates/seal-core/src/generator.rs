//! Self-edit generators
//!
//! [`SelfEditGenerator`] is where a real inference backend (vLLM,
//! transformers) would plug in. The demo ships two stand-ins:
//! - [`SimulatedGenerator`]: uniform random choice among the presets
//! - [`FixedGenerator`]: always the same configuration

use crate::config::{SelfEditConfig, PRESET_COUNT};
use crate::error::GenerateError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces a self-edit configuration for a prompt
pub trait SelfEditGenerator {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Propose a self-edit for the given prompt
    ///
    /// # Errors
    /// Backend-specific generation failures.
    fn generate(&mut self, prompt: &str) -> Result<SelfEditConfig, GenerateError>;
}

impl<G: SelfEditGenerator + ?Sized> SelfEditGenerator for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate(&mut self, prompt: &str) -> Result<SelfEditConfig, GenerateError> {
        (**self).generate(prompt)
    }
}

/// Stand-in for a model: picks one of the presets at random
///
/// The prompt is ignored.
#[derive(Debug, Clone)]
pub struct SimulatedGenerator {
    rng: StdRng,
    presets: [SelfEditConfig; PRESET_COUNT],
}

impl SimulatedGenerator {
    /// Generator seeded from OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible generator
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            presets: SelfEditConfig::presets(),
        }
    }
}

impl Default for SimulatedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SelfEditGenerator for SimulatedGenerator {
    fn name(&self) -> &str {
        "simulated"
    }

    fn generate(&mut self, _prompt: &str) -> Result<SelfEditConfig, GenerateError> {
        let idx = self.rng.gen_range(0..self.presets.len());
        tracing::debug!(preset = idx + 1, "simulated model picked preset");
        Ok(self.presets[idx])
    }
}

/// Always returns the same configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FixedGenerator {
    config: SelfEditConfig,
}

impl FixedGenerator {
    /// Generator for an arbitrary configuration
    #[inline]
    #[must_use]
    pub fn new(config: SelfEditConfig) -> Self {
        Self { config }
    }

    /// Generator for preset `number` (1-based)
    ///
    /// # Errors
    /// `GenerateError::PresetOutOfRange` unless `1 <= number <= PRESET_COUNT`.
    pub fn preset(number: usize) -> Result<Self, GenerateError> {
        number
            .checked_sub(1)
            .and_then(|idx| SelfEditConfig::presets().get(idx).copied())
            .map(Self::new)
            .ok_or(GenerateError::PresetOutOfRange {
                number,
                available: PRESET_COUNT,
            })
    }

    /// The configuration this generator returns
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SelfEditConfig {
        &self.config
    }
}

impl SelfEditGenerator for FixedGenerator {
    fn name(&self) -> &str {
        "fixed"
    }

    fn generate(&mut self, _prompt: &str) -> Result<SelfEditConfig, GenerateError> {
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn simulated_returns_a_preset() {
        let mut generator = SimulatedGenerator::new();
        for _ in 0..50 {
            let config = generator.generate("prompt").unwrap();
            assert!(config.preset_number().is_some());
        }
    }

    #[test]
    fn simulated_is_reproducible_with_seed() {
        let mut a = SimulatedGenerator::with_seed(42);
        let mut b = SimulatedGenerator::with_seed(42);

        let first: Vec<_> = (0..20).map(|_| a.generate("").unwrap()).collect();
        let second: Vec<_> = (0..20).map(|_| b.generate("").unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn simulated_covers_every_preset() {
        let mut generator = SimulatedGenerator::with_seed(7);
        let seen: HashSet<_> = (0..200)
            .filter_map(|_| generator.generate("").unwrap().preset_number())
            .collect();
        assert_eq!(seen.len(), PRESET_COUNT);
    }

    #[test]
    fn fixed_preset_numbers_are_one_based() {
        let presets = SelfEditConfig::presets();
        for number in 1..=PRESET_COUNT {
            let mut generator = FixedGenerator::preset(number).unwrap();
            assert_eq!(generator.generate("").unwrap(), presets[number - 1]);
        }
    }

    #[test]
    fn fixed_preset_out_of_range() {
        for number in [0, PRESET_COUNT + 1] {
            assert!(matches!(
                FixedGenerator::preset(number),
                Err(GenerateError::PresetOutOfRange { available: 3, .. })
            ));
        }
    }

    #[test]
    fn boxed_generator_delegates() {
        let mut generator: Box<dyn SelfEditGenerator> =
            Box::new(FixedGenerator::preset(2).unwrap());
        assert_eq!(generator.name(), "fixed");
        assert_eq!(generator.generate("").unwrap().preset_number(), Some(2));
    }

    #[test]
    fn preset_error_uses_the_number_given() {
        let err = FixedGenerator::preset(4).unwrap_err();
        assert_eq!(err.to_string(), "preset 4 does not exist (choose 1 to 3)");
    }

    proptest! {
        #[test]
        fn prop_simulated_only_returns_presets(seed in any::<u64>(), draws in 1..20usize) {
            let mut generator = SimulatedGenerator::with_seed(seed);
            for _ in 0..draws {
                let config = generator.generate("prompt").unwrap();
                prop_assert!(config.preset_number().is_some());
            }
        }

        #[test]
        fn prop_seed_fixes_the_sequence(seed in any::<u64>()) {
            let mut a = SimulatedGenerator::with_seed(seed);
            let mut b = SimulatedGenerator::with_seed(seed);
            for _ in 0..5 {
                prop_assert_eq!(a.generate("").unwrap(), b.generate("").unwrap());
            }
        }

        #[test]
        fn prop_preset_numbers_are_one_based(number in 0..10usize) {
            let result = FixedGenerator::preset(number);
            if (1..=PRESET_COUNT).contains(&number) {
                let mut generator = result.unwrap();
                prop_assert_eq!(generator.generate("").unwrap().preset_number(), Some(number));
            } else {
                let is_out_of_range = matches!(
                    result,
                    Err(GenerateError::PresetOutOfRange { number: n, available: PRESET_COUNT }) if n == number
                );
                prop_assert!(is_out_of_range);
            }
        }
    }
}
