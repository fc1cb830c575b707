//! Configuration controlling the iterative merge loop.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StemtokError};

/// Number of merge rounds a run performs unless overridden.
pub const DEFAULT_MAX_ROUNDS: usize = 20;

/// Configuration for the iterative pair-merge loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergerConfig {
    /// Upper bound on merge rounds; each round applies at most one merge.
    pub max_rounds: usize,
    /// Enables per-round logging through the `log` facade.
    pub show_progress: bool,
}

impl MergerConfig {
    /// Returns a builder initialised with [`MergerConfig::default`].
    #[must_use]
    pub fn builder() -> MergerBuilder {
        MergerBuilder::default()
    }

    /// Validates the invariants required for a merge run.
    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(StemtokError::InvalidConfig(
                "max_rounds must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            show_progress: true,
        }
    }
}

/// Builder for [`MergerConfig`].
#[derive(Debug, Default, Clone)]
pub struct MergerBuilder {
    cfg: MergerConfig,
}

impl MergerBuilder {
    /// Creates a builder with [`MergerConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of merge rounds.
    #[must_use]
    pub fn max_rounds(mut self, value: usize) -> Self {
        self.cfg.max_rounds = value;
        self
    }

    /// Enables or disables per-round logging.
    #[must_use]
    pub fn show_progress(mut self, enabled: bool) -> Self {
        self.cfg.show_progress = enabled;
        self
    }

    /// Finalises the builder, returning a validated [`MergerConfig`].
    pub fn build(self) -> Result<MergerConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let cfg = MergerConfig::builder()
            .max_rounds(5)
            .show_progress(false)
            .build()
            .expect("config should be valid");
        assert_eq!(cfg.max_rounds, 5);
        assert!(!cfg.show_progress);
    }

    #[test]
    fn default_round_limit_matches_the_experiment() {
        assert_eq!(MergerConfig::default().max_rounds, 20);
    }

    #[test]
    fn validate_rejects_zero_rounds() {
        let err = MergerConfig::builder()
            .max_rounds(0)
            .build()
            .expect_err("validation should fail");
        assert!(matches!(
            err,
            StemtokError::InvalidConfig(message) if message.contains("max_rounds")
        ));
    }
}
