//! Configuration for skill checks.

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};

/// Highest difficulty on the Genesys ladder (Formidable).
pub const MAX_DIFFICULTY: u32 = 5;

/// Configuration for performing checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// RNG seed for reproducible checks. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Chance (0.0-1.0) of each random bonus Boost or Setback die.
    pub bonus_die_chance: f64,
    /// Difficulty dice for a check that does not name its own (0-5).
    pub default_difficulty: u32,
    /// Whether random bonus dice are granted at all.
    pub random_bonus_dice: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            seed: None,
            bonus_die_chance: 0.2,
            default_difficulty: 2,
            random_bonus_dice: true,
        }
    }
}

impl CheckConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> RulesResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| RulesError::InvalidConfig(e.to_string()))?;
        let chance = config.bonus_die_chance;
        let difficulty = config.default_difficulty;
        Ok(config
            .with_bonus_die_chance(chance)
            .with_default_difficulty(difficulty))
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the bonus die chance (clamped to 0.0-1.0).
    pub fn with_bonus_die_chance(mut self, chance: f64) -> Self {
        let clamped = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        if clamped != chance {
            tracing::warn!(requested = chance, clamped, "bonus die chance out of range");
        }
        self.bonus_die_chance = clamped;
        self
    }

    /// Set the default difficulty (clamped to 0-5).
    pub fn with_default_difficulty(mut self, difficulty: u32) -> Self {
        if difficulty > MAX_DIFFICULTY {
            tracing::warn!(requested = difficulty, "default difficulty above Formidable");
        }
        self.default_difficulty = difficulty.min(MAX_DIFFICULTY);
        self
    }

    /// Turn random bonus dice on or off.
    pub fn with_random_bonus_dice(mut self, enabled: bool) -> Self {
        self.random_bonus_dice = enabled;
        self
    }
}
