//! Performing skill checks.

use gc_dice::{DicePool, Outcome, RolledPool};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bonus::{BonusDice, grant_bonus_dice};
use crate::config::CheckConfig;
use crate::error::RulesResult;
use crate::modifiers::RollModifiers;
use crate::skill::skill_pool;

/// A request to perform a skill check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Characteristic rating.
    pub characteristic: u32,
    /// Skill rank.
    pub skill: u32,
    /// Difficulty dice. `None` uses the configured default.
    pub difficulty: Option<u32>,
    /// Opposition rating that upgrades Difficulty into Challenge dice.
    pub challenge: u32,
    /// Boost dice from circumstances.
    pub boost: u32,
    /// Setback dice from circumstances.
    pub setback: u32,
    /// Banked modifiers applied before rolling.
    pub modifiers: RollModifiers,
}

impl CheckRequest {
    /// Request a check with a characteristic and skill rating.
    pub fn new(characteristic: u32, skill: u32) -> Self {
        Self {
            characteristic,
            skill,
            ..Self::default()
        }
    }

    /// Set the number of Difficulty dice.
    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set the opposition rating.
    pub fn with_challenge(mut self, challenge: u32) -> Self {
        self.challenge = challenge;
        self
    }

    /// Add circumstantial Boost and Setback dice.
    pub fn with_circumstances(mut self, boost: u32, setback: u32) -> Self {
        self.boost = boost;
        self.setback = setback;
        self
    }

    /// Apply banked roll modifiers.
    pub fn with_modifiers(mut self, modifiers: RollModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// The result of performing a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The pool that was rolled, bonus dice included.
    pub pool: DicePool,
    /// Random bonus dice granted before the roll.
    pub bonus: BonusDice,
    /// Every die with the face it landed on.
    pub rolled: RolledPool,
    /// The resolved outcome.
    pub outcome: Outcome,
}

impl CheckResult {
    /// Whether the check passed.
    ///
    /// Only net successes pass. A net-neutral roll, where successes and
    /// failures cancel exactly, fails.
    pub fn passed(&self) -> bool {
        self.outcome.success
    }
}

/// Perform a skill check.
///
/// Builds the skill pool, applies the request's modifiers, grants random
/// bonus dice when enabled, then rolls and resolves.
#[tracing::instrument(
    skip(config, request, rng),
    fields(characteristic = request.characteristic, skill = request.skill)
)]
pub fn perform_check<R: Rng>(
    config: &CheckConfig,
    request: &CheckRequest,
    rng: &mut R,
) -> RulesResult<CheckResult> {
    let pool = skill_pool(
        request.characteristic,
        request.skill,
        request.difficulty.unwrap_or(config.default_difficulty),
        request.challenge,
        request.boost,
        request.setback,
    );
    let pool = request.modifiers.apply(pool);

    let (pool, bonus) = if config.random_bonus_dice {
        grant_bonus_dice(pool, config.bonus_die_chance, rng)
    } else {
        (pool, BonusDice::default())
    };

    let rolled = pool.roll(rng)?;
    let outcome = rolled.resolve()?;
    tracing::info!(%pool, %outcome, passed = outcome.success, "check resolved");

    Ok(CheckResult {
        pool,
        bonus,
        rolled,
        outcome,
    })
}

/// A long-lived roller that owns its configuration and RNG.
#[derive(Debug, Clone)]
pub struct Checker {
    config: CheckConfig,
    rng: StdRng,
}

impl Checker {
    /// Create a checker, seeding the RNG from the config or the OS.
    pub fn new(config: CheckConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// The active configuration.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Perform a skill check.
    pub fn check(&mut self, request: &CheckRequest) -> RulesResult<CheckResult> {
        perform_check(&self.config, request, &mut self.rng)
    }

    /// Roll and resolve an explicit pool, without skill lookup or bonus dice.
    pub fn roll_pool(&mut self, pool: &DicePool) -> RulesResult<Outcome> {
        let rolled = pool.roll(&mut self.rng)?;
        rolled.resolve().map_err(Into::into)
    }
}
