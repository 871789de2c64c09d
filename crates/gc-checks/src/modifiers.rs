//! Pending modifiers for the next roll.

use gc_dice::DicePool;
use serde::{Deserialize, Serialize};

/// Adjustments banked for a side's next roll, typically produced by
/// [`spend_outcome`](crate::spend::spend_outcome).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollModifiers {
    /// Extra Boost dice.
    pub boost: u32,
    /// Extra Setback dice.
    pub setback: u32,
    /// Ability upgrades (negative downgrades).
    pub upgrades: i32,
    /// Difficulty upgrades (negative downgrades).
    pub difficulty_upgrades: i32,
}

impl RollModifiers {
    /// Returns true if applying these modifiers changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the modifiers: upgrades first, then extra Boost and Setback dice.
    pub fn apply(&self, pool: DicePool) -> DicePool {
        pool.upgrade(self.upgrades)
            .upgrade_difficulty(self.difficulty_upgrades)
            .add_boost(self.boost)
            .add_setback(self.setback)
    }
}
