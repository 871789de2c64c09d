//! Dice pool construction, upgrades, and rolling.

use serde::{Deserialize, Serialize};

use super::DieKind;
use super::roll::{RandomSource, RolledDie, RolledPool, roll_indexed};
use crate::error::{DiceError, DiceResult};
use crate::text;

/// How many of each die kind to roll together.
///
/// Dice are always iterated, rolled, and rendered in canonical order
/// (Boost, Setback, Ability, Difficulty, Proficiency, Challenge), whatever
/// order the caller added them in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DicePool {
    /// Boost dice.
    pub boost: u32,
    /// Setback dice.
    pub setback: u32,
    /// Ability dice.
    pub ability: u32,
    /// Difficulty dice.
    pub difficulty: u32,
    /// Proficiency dice.
    pub proficiency: u32,
    /// Challenge dice.
    pub challenge: u32,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from `(kind, count)` pairs.
    ///
    /// Counts for a kind listed more than once are summed. Any negative
    /// count rejects the whole specification.
    pub fn build<I, N>(counts: I) -> DiceResult<Self>
    where
        I: IntoIterator<Item = (DieKind, N)>,
        N: Into<i64>,
    {
        let mut pool = Self::new();
        for (kind, count) in counts {
            let count: i64 = count.into();
            if count < 0 {
                return Err(DiceError::InvalidPoolSpec(format!(
                    "negative count {count} for {kind} dice"
                )));
            }
            let count = u32::try_from(count).map_err(|_| {
                DiceError::InvalidPoolSpec(format!("too many {kind} dice: {count}"))
            })?;
            let slot = pool.slot_mut(kind);
            *slot = slot.checked_add(count).ok_or_else(|| {
                DiceError::InvalidPoolSpec(format!("too many {kind} dice"))
            })?;
        }
        Ok(pool)
    }

    /// Add `count` dice of the given kind.
    pub fn with(mut self, kind: DieKind, count: u32) -> Self {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(count);
        self
    }

    /// Add `count` Boost dice.
    pub fn add_boost(self, count: u32) -> Self {
        self.with(DieKind::Boost, count)
    }

    /// Add `count` Setback dice.
    pub fn add_setback(self, count: u32) -> Self {
        self.with(DieKind::Setback, count)
    }

    /// How many dice of a kind are in the pool.
    pub fn count(&self, kind: DieKind) -> u32 {
        match kind {
            DieKind::Boost => self.boost,
            DieKind::Setback => self.setback,
            DieKind::Ability => self.ability,
            DieKind::Difficulty => self.difficulty,
            DieKind::Proficiency => self.proficiency,
            DieKind::Challenge => self.challenge,
        }
    }

    fn slot_mut(&mut self, kind: DieKind) -> &mut u32 {
        match kind {
            DieKind::Boost => &mut self.boost,
            DieKind::Setback => &mut self.setback,
            DieKind::Ability => &mut self.ability,
            DieKind::Difficulty => &mut self.difficulty,
            DieKind::Proficiency => &mut self.proficiency,
            DieKind::Challenge => &mut self.challenge,
        }
    }

    /// Total number of dice in the pool.
    pub fn total(&self) -> u64 {
        DieKind::ALL.iter().map(|k| u64::from(self.count(*k))).sum()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero `(kind, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (DieKind, u32)> + '_ {
        DieKind::ALL
            .into_iter()
            .map(|k| (k, self.count(k)))
            .filter(|(_, n)| *n > 0)
    }

    /// Upgrade Ability dice into Proficiency dice.
    ///
    /// Each step turns one Ability die into a Proficiency die, or adds an
    /// Ability die when none are left to upgrade. Negative `times`
    /// downgrades Proficiency into Ability; a downgrade never removes dice,
    /// so it stops once no Proficiency dice remain.
    pub fn upgrade(mut self, times: i32) -> Self {
        shift_tier(&mut self.ability, &mut self.proficiency, times);
        self
    }

    /// Upgrade Difficulty dice into Challenge dice, mirroring [`DicePool::upgrade`].
    pub fn upgrade_difficulty(mut self, times: i32) -> Self {
        shift_tier(&mut self.difficulty, &mut self.challenge, times);
        self
    }

    /// Roll every die in the pool.
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> DiceResult<RolledPool> {
        tracing::debug!(pool = %self, dice = self.total(), "rolling pool");
        let mut dice = Vec::new();
        for (kind, count) in self.iter() {
            for _ in 0..count {
                let (face_index, face) = roll_indexed(kind, rng)?;
                dice.push(RolledDie {
                    kind,
                    face_index,
                    face,
                });
            }
        }
        Ok(RolledPool { dice })
    }
}

fn shift_tier(base: &mut u32, upgraded: &mut u32, times: i32) {
    if times >= 0 {
        for _ in 0..times {
            if *base > 0 {
                *base -= 1;
                *upgraded = upgraded.saturating_add(1);
            } else {
                *base = base.saturating_add(1);
            }
        }
    } else {
        let downgrades = times.unsigned_abs().min(*upgraded);
        *upgraded -= downgrades;
        *base = base.saturating_add(downgrades);
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(kind, n)| format!("{n} {kind} {}", if n == 1 { "die" } else { "dice" }))
            .collect();
        if parts.is_empty() {
            return write!(f, "no dice");
        }
        f.write_str(&text::join_list(&parts))
    }
}
