//! Random bonus Boost and Setback dice.
//!
//! Cats are fickle. Before a check, each side may pick up a Boost or
//! Setback die for no better reason than their mood.

use gc_dice::DicePool;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Flavour reasons for a random Boost die.
pub const BOOST_REASONS: &[&str] = &[
    "being a great cat",
    "being based",
    "being high on catnip",
    "being in an excellent mood",
    "cuteness",
    "being focused",
    "having recently eaten",
    "impeccable vibes",
];

/// Flavour reasons for a random Setback die.
pub const SETBACK_REASONS: &[&str] = &[
    "discourse",
    "a sudden need to nap",
    "having rotten vibes",
    "being distracted",
];

/// The bonus dice granted to one roll, with a reason for each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusDice {
    /// One reason per Boost die granted.
    pub boost_reasons: Vec<String>,
    /// One reason per Setback die granted.
    pub setback_reasons: Vec<String>,
}

impl BonusDice {
    /// Number of Boost dice granted.
    pub fn boost(&self) -> u32 {
        self.boost_reasons.len() as u32
    }

    /// Number of Setback dice granted.
    pub fn setback(&self) -> u32 {
        self.setback_reasons.len() as u32
    }

    /// Returns true if no bonus dice were granted.
    pub fn is_empty(&self) -> bool {
        self.boost_reasons.is_empty() && self.setback_reasons.is_empty()
    }
}

/// Maybe grant up to two Boost and two Setback dice.
///
/// Each side gets one die with probability `chance`, and having got one,
/// a second with probability `chance` again.
pub fn grant_bonus_dice<R: Rng + ?Sized>(
    pool: DicePool,
    chance: f64,
    rng: &mut R,
) -> (DicePool, BonusDice) {
    let boost = bonus_count(chance, rng);
    let boost_reasons = pick_reasons(BOOST_REASONS, boost, rng);
    let setback = bonus_count(chance, rng);
    let setback_reasons = pick_reasons(SETBACK_REASONS, setback, rng);

    let bonus = BonusDice {
        boost_reasons,
        setback_reasons,
    };
    if !bonus.is_empty() {
        tracing::debug!(
            boost = bonus.boost(),
            setback = bonus.setback(),
            "granted random bonus dice"
        );
    }
    let pool = pool.add_boost(bonus.boost()).add_setback(bonus.setback());
    (pool, bonus)
}

fn bonus_count<R: Rng + ?Sized>(chance: f64, rng: &mut R) -> usize {
    if rng.random::<f64>() >= chance {
        0
    } else if rng.random::<f64>() >= chance {
        1
    } else {
        2
    }
}

fn pick_reasons<R: Rng + ?Sized>(reasons: &[&str], count: usize, rng: &mut R) -> Vec<String> {
    reasons
        .choose_multiple(rng, count)
        .map(|r| r.to_string())
        .collect()
}
