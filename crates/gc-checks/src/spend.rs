//! Spending triumphs, advantages, despairs, and threats after a roll.
//!
//! The symbols left on an attack roll turn into a critical hit and into
//! modifiers banked for the next roll of each side.

use gc_dice::Outcome;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::modifiers::RollModifiers;

/// What the symbols on one roll bought.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpentSymbols {
    /// A critical hit was activated.
    pub crit: bool,
    /// Modifiers for the roller's side's next roll.
    pub own: RollModifiers,
    /// Modifiers for the opposing side's next roll.
    pub opposing: RollModifiers,
}

/// Spend the symbols of a resolved roll.
///
/// - The first triumph activates a crit. Each further triumph either
///   upgrades the roller's side's next roll or the difficulty of the
///   opposing side's next roll, at random.
/// - Without a triumph crit, `crit_rating` advantages buy one. A rating of
///   zero never buys a crit.
/// - Each remaining pair of advantages gives the opposing side a Setback
///   die, and an odd advantage left over gives the roller's side a Boost die.
/// - Each despair at random upgrades the roller's side's next difficulty,
///   gives the opposing side a Boost die, or gives the roller's side a
///   Setback die.
/// - Each pair of threats at random gives the roller's side a Setback die
///   or the opposing side a Boost die.
pub fn spend_outcome<R: Rng + ?Sized>(
    outcome: &Outcome,
    crit_rating: u32,
    rng: &mut R,
) -> SpentSymbols {
    let mut spent = SpentSymbols::default();

    if outcome.triumph_count > 0 {
        spent.crit = true;
        for _ in 1..outcome.triumph_count {
            if rng.random_bool(0.5) {
                spent.own.upgrades += 1;
            } else {
                spent.opposing.difficulty_upgrades += 1;
            }
        }
    }

    let mut advantages = outcome.advantage_count;
    if !spent.crit && crit_rating > 0 && advantages >= crit_rating {
        spent.crit = true;
        advantages -= crit_rating;
    }
    spent.opposing.setback += advantages / 2;
    spent.own.boost += advantages % 2;

    for _ in 0..outcome.despair_count {
        match rng.random_range(0..3) {
            0 => spent.own.difficulty_upgrades += 1,
            1 => spent.opposing.boost += 1,
            _ => spent.own.setback += 1,
        }
    }

    for _ in 0..outcome.threat_count / 2 {
        if rng.random_bool(0.5) {
            spent.own.setback += 1;
        } else {
            spent.opposing.boost += 1;
        }
    }

    tracing::debug!(
        crit = spent.crit,
        own = ?spent.own,
        opposing = ?spent.opposing,
        "spent roll symbols"
    );
    spent
}
