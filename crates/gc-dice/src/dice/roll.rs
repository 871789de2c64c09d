//! Random sources, single-die rolls, and rolled pools.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{DieKind, Face};
use crate::error::{DiceError, DiceResult};
use crate::resolution::{self, Outcome};

/// A source of uniformly distributed face indices.
///
/// Sources are passed into every roll rather than held globally, so a
/// seeded or scripted source replays the same faces. A source is a
/// single-threaded capability: callers sharing one across threads must
/// serialize access themselves.
pub trait RandomSource {
    /// Draw an index in `0..bound`.
    fn next_index(&mut self, bound: usize) -> DiceResult<usize>;
}

impl<R: rand::Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> DiceResult<usize> {
        if bound == 0 {
            return Err(DiceError::RandomSourceExhausted);
        }
        Ok(self.random_range(0..bound))
    }
}

/// A random source that replays a fixed list of face indices.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    indices: VecDeque<usize>,
}

impl ScriptedRolls {
    /// Create a source that yields `indices` in order.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Number of indices not yet drawn.
    pub fn remaining(&self) -> usize {
        self.indices.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn next_index(&mut self, bound: usize) -> DiceResult<usize> {
        match self.indices.pop_front() {
            Some(index) if index < bound => Ok(index),
            _ => Err(DiceError::RandomSourceExhausted),
        }
    }
}

/// Roll one die of the given kind.
pub fn roll<R: RandomSource + ?Sized>(kind: DieKind, rng: &mut R) -> DiceResult<Face> {
    roll_indexed(kind, rng).map(|(_, face)| face)
}

/// Roll one die, returning the face index alongside the face.
pub(crate) fn roll_indexed<R: RandomSource + ?Sized>(
    kind: DieKind,
    rng: &mut R,
) -> DiceResult<(usize, Face)> {
    let faces = kind.faces();
    let index = rng.next_index(faces.len())?;
    let face = faces
        .get(index)
        .cloned()
        .ok_or(DiceError::RandomSourceExhausted)?;
    tracing::trace!(%kind, index, %face, "rolled die");
    Ok((index, face))
}

/// The face showing on one rolled die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledDie {
    /// Which die was rolled.
    pub kind: DieKind,
    /// Index into the die's face table.
    pub face_index: usize,
    /// The face that came up.
    pub face: Face,
}

/// Every die of a pool, each with the face it landed on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledPool {
    /// Rolled dice in canonical pool order.
    pub dice: Vec<RolledDie>,
}

impl RolledPool {
    /// The faces that came up, in roll order.
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.dice.iter().map(|d| &d.face)
    }

    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if no dice were rolled.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Cancel the rolled symbols down to a net outcome.
    pub fn resolve(&self) -> DiceResult<Outcome> {
        resolution::resolve(self.faces())
    }
}

impl std::fmt::Display for RolledPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self
            .dice
            .iter()
            .map(|d| format!("{}: {}", d.kind, d.face))
            .collect();
        write!(f, "[{}]", faces.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Symbol;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scripted_roll_picks_face() {
        let mut rng = ScriptedRolls::new([3]);
        let face = roll(DieKind::Ability, &mut rng).unwrap();
        assert_eq!(face.symbols(), &[Symbol::Success, Symbol::Success]);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn scripted_source_runs_dry() {
        let mut rng = ScriptedRolls::new([]);
        assert_eq!(
            roll(DieKind::Boost, &mut rng),
            Err(DiceError::RandomSourceExhausted)
        );
    }

    #[test]
    fn scripted_index_out_of_range() {
        let mut rng = ScriptedRolls::new([6]);
        assert_eq!(
            roll(DieKind::Setback, &mut rng),
            Err(DiceError::RandomSourceExhausted)
        );
    }

    #[test]
    fn seeded_rolls_stay_on_table() {
        let mut rng = StdRng::seed_from_u64(7);
        for kind in DieKind::ALL {
            for _ in 0..50 {
                let face = roll(kind, &mut rng).unwrap();
                assert!(kind.faces().contains(&face));
            }
        }
    }

    #[test]
    fn seeded_rolls_are_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                roll(DieKind::Challenge, &mut rng1),
                roll(DieKind::Challenge, &mut rng2)
            );
        }
    }

    #[test]
    fn rolled_pool_display() {
        let rolled = RolledPool {
            dice: vec![
                RolledDie {
                    kind: DieKind::Ability,
                    face_index: 6,
                    face: DieKind::Ability.faces()[6].clone(),
                },
                RolledDie {
                    kind: DieKind::Difficulty,
                    face_index: 0,
                    face: Face::BLANK,
                },
            ],
        };
        assert_eq!(
            rolled.to_string(),
            "[Ability: Success + Advantage, Difficulty: blank]"
        );
    }
}
