//! Face tables for the six Genesys dice, as printed in the core rulebook.
//!
//! The tables are `static` and never written after start-up, so any number
//! of threads may read them without synchronization.

use super::{DieKind, Face, Symbol};
use crate::error::{DiceError, DiceResult};

const S: Symbol = Symbol::Success;
const F: Symbol = Symbol::Failure;
const A: Symbol = Symbol::Advantage;
const T: Symbol = Symbol::Threat;
const TRIUMPH: Symbol = Symbol::Triumph;
const DESPAIR: Symbol = Symbol::Despair;

/// Boost die (d6).
pub static BOOST: [Face; 6] = [
    Face::BLANK,
    Face::BLANK,
    Face::new(&[S]),
    Face::new(&[S, A]),
    Face::new(&[A, A]),
    Face::new(&[A]),
];

/// Setback die (d6).
pub static SETBACK: [Face; 6] = [
    Face::BLANK,
    Face::BLANK,
    Face::new(&[F]),
    Face::new(&[F]),
    Face::new(&[T]),
    Face::new(&[T]),
];

/// Ability die (d8).
pub static ABILITY: [Face; 8] = [
    Face::BLANK,
    Face::new(&[S]),
    Face::new(&[S]),
    Face::new(&[S, S]),
    Face::new(&[A]),
    Face::new(&[A]),
    Face::new(&[S, A]),
    Face::new(&[A, A]),
];

/// Difficulty die (d8).
pub static DIFFICULTY: [Face; 8] = [
    Face::BLANK,
    Face::new(&[F]),
    Face::new(&[F, F]),
    Face::new(&[T]),
    Face::new(&[T]),
    Face::new(&[T]),
    Face::new(&[T, T]),
    Face::new(&[F, T]),
];

/// Proficiency die (d12).
pub static PROFICIENCY: [Face; 12] = [
    Face::BLANK,
    Face::new(&[S]),
    Face::new(&[S]),
    Face::new(&[S, S]),
    Face::new(&[S, S]),
    Face::new(&[A]),
    Face::new(&[S, A]),
    Face::new(&[S, A]),
    Face::new(&[S, A]),
    Face::new(&[A, A]),
    Face::new(&[A, A]),
    Face::new(&[TRIUMPH]),
];

/// Challenge die (d12).
pub static CHALLENGE: [Face; 12] = [
    Face::BLANK,
    Face::new(&[F]),
    Face::new(&[F]),
    Face::new(&[F, F]),
    Face::new(&[F, F]),
    Face::new(&[T]),
    Face::new(&[T]),
    Face::new(&[F, T]),
    Face::new(&[F, T]),
    Face::new(&[T, T]),
    Face::new(&[T, T]),
    Face::new(&[DESPAIR]),
];

/// The face table for a die kind.
pub fn faces_of(kind: DieKind) -> &'static [Face] {
    match kind {
        DieKind::Boost => &BOOST,
        DieKind::Setback => &SETBACK,
        DieKind::Ability => &ABILITY,
        DieKind::Difficulty => &DIFFICULTY,
        DieKind::Proficiency => &PROFICIENCY,
        DieKind::Challenge => &CHALLENGE,
    }
}

/// Check every face table for integrity.
///
/// Each face must validate and carry only symbols matching its die's
/// polarity.
pub fn verify_tables() -> DiceResult<()> {
    for kind in DieKind::ALL {
        let faces = faces_of(kind);
        if faces.is_empty() {
            return Err(DiceError::CorruptFaceData(format!("{kind} die has no faces")));
        }
        for (index, face) in faces.iter().enumerate() {
            face.validate()?;
            if face.symbols().iter().any(|s| s.is_positive() != kind.is_positive()) {
                return Err(DiceError::CorruptFaceData(format!(
                    "{kind} face {index} ({face}) carries a symbol of the wrong polarity"
                )));
            }
        }
    }
    Ok(())
}
