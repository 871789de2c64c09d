//! Narrative dice engine for Cats playing Genesys.
//!
//! Genesys replaces numeric dice with symbolic dice whose faces carry
//! successes, failures, advantages, threats, triumphs and despairs.
//! This crate holds the face tables, assembles and rolls dice pools with
//! an injected random source, and cancels the rolled symbols down to a
//! net [`Outcome`].

pub mod dice;
pub mod error;
pub mod resolution;
mod text;

pub use dice::{DicePool, DieKind, Face, RandomSource, RolledDie, RolledPool, ScriptedRolls, Symbol};
pub use error::{DiceError, DiceResult};
pub use resolution::{Outcome, Tally, resolve};
