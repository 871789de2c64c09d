//! Symbols, die kinds, faces, pools, and rolling.
//!
//! Genesys uses six symbolic dice. Positive dice (Boost, Ability,
//! Proficiency) carry successes, advantages and triumphs; negative dice
//! (Setback, Difficulty, Challenge) carry failures, threats and despairs.

pub mod faces;
pub mod pool;
pub mod roll;

pub use faces::{faces_of, verify_tables};
pub use pool::DicePool;
pub use roll::{RandomSource, RolledDie, RolledPool, ScriptedRolls, roll};

use std::borrow::Cow;
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A narrative symbol printed on a die face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Moves the check towards passing.
    Success,
    /// Cancels one success.
    Failure,
    /// A beneficial side effect.
    Advantage,
    /// Cancels one advantage.
    Threat,
    /// A critical boon. Also counts as one success.
    Triumph,
    /// A critical bane. Also counts as one failure.
    Despair,
}

impl Symbol {
    /// Returns true for symbols that favour the roller.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Success | Self::Advantage | Self::Triumph)
    }

    /// Singular display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Advantage => "Advantage",
            Self::Threat => "Threat",
            Self::Triumph => "Triumph",
            Self::Despair => "Despair",
        }
    }

    /// Plural display name.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Success => "Successes",
            Self::Failure => "Failures",
            Self::Advantage => "Advantages",
            Self::Threat => "Threats",
            Self::Triumph => "Triumphs",
            Self::Despair => "Despairs",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six Genesys dice.
///
/// Variants are declared in canonical pool order, so the derived `Ord`
/// sorts Boost first and Challenge last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DieKind {
    /// Light blue d6, granted by favourable circumstances.
    Boost,
    /// Black d6, imposed by unfavourable circumstances.
    Setback,
    /// Green d8, the basic positive die.
    Ability,
    /// Purple d8, the basic negative die.
    Difficulty,
    /// Yellow d12, an upgraded Ability die.
    Proficiency,
    /// Red d12, an upgraded Difficulty die.
    Challenge,
}

impl DieKind {
    /// Every die kind in canonical order.
    pub const ALL: [DieKind; 6] = [
        Self::Boost,
        Self::Setback,
        Self::Ability,
        Self::Difficulty,
        Self::Proficiency,
        Self::Challenge,
    ];

    /// The fixed face table for this kind.
    pub fn faces(self) -> &'static [Face] {
        faces_of(self)
    }

    /// Number of faces on this die.
    pub fn sides(self) -> usize {
        self.faces().len()
    }

    /// Returns true for dice that add to the roller's pool.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Boost | Self::Ability | Self::Proficiency)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Boost => "Boost",
            Self::Setback => "Setback",
            Self::Ability => "Ability",
            Self::Difficulty => "Difficulty",
            Self::Proficiency => "Proficiency",
            Self::Challenge => "Challenge",
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DieKind {
    type Err = DiceError;

    /// Parse a die kind from its name or one-letter code, ignoring case.
    fn from_str(s: &str) -> DiceResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "boost" | "b" => Ok(Self::Boost),
            "setback" | "s" | "k" => Ok(Self::Setback),
            "ability" | "a" => Ok(Self::Ability),
            "difficulty" | "d" => Ok(Self::Difficulty),
            "proficiency" | "p" => Ok(Self::Proficiency),
            "challenge" | "c" => Ok(Self::Challenge),
            _ => Err(DiceError::InvalidDieKind(s.to_string())),
        }
    }
}

/// The symbols showing on one face of a die. A blank face has none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face(Cow<'static, [Symbol]>);

impl Face {
    /// A face with no symbols.
    pub const BLANK: Face = Face::new(&[]);

    /// Build a face over a static symbol list, as the face tables do.
    pub const fn new(symbols: &'static [Symbol]) -> Self {
        Self(Cow::Borrowed(symbols))
    }

    /// Build a face from an owned symbol list.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self(Cow::Owned(symbols))
    }

    /// The symbols on this face.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Returns true if the face carries no symbols.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that the face could have come off a real die.
    ///
    /// A face never mixes positive and negative symbols and never shows
    /// more than two distinct symbol kinds.
    pub fn validate(&self) -> DiceResult<()> {
        let has_positive = self.0.iter().any(|s| s.is_positive());
        let has_negative = self.0.iter().any(|s| !s.is_positive());
        if has_positive && has_negative {
            return Err(DiceError::CorruptFaceData(format!(
                "face {self} mixes positive and negative symbols"
            )));
        }
        let kinds: HashSet<Symbol> = self.0.iter().copied().collect();
        if kinds.len() > 2 {
            return Err(DiceError::CorruptFaceData(format!(
                "face {self} carries {} symbol kinds",
                kinds.len()
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_blank() {
            return write!(f, "blank");
        }
        let names: Vec<&str> = self.0.iter().map(|s| s.name()).collect();
        write!(f, "{}", names.join(" + "))
    }
}
