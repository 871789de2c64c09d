//! Symbol aggregation and net cancellation.
//!
//! Resolution counts every symbol across the rolled faces, then cancels
//! successes against failures and advantages against threats one for
//! one. Triumphs and despairs each also count as a success or failure
//! for cancellation, but their own counts pass through untouched.
//! Only the totals matter, so the order of the faces never changes the
//! result.

pub mod outcome;

pub use outcome::Outcome;

use serde::{Deserialize, Serialize};

use crate::dice::{Face, Symbol};
use crate::error::DiceResult;

/// Raw symbol counts before cancellation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Successes, including one per triumph.
    pub success: u32,
    /// Failures, including one per despair.
    pub failure: u32,
    /// Advantages.
    pub advantage: u32,
    /// Threats.
    pub threat: u32,
    /// Triumphs.
    pub triumph: u32,
    /// Despairs.
    pub despair: u32,
}

impl Tally {
    /// Count the symbols on every face.
    pub fn from_faces<'a, I>(faces: I) -> DiceResult<Self>
    where
        I: IntoIterator<Item = &'a Face>,
    {
        let mut tally = Self::default();
        for face in faces {
            tally.add_face(face)?;
        }
        Ok(tally)
    }

    /// Count the symbols on one face.
    pub fn add_face(&mut self, face: &Face) -> DiceResult<()> {
        face.validate()?;
        for symbol in face.symbols() {
            self.add_symbol(*symbol);
        }
        Ok(())
    }

    /// Count a single symbol.
    pub fn add_symbol(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::Success => bump(&mut self.success),
            Symbol::Failure => bump(&mut self.failure),
            Symbol::Advantage => bump(&mut self.advantage),
            Symbol::Threat => bump(&mut self.threat),
            Symbol::Triumph => {
                bump(&mut self.triumph);
                bump(&mut self.success);
            }
            Symbol::Despair => {
                bump(&mut self.despair);
                bump(&mut self.failure);
            }
        }
    }
}

fn bump(counter: &mut u32) {
    *counter = counter.saturating_add(1);
}

/// Resolve a set of rolled faces into a net outcome.
///
/// An empty set resolves to the neutral outcome. Every face must pass
/// [`Face::validate`]: a face mixing positive and negative symbols, or
/// carrying more than two symbol kinds, cannot come off a real die and
/// fails with [`DiceError::CorruptFaceData`](crate::error::DiceError::CorruptFaceData).
pub fn resolve<'a, I>(faces: I) -> DiceResult<Outcome>
where
    I: IntoIterator<Item = &'a Face>,
{
    let tally = Tally::from_faces(faces)?;
    let outcome = Outcome::from_tally(&tally);
    tracing::debug!(?tally, %outcome, "resolved roll");
    Ok(outcome)
}
