//! Dice pools built from characteristic and skill ratings.

use gc_dice::DicePool;

/// Build the pool for a skill check.
///
/// The higher of `characteristic` and `skill` sets the number of positive
/// dice and the lower sets how many of them are upgraded to Proficiency.
/// Opposition works the same way: the higher of `difficulty` and
/// `challenge` sets the number of negative dice and the lower how many are
/// Challenge dice.
pub fn skill_pool(
    characteristic: u32,
    skill: u32,
    difficulty: u32,
    challenge: u32,
    boost: u32,
    setback: u32,
) -> DicePool {
    let proficiency = characteristic.min(skill);
    let challenge_dice = difficulty.min(challenge);
    DicePool {
        boost,
        setback,
        ability: characteristic.max(skill) - proficiency,
        difficulty: difficulty.max(challenge) - challenge_dice,
        proficiency,
        challenge: challenge_dice,
    }
}
