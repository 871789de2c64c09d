//! Initiative ordering from resolved checks.

use gc_dice::Outcome;

/// Order combatants by their initiative outcome, strongest first.
///
/// Strength compares net successes, then net advantages. Ties keep the
/// order the entries were given in.
pub fn initiative_order<T>(mut entries: Vec<(T, Outcome)>) -> Vec<T> {
    entries.sort_by(|(_, a), (_, b)| b.strength_cmp(a));
    entries.into_iter().map(|(who, _)| who).collect()
}
