//! Skill checks on top of the Genesys dice engine.
//!
//! Builds dice pools from a characteristic and skill rating, applies
//! pending roll modifiers and random bonus dice, rolls, and resolves.
//! Spends the symbols of a resolved roll into new modifiers, and orders
//! initiative from resolved outcomes.

pub mod bonus;
pub mod check;
pub mod config;
pub mod error;
pub mod initiative;
pub mod modifiers;
pub mod skill;
pub mod spend;

pub use bonus::{BonusDice, grant_bonus_dice};
pub use check::{CheckRequest, CheckResult, Checker, perform_check};
pub use config::CheckConfig;
pub use error::{RulesError, RulesResult};
pub use initiative::initiative_order;
pub use modifiers::RollModifiers;
pub use skill::skill_pool;
pub use spend::{SpentSymbols, spend_outcome};
