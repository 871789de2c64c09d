//! The net result of a resolved roll.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Tally;
use crate::dice::Symbol;
use crate::text;

/// The net narrative result of a roll after cancellation.
///
/// At most one of `success`/`failure` is set, and at most one of
/// `advantage_count`/`threat_count` is non-zero. When neither `success`
/// nor `failure` is set the roll was net neutral; whether that counts as
/// passing is up to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// Net successes remain.
    pub success: bool,
    /// Net failures remain.
    pub failure: bool,
    /// Net successes after cancellation.
    pub success_count: u32,
    /// Net failures after cancellation.
    pub failure_count: u32,
    /// Net advantages after cancellation.
    pub advantage_count: u32,
    /// Net threats after cancellation.
    pub threat_count: u32,
    /// Triumphs rolled. Never cancelled.
    pub triumph_count: u32,
    /// Despairs rolled. Never cancelled.
    pub despair_count: u32,
}

impl Outcome {
    /// Cancel raw symbol counts down to a net outcome.
    pub fn from_tally(tally: &Tally) -> Self {
        let success_count = tally.success.saturating_sub(tally.failure);
        let failure_count = tally.failure.saturating_sub(tally.success);
        Self {
            success: success_count > 0,
            failure: failure_count > 0,
            success_count,
            failure_count,
            advantage_count: tally.advantage.saturating_sub(tally.threat),
            threat_count: tally.threat.saturating_sub(tally.advantage),
            triumph_count: tally.triumph,
            despair_count: tally.despair,
        }
    }

    /// Net successes, negative when failures remain.
    pub fn net_successes(&self) -> i64 {
        i64::from(self.success_count) - i64::from(self.failure_count)
    }

    /// Net advantages, negative when threats remain.
    pub fn net_advantages(&self) -> i64 {
        i64::from(self.advantage_count) - i64::from(self.threat_count)
    }

    /// Returns true when every symbol cancelled out and nothing is left to report.
    pub fn is_wash(&self) -> bool {
        *self == Self::default()
    }

    /// Compare two outcomes by strength: net successes first, then net advantages.
    pub fn strength_cmp(&self, other: &Self) -> Ordering {
        (self.net_successes(), self.net_advantages())
            .cmp(&(other.net_successes(), other.net_advantages()))
    }
}

impl std::fmt::Display for Outcome {
    /// Successes and failures implied by triumphs and despairs are left out
    /// of the text, since the triumph or despair is listed itself.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plain = self.net_successes() - i64::from(self.triumph_count)
            + i64::from(self.despair_count);
        let successes = u32::try_from(plain.max(0)).unwrap_or(u32::MAX);
        let failures = u32::try_from((-plain).max(0)).unwrap_or(u32::MAX);
        let parts: Vec<String> = [
            (successes, Symbol::Success),
            (failures, Symbol::Failure),
            (self.advantage_count, Symbol::Advantage),
            (self.threat_count, Symbol::Threat),
            (self.triumph_count, Symbol::Triumph),
            (self.despair_count, Symbol::Despair),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, symbol)| {
            let noun = if n == 1 { symbol.name() } else { symbol.plural() };
            format!("{n} {noun}")
        })
        .collect();
        if parts.is_empty() {
            return write!(f, "a wash");
        }
        f.write_str(&text::join_list(&parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(success: u32, failure: u32, advantage: u32, threat: u32) -> Tally {
        Tally {
            success,
            failure,
            advantage,
            threat,
            ..Tally::default()
        }
    }

    #[test]
    fn cancellation() {
        let outcome = Outcome::from_tally(&tally(2, 1, 1, 0));
        assert_eq!(
            outcome,
            Outcome {
                success: true,
                success_count: 1,
                advantage_count: 1,
                ..Outcome::default()
            }
        );
    }

    #[test]
    fn failures_win() {
        let outcome = Outcome::from_tally(&tally(1, 3, 2, 4));
        assert!(outcome.failure);
        assert!(!outcome.success);
        assert_eq!(outcome.failure_count, 2);
        assert_eq!(outcome.threat_count, 2);
        assert_eq!(outcome.net_successes(), -2);
        assert_eq!(outcome.net_advantages(), -2);
    }

    #[test]
    fn wash() {
        let outcome = Outcome::from_tally(&tally(2, 2, 1, 1));
        assert!(outcome.is_wash());
        assert_eq!(outcome.to_string(), "a wash");
    }

    #[test]
    fn lone_triumph_reads_as_triumph() {
        let outcome = Outcome::from_tally(&Tally {
            success: 1,
            triumph: 1,
            ..Tally::default()
        });
        assert!(outcome.success);
        assert_eq!(outcome.success_count, 1);
        insta::assert_snapshot!(outcome.to_string(), @"1 Triumph");
    }

    #[test]
    fn lone_despair_reads_as_despair() {
        let outcome = Outcome::from_tally(&Tally {
            failure: 1,
            despair: 1,
            ..Tally::default()
        });
        assert!(outcome.failure);
        assert_eq!(outcome.to_string(), "1 Despair");
    }

    #[test]
    fn cancelled_triumph_is_not_a_wash() {
        let outcome = Outcome::from_tally(&Tally {
            success: 1,
            failure: 1,
            triumph: 1,
            ..Tally::default()
        });
        assert!(!outcome.is_wash());
        assert!(!outcome.success);
        insta::assert_snapshot!(outcome.to_string(), @"1 Failure and 1 Triumph");
    }

    #[test]
    fn display_lists_every_symbol() {
        let outcome = Outcome::from_tally(&Tally {
            success: 3,
            advantage: 1,
            triumph: 1,
            despair: 2,
            failure: 2,
            threat: 0,
        });
        insta::assert_snapshot!(
            outcome.to_string(),
            @"2 Successes, 1 Advantage, 1 Triumph, and 2 Despairs"
        );
    }

    #[test]
    fn display_failures_and_threats() {
        let outcome = Outcome::from_tally(&tally(0, 2, 0, 1));
        assert_eq!(outcome.to_string(), "2 Failures and 1 Threat");
    }

    #[test]
    fn strength_ordering() {
        let strong = Outcome::from_tally(&tally(3, 0, 0, 0));
        let weak = Outcome::from_tally(&tally(1, 0, 2, 0));
        let weaker = Outcome::from_tally(&tally(1, 0, 0, 1));
        let failed = Outcome::from_tally(&tally(0, 1, 5, 0));
        assert_eq!(strong.strength_cmp(&weak), Ordering::Greater);
        assert_eq!(weak.strength_cmp(&weaker), Ordering::Greater);
        assert_eq!(failed.strength_cmp(&weaker), Ordering::Less);
        assert_eq!(weak.strength_cmp(&weak), Ordering::Equal);
    }

    #[test]
    fn serializes_as_plain_fields() {
        let outcome = Outcome::from_tally(&tally(2, 0, 0, 1));
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["success_count"], 2);
        assert_eq!(json["threat_count"], 1);
        let back: Outcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, outcome);
    }
}
