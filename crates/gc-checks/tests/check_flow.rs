//! Checks from request to initiative order.

use gc_checks::{
    CheckConfig, CheckRequest, Checker, RollModifiers, RulesError, initiative_order, perform_check,
    skill_pool,
};
use gc_dice::{DicePool, DieKind, Outcome};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn config_from_json_drives_checker() {
    init_tracing();
    let config = CheckConfig::from_json(
        r#"{"seed": 2024, "bonus_die_chance": 1.0, "default_difficulty": 3}"#,
    )
    .unwrap();
    let mut checker = Checker::new(config);
    let result = checker.check(&CheckRequest::new(2, 2)).unwrap();
    assert_eq!(result.pool.proficiency, 2);
    assert_eq!(result.pool.difficulty, 3);
    // Certain bonus chance always grants two of each.
    assert_eq!(result.pool.boost, 2);
    assert_eq!(result.pool.setback, 2);
    assert_eq!(result.rolled.count(), 9);
}

#[test]
fn invalid_config_is_reported() {
    let err = CheckConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, RulesError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("invalid check config"));
}

#[test]
fn modifiers_are_applied_before_rolling() {
    init_tracing();
    let config = CheckConfig::default().with_random_bonus_dice(false);
    let request = CheckRequest::new(2, 0)
        .with_difficulty(2)
        .with_modifiers(RollModifiers {
            boost: 1,
            setback: 0,
            upgrades: 2,
            difficulty_upgrades: 1,
        });
    let mut rng = StdRng::seed_from_u64(5);
    let result = perform_check(&config, &request, &mut rng).unwrap();
    assert_eq!(
        result.pool,
        DicePool::build([
            (DieKind::Boost, 1),
            (DieKind::Proficiency, 2),
            (DieKind::Difficulty, 1),
            (DieKind::Challenge, 1),
        ])
        .unwrap()
    );
    insta::assert_snapshot!(
        result.pool.to_string(),
        @"1 Boost die, 1 Difficulty die, 2 Proficiency dice, and 1 Challenge die"
    );
}

#[test]
fn initiative_from_real_checks() {
    init_tracing();
    let mut checker = Checker::new(CheckConfig::default().with_seed(11));
    let mut entries = Vec::new();
    for (name, characteristic, skill) in [("mittens", 3, 2), ("goblin", 2, 0), ("tom", 1, 1)] {
        let result = checker
            .check(&CheckRequest::new(characteristic, skill).with_difficulty(0))
            .unwrap();
        entries.push((name, result.outcome));
    }
    let lookup = entries.clone();
    let order = initiative_order(entries);
    assert_eq!(order.len(), 3);
    let strengths: Vec<Outcome> = order
        .iter()
        .map(|name| lookup.iter().find(|(n, _)| n == name).map(|(_, o)| *o).unwrap())
        .collect();
    assert!(strengths.windows(2).all(|w| w[0].strength_cmp(&w[1]).is_ge()));
}

proptest! {
    #[test]
    fn skill_pool_preserves_dice_counts(
        characteristic in 0u32..6,
        skill in 0u32..6,
        difficulty in 0u32..6,
        challenge in 0u32..6,
    ) {
        let pool = skill_pool(characteristic, skill, difficulty, challenge, 0, 0);
        prop_assert_eq!(pool.ability + pool.proficiency, characteristic.max(skill));
        prop_assert_eq!(pool.proficiency, characteristic.min(skill));
        prop_assert_eq!(pool.difficulty + pool.challenge, difficulty.max(challenge));
        prop_assert_eq!(pool.challenge, difficulty.min(challenge));
    }

    #[test]
    fn upgrades_then_downgrades_keep_dice(base in 0u32..5, upgraded in 0u32..5, times in 0i32..5) {
        let pool = DicePool::new()
            .with(DieKind::Ability, base)
            .with(DieKind::Proficiency, upgraded);
        let up = pool.upgrade(times);
        prop_assert!(up.ability + up.proficiency >= base + upgraded);
        let down = up.upgrade(-(up.proficiency as i32));
        prop_assert_eq!(down.proficiency, 0);
        prop_assert_eq!(down.ability, up.ability + up.proficiency);
    }

    #[test]
    fn checks_never_show_both_sides(seed in any::<u64>(), characteristic in 0u32..5, skill in 0u32..5) {
        let config = CheckConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let result = perform_check(&config, &CheckRequest::new(characteristic, skill), &mut rng).unwrap();
        prop_assert!(!(result.outcome.success && result.outcome.failure));
        prop_assert!(!(result.outcome.advantage_count > 0 && result.outcome.threat_count > 0));
        prop_assert_eq!(result.passed(), result.outcome.success);
    }
}
