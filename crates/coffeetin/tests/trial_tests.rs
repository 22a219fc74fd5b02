//! Seeded trials over the classic and randomly generated tins.
//!
//! These tests drive the public API the same way the CLI does: build a
//! tin, run it across many seeds, and check that no invariant breaks.

use coffeetin::{
    GameReport, InvariantChecker, ParityChecker, Rng, Scenario, ScenarioType, ShrinkChecker,
    SimRng, TrialConfig, TrialResult, TrialRunner, play,
};

#[test]
fn classic_scenarios_pass_a_hundred_seeds() {
    for scenario in ScenarioType::all() {
        let runner = TrialRunner::new(
            TrialConfig {
                seed: 0,
                iterations: 100,
            },
            scenario.tin(),
        );
        let results = runner.run_batch();

        assert!(
            results.all_passed(),
            "{} failed on seeds {:?}",
            scenario.name(),
            results.failed_seeds
        );
        assert_eq!(results.results.len(), 100);
    }
}

#[test]
fn classic_scenarios_report_expected_beans() {
    let mut master = SimRng::new(2026);

    for scenario in Scenario::classic() {
        let mut rng = Rng::fork(&mut master);
        let report = GameReport::run(&scenario, rng.as_mut());
        assert!(report.matched, "{}: {}", scenario.name, report.verdict());
        assert_eq!(report.actual, scenario.expected());
    }
}

#[test]
fn random_tins_hold_every_invariant() {
    let mut generator = SimRng::new(0xC0FFEE);
    let mut parity = ParityChecker::new();
    let mut shrink = ShrinkChecker::new();

    for seed in 0..500 {
        let scenario = Scenario::random(&mut generator, 40);
        let mut tin = scenario.tin.clone();
        let outcome = play(&mut tin, &mut SimRng::new(seed));

        assert!(parity.check(&outcome).is_ok(), "parity broke: {scenario:?}");
        assert!(shrink.check(&outcome).is_ok(), "shrink broke: {scenario:?}");
    }

    assert_eq!(parity.games_checked(), 500);
}

#[test]
fn replaying_a_seed_reproduces_the_trial() {
    let runner = TrialRunner::new(TrialConfig::default(), "GGBBGBGBBBGG".parse().unwrap());

    for seed in [0, 1, 99, u64::MAX] {
        let first = runner.run_single(seed);
        let replay = runner.run_single(seed);
        assert_eq!(first.check_determinism(&replay), Ok(()));
        assert!(matches!(first, TrialResult::Success { .. }));
    }
}

#[test]
fn seeds_wrap_around_at_u64_max() {
    let runner = TrialRunner::new(
        TrialConfig {
            seed: u64::MAX,
            iterations: 3,
        },
        "BG".parse().unwrap(),
    );
    let seeds: Vec<u64> = runner
        .run_batch()
        .results
        .iter()
        .map(TrialResult::seed)
        .collect();
    assert_eq!(seeds, vec![u64::MAX, 0, 1]);
}
