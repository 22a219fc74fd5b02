//! Seeded trial commands.

use anyhow::Result;
use coffeetin::{Scenario, Tin, TrialBatchResults, TrialConfig, TrialRunner};
use coffeetin_config::OutputFormat;
use serde_json::json;

use crate::style::{self, colors::SemanticStyle};

/// Runs `config.iterations` trials of each scenario and fails if any
/// invariant was violated.
pub fn run(scenarios: &[Scenario], config: TrialConfig, format: OutputFormat) -> Result<()> {
    let text = format == OutputFormat::Text;

    if text {
        println!(
            "Running {} trials per tin (seed: {})...",
            config.iterations.to_string().header(),
            config.seed.to_string().code()
        );
        style::print_spacer();
    }

    let mut batches = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let runner = TrialRunner::new(config, scenario.tin.clone());
        let results = runner.run_batch();
        if text {
            print_batch(scenario, &results);
        }
        batches.push((scenario, results));
    }

    let failures: u64 = batches.iter().map(|(_, results)| results.failures).sum();

    if text {
        print_failed_seeds(&batches);
    } else {
        let summary: Vec<_> = batches
            .iter()
            .map(|(scenario, results)| {
                json!({
                    "name": scenario.name,
                    "tin": scenario.tin.to_string(),
                    "expected": scenario.expected(),
                    "successes": results.successes,
                    "failures": results.failures,
                    "failed_seeds": results.failed_seeds,
                    "elapsed_secs": results.elapsed_secs,
                    "trials_per_sec": results.rate(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if failures == 0 {
        Ok(())
    } else {
        anyhow::bail!("{failures} trial(s) failed")
    }
}

fn print_batch(scenario: &Scenario, results: &TrialBatchResults) {
    let line = format!("{} {}", scenario.name, scenario.tin.to_string().muted());
    if results.all_passed() {
        style::print_success(&format!(
            "{line}: all {} trials passed",
            results.successes.to_string().success()
        ));
    } else {
        style::print_error(&format!(
            "{line}: {} passed, {} failed",
            results.successes.to_string().success(),
            results.failures.to_string().error()
        ));
    }
    println!(
        "  Time: {:.2}s ({:.0} trials/sec)",
        results.elapsed_secs,
        results.rate()
    );
}

/// Command line that replays one trial of `tin`, vacant slots included.
fn replay_command(tin: &Tin, seed: u64) -> String {
    let mut slots = tin.compact();
    if slots.is_empty() {
        slots = "\"\"".to_string();
    }
    format!("coffeetin trials {slots} --seed {seed} --iterations 1")
}

fn print_failed_seeds(batches: &[(&Scenario, TrialBatchResults)]) {
    let failed: Vec<_> = batches
        .iter()
        .filter(|(_, results)| !results.failed_seeds.is_empty())
        .collect();
    if failed.is_empty() {
        return;
    }

    style::print_spacer();
    println!("{}", "Failed seeds (reproduce with):".warning());
    for (scenario, results) in failed {
        for &seed in &results.failed_seeds {
            style::print_hint(&replay_command(&scenario.tin, seed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_keeps_vacant_slots() {
        let tin: Tin = "B-GG".parse().unwrap();
        assert_eq!(
            replay_command(&tin, 17),
            "coffeetin trials B-GG --seed 17 --iterations 1"
        );
    }

    #[test]
    fn replayed_tin_matches_the_original() {
        let tin: Tin = "-G-BG".parse().unwrap();
        let command = replay_command(&tin, 3);
        let slots = command.split_whitespace().nth(2).unwrap();
        assert_eq!(slots.parse::<Tin>().unwrap(), tin);
    }

    #[test]
    fn replay_quotes_the_empty_tin() {
        let tin = Tin::new(Vec::new());
        assert_eq!(
            replay_command(&tin, 0),
            "coffeetin trials \"\" --seed 0 --iterations 1"
        );
    }
}
