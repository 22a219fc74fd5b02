//! Play command: one game per tin.

use anyhow::Result;
use coffeetin::{GameReport, OsRngWrapper, Rng, Scenario, SimRng};
use coffeetin_config::OutputFormat;
use tracing::debug;

/// Plays every scenario once and prints a report for each.
///
/// With a seed the whole run is reproducible; each tin draws from its own
/// fork of the seeded generator.
pub fn run(scenarios: &[Scenario], seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let mut rng: Box<dyn Rng> = match seed {
        Some(seed) => {
            debug!(seed, "playing with seeded rng");
            Box::new(SimRng::new(seed))
        }
        None => Box::new(OsRngWrapper::new()),
    };

    let reports: Vec<GameReport> = scenarios
        .iter()
        .map(|scenario| {
            let mut tin_rng = rng.fork();
            GameReport::run(scenario, tin_rng.as_mut())
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                println!();
                println!("{report}");
            }
        }
    }

    let mismatched = reports.iter().filter(|report| !report.matched).count();
    if mismatched > 0 {
        anyhow::bail!("{mismatched} tin(s) ended with the wrong bean");
    }
    Ok(())
}
