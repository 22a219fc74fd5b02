//! Seeded trial runner.
//!
//! A trial plays one tin with a [`SimRng`] built from a single seed and
//! runs every invariant checker on the result. A batch runs the same tin
//! over consecutive seeds, so any failure can be replayed from its seed
//! alone.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    Bean, InvariantChecker, InvariantResult, ParityChecker, ShrinkChecker, SimRng, Tin, play,
};

// ============================================================================
// Trial Configuration
// ============================================================================

/// Configuration for a batch of trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    /// Seed of the first trial. Trial `i` uses `seed + i`.
    pub seed: u64,
    /// Number of trials to run.
    pub iterations: u64,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            iterations: 100,
        }
    }
}

// ============================================================================
// Trial Results
// ============================================================================

/// Result of a single trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialResult {
    /// Every invariant held.
    Success {
        /// Seed used for this trial.
        seed: u64,
        /// Reduction steps taken.
        steps: usize,
        /// The bean left at the end.
        last: Option<Bean>,
    },
    /// An invariant was violated.
    InvariantViolation {
        /// Seed that triggered the failure.
        seed: u64,
        /// Invariant that was violated.
        invariant: String,
        /// Error message.
        message: String,
        /// Reduction steps taken.
        steps: usize,
    },
}

impl TrialResult {
    /// Returns true if the trial succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, TrialResult::Success { .. })
    }

    /// Returns the seed for this result.
    pub fn seed(&self) -> u64 {
        match self {
            TrialResult::Success { seed, .. } | TrialResult::InvariantViolation { seed, .. } => {
                *seed
            }
        }
    }

    /// Returns the number of reduction steps taken.
    pub fn steps(&self) -> usize {
        match self {
            TrialResult::Success { steps, .. } | TrialResult::InvariantViolation { steps, .. } => {
                *steps
            }
        }
    }

    /// Checks determinism against another result from the same seed.
    ///
    /// Returns `Err(differences)` listing every field that differs.
    pub fn check_determinism(&self, other: &TrialResult) -> Result<(), Vec<String>> {
        let mut violations = Vec::new();

        match (self, other) {
            (
                TrialResult::Success {
                    steps: steps1,
                    last: last1,
                    ..
                },
                TrialResult::Success {
                    steps: steps2,
                    last: last2,
                    ..
                },
            ) => {
                if steps1 != steps2 {
                    violations.push(format!("steps: {steps1} != {steps2}"));
                }
                if last1 != last2 {
                    violations.push(format!("last: {last1:?} != {last2:?}"));
                }
            }
            _ => {
                if self != other {
                    violations.push("different failure modes".to_string());
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Batch results from running multiple trials.
#[derive(Debug, Clone, Serialize)]
pub struct TrialBatchResults {
    /// All individual results.
    pub results: Vec<TrialResult>,
    /// Number of successful trials.
    pub successes: u64,
    /// Number of failed trials.
    pub failures: u64,
    /// Failed seeds for reproduction.
    pub failed_seeds: Vec<u64>,
    /// Total elapsed time (seconds).
    pub elapsed_secs: f64,
}

impl TrialBatchResults {
    /// Returns true if all trials passed.
    pub fn all_passed(&self) -> bool {
        self.failures == 0
    }

    /// Returns the success rate (0.0 to 1.0).
    pub fn success_rate(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.successes as f64 / self.results.len() as f64
        }
    }

    /// Returns trials per second.
    pub fn rate(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.results.len() as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

// ============================================================================
// Trial Runner
// ============================================================================

/// Upper bound on the results pre-allocated for a batch.
const RESULTS_CAPACITY_HINT: u64 = 1 << 16;

/// Capacity to reserve for a batch; larger batches grow as they run.
fn results_capacity(iterations: u64) -> usize {
    iterations.min(RESULTS_CAPACITY_HINT) as usize
}

/// Runs seeded trials of one tin.
pub struct TrialRunner {
    config: TrialConfig,
    tin: Tin,
}

impl TrialRunner {
    /// Creates a runner for `tin`.
    pub fn new(config: TrialConfig, tin: Tin) -> Self {
        Self { config, tin }
    }

    /// Returns the tin every trial starts from.
    pub fn tin(&self) -> &Tin {
        &self.tin
    }

    /// Runs a single trial with the given seed.
    pub fn run_single(&self, seed: u64) -> TrialResult {
        let mut tin = self.tin.clone();
        let mut rng = SimRng::new(seed);
        let outcome = play(&mut tin, &mut rng);

        let mut checkers: [Box<dyn InvariantChecker>; 2] =
            [Box::new(ParityChecker::new()), Box::new(ShrinkChecker::new())];

        for checker in &mut checkers {
            if let InvariantResult::Violated {
                invariant,
                message,
                context,
            } = checker.check(&outcome)
            {
                warn!(
                    seed,
                    checker = checker.name(),
                    %invariant,
                    ?context,
                    "{message}"
                );
                return TrialResult::InvariantViolation {
                    seed,
                    invariant,
                    message,
                    steps: outcome.steps.len(),
                };
            }
        }

        TrialResult::Success {
            seed,
            steps: outcome.steps.len(),
            last: outcome.last,
        }
    }

    /// Runs a batch of trials over consecutive seeds.
    pub fn run_batch(&self) -> TrialBatchResults {
        let start = std::time::Instant::now();
        let mut results = Vec::with_capacity(results_capacity(self.config.iterations));
        let mut successes: u64 = 0;
        let mut failed_seeds = Vec::new();

        for i in 0..self.config.iterations {
            let seed = self.config.seed.wrapping_add(i);
            let result = self.run_single(seed);

            if result.is_ok() {
                successes += 1;
            } else {
                failed_seeds.push(seed);
            }

            results.push(result);
        }

        let elapsed = start.elapsed();

        info!(
            tin = %self.tin,
            trials = results.len(),
            successes,
            failures = failed_seeds.len(),
            "trial batch finished"
        );

        TrialBatchResults {
            successes,
            failures: failed_seeds.len() as u64,
            failed_seeds,
            results,
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }
}
