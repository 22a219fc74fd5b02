//! # coffeetin: the coffee tin bean game
//!
//! A tin holds blue and green beans. Two beans are drawn at random: a
//! matching pair is thrown away and a blue bean put back, a mixed pair is
//! thrown away and a green bean put back. This repeats until at most one
//! bean is left.
//!
//! The colour of that last bean never depends on the draws. Each step
//! changes the green count by 0 or -2, so its parity is fixed from the
//! start: an odd number of greens ends green, an even number ends blue.
//!
//! ## Quick Start
//!
//! ```
//! use coffeetin::{Bean, SimRng, Tin, predict, reduce};
//!
//! let mut tin: Tin = "BBBGG".parse().unwrap();
//! let expected = predict(&tin);
//!
//! let mut rng = SimRng::new(12345);
//! let last = reduce(&mut tin, &mut rng);
//!
//! assert_eq!(last, expected);
//! assert_eq!(last, Some(Bean::Blue));
//! assert_eq!(tin.len(), 1);
//! ```
//!
//! ## Key Concepts
//!
//! - **`Tin`**: fixed slots, each holding a bean or vacant
//! - **`reduce` / `play`**: the reduction loop, with or without a step trace
//! - **`SimRng`**: seeded randomness so any game can be replayed
//! - **`InvariantChecker`**: parity and shrink checks on finished games
//! - **`TrialRunner`**: one tin across many seeds

mod bean;
mod error;
mod game;
mod invariant;
mod report;
mod rng;
pub mod scenarios;
mod tin;
pub mod trials;

pub use bean::{Bean, reduction};
pub use error::TinError;
pub use game::{GameOutcome, Step, play, predict, reduce};
pub use invariant::{InvariantChecker, InvariantResult, ParityChecker, ShrinkChecker};
pub use report::GameReport;
pub use rng::{OsRngWrapper, Rng, SimRng};
pub use scenarios::{Scenario, ScenarioType};
pub use tin::{Tin, VACANT};
pub use trials::{TrialBatchResults, TrialConfig, TrialResult, TrialRunner};
