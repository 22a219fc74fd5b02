//! Invariant checkers for finished games.
//!
//! A checker inspects a [`GameOutcome`] and reports whether the property
//! it guards still holds. Trials run every checker on every game and
//! stop at the first violation.
//!
//! # Available Checkers
//!
//! - [`ParityChecker`]: the last bean matches the green-parity prediction
//! - [`ShrinkChecker`]: each step leaves exactly one bean fewer

use crate::{Bean, GameOutcome, reduction};

// ============================================================================
// Invariant Result
// ============================================================================

/// Result of an invariant check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantResult {
    /// The invariant holds.
    Ok,
    /// The invariant is violated.
    Violated {
        /// Name of the violated invariant.
        invariant: String,
        /// Description of the violation.
        message: String,
        /// Additional context.
        context: Vec<(String, String)>,
    },
}

impl InvariantResult {
    /// Returns true if the invariant holds.
    pub fn is_ok(&self) -> bool {
        matches!(self, InvariantResult::Ok)
    }
}

// ============================================================================
// Invariant Checker Trait
// ============================================================================

/// Trait for invariant checkers.
pub trait InvariantChecker {
    /// Returns the name of this checker.
    fn name(&self) -> &'static str;

    /// Checks one finished game.
    fn check(&mut self, outcome: &GameOutcome) -> InvariantResult;

    /// Resets the checker to its initial state.
    fn reset(&mut self);
}

fn describe(bean: Option<Bean>) -> String {
    bean.map_or_else(|| "none".to_string(), |b| b.to_string())
}

// ============================================================================
// Parity Checker
// ============================================================================

/// Verifies the last bean against the initial green parity.
#[derive(Debug, Default)]
pub struct ParityChecker {
    games_checked: u64,
}

impl ParityChecker {
    /// Creates a new parity checker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of games checked.
    pub fn games_checked(&self) -> u64 {
        self.games_checked
    }
}

impl InvariantChecker for ParityChecker {
    fn name(&self) -> &'static str {
        "ParityChecker"
    }

    fn check(&mut self, outcome: &GameOutcome) -> InvariantResult {
        self.games_checked += 1;

        let expected = outcome.expected();
        if outcome.last == expected {
            return InvariantResult::Ok;
        }

        InvariantResult::Violated {
            invariant: "last_bean_parity".to_string(),
            message: format!(
                "wrong last bean: {} (expected: {})",
                describe(outcome.last),
                describe(expected)
            ),
            context: vec![
                (
                    "initial_greens".to_string(),
                    outcome.initial_greens.to_string(),
                ),
                (
                    "initial_beans".to_string(),
                    outcome.initial_beans.to_string(),
                ),
            ],
        }
    }

    fn reset(&mut self) {
        self.games_checked = 0;
    }
}

// ============================================================================
// Shrink Checker
// ============================================================================

/// Verifies that the tin shrinks by exactly one bean per step.
///
/// Also checks that each step applied the reduction rule and that a game
/// over `n` beans took `n - 1` steps.
#[derive(Debug, Default)]
pub struct ShrinkChecker {
    steps_checked: u64,
}

impl ShrinkChecker {
    /// Creates a new shrink checker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of steps checked across all games.
    pub fn steps_checked(&self) -> u64 {
        self.steps_checked
    }
}

impl InvariantChecker for ShrinkChecker {
    fn name(&self) -> &'static str {
        "ShrinkChecker"
    }

    fn check(&mut self, outcome: &GameOutcome) -> InvariantResult {
        let mut before = outcome.initial_beans;

        for (index, step) in outcome.steps.iter().enumerate() {
            self.steps_checked += 1;

            if step.remaining + 1 != before {
                return InvariantResult::Violated {
                    invariant: "tin_shrinks_by_one".to_string(),
                    message: format!(
                        "step {index}: expected {} beans left, got {}",
                        before.saturating_sub(1),
                        step.remaining
                    ),
                    context: vec![
                        ("step".to_string(), index.to_string()),
                        ("before".to_string(), before.to_string()),
                    ],
                };
            }

            let rule = reduction(step.drawn.0, step.drawn.1);
            if step.returned != rule {
                return InvariantResult::Violated {
                    invariant: "reduction_rule".to_string(),
                    message: format!(
                        "step {index}: drew {}{} but returned {} (expected {rule})",
                        step.drawn.0, step.drawn.1, step.returned
                    ),
                    context: vec![("step".to_string(), index.to_string())],
                };
            }

            before = step.remaining;
        }

        let expected_steps = outcome.initial_beans.saturating_sub(1);
        if outcome.steps.len() != expected_steps {
            return InvariantResult::Violated {
                invariant: "step_count".to_string(),
                message: format!(
                    "expected {expected_steps} steps for {} beans, got {}",
                    outcome.initial_beans,
                    outcome.steps.len()
                ),
                context: vec![],
            };
        }

        InvariantResult::Ok
    }

    fn reset(&mut self) {
        self.steps_checked = 0;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Step;

    fn outcome(initial: (usize, usize), steps: Vec<Step>, last: Option<Bean>) -> GameOutcome {
        GameOutcome {
            initial_beans: initial.0,
            initial_greens: initial.1,
            steps,
            last,
        }
    }

    #[test]
    fn parity_holds_for_correct_outcome() {
        let mut checker = ParityChecker::new();
        let result = checker.check(&outcome((2, 1), vec![], Some(Bean::Green)));
        assert!(result.is_ok());
        assert_eq!(checker.games_checked(), 1);
    }

    #[test]
    fn parity_violation_names_both_beans() {
        let mut checker = ParityChecker::new();
        let result = checker.check(&outcome((5, 2), vec![], Some(Bean::Green)));

        match result {
            InvariantResult::Violated {
                invariant, message, ..
            } => {
                assert_eq!(invariant, "last_bean_parity");
                assert_eq!(message, "wrong last bean: G (expected: B)");
            }
            InvariantResult::Ok => panic!("expected parity violation"),
        }
    }

    #[test]
    fn parity_on_empty_game() {
        let mut checker = ParityChecker::new();
        assert!(checker.check(&outcome((0, 0), vec![], None)).is_ok());
        assert!(
            !checker
                .check(&outcome((0, 0), vec![], Some(Bean::Blue)))
                .is_ok()
        );
    }

    #[test]
    fn shrink_accepts_valid_steps() {
        let steps = vec![
            Step {
                drawn: (Bean::Green, Bean::Green),
                returned: Bean::Blue,
                remaining: 2,
            },
            Step {
                drawn: (Bean::Blue, Bean::Blue),
                returned: Bean::Blue,
                remaining: 1,
            },
        ];
        let mut checker = ShrinkChecker::new();
        assert!(checker.check(&outcome((3, 2), steps, Some(Bean::Blue))).is_ok());
        assert_eq!(checker.steps_checked(), 2);
    }

    #[test]
    fn shrink_rejects_skipped_count() {
        let steps = vec![Step {
            drawn: (Bean::Blue, Bean::Green),
            returned: Bean::Green,
            remaining: 1,
        }];
        let mut checker = ShrinkChecker::new();
        let result = checker.check(&outcome((3, 1), steps, Some(Bean::Green)));
        assert!(matches!(
            result,
            InvariantResult::Violated { ref invariant, .. } if invariant == "tin_shrinks_by_one"
        ));
    }

    #[test]
    fn shrink_rejects_wrong_rule() {
        let steps = vec![Step {
            drawn: (Bean::Green, Bean::Green),
            returned: Bean::Green,
            remaining: 1,
        }];
        let mut checker = ShrinkChecker::new();
        let result = checker.check(&outcome((2, 2), steps, Some(Bean::Green)));
        assert!(matches!(
            result,
            InvariantResult::Violated { ref invariant, .. } if invariant == "reduction_rule"
        ));
    }

    #[test]
    fn shrink_rejects_early_stop() {
        let mut checker = ShrinkChecker::new();
        let result = checker.check(&outcome((3, 0), vec![], Some(Bean::Blue)));
        assert!(matches!(
            result,
            InvariantResult::Violated { ref invariant, .. } if invariant == "step_count"
        ));
    }

    #[test]
    fn reset_clears_counters() {
        let mut parity = ParityChecker::new();
        let mut shrink = ShrinkChecker::new();
        let game = outcome((1, 0), vec![], Some(Bean::Blue));
        parity.check(&game);
        shrink.check(&game);

        parity.reset();
        shrink.reset();
        assert_eq!(parity.games_checked(), 0);
        assert_eq!(shrink.steps_checked(), 0);
    }
}
