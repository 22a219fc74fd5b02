//! The reduction loop.
//!
//! A game draws two beans, throws them away, and puts back the bean
//! chosen by [`reduction`]: blue for a matching pair, green for a mixed
//! one. It stops once fewer than two beans are left. Every step removes
//! exactly one bean net, and the parity of the green count never changes,
//! so the last bean is known before the first draw:
//!
//! ```rust
//! use coffeetin::{Bean, SimRng, Tin, predict, reduce};
//!
//! let mut tin: Tin = "BBBGGG".parse().unwrap();
//! assert_eq!(predict(&tin), Some(Bean::Green));
//!
//! let mut rng = SimRng::new(42);
//! assert_eq!(reduce(&mut tin, &mut rng), Some(Bean::Green));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Bean, Rng, Tin, reduction};

/// Returns the colour the last bean must have, from the current contents.
///
/// An odd number of green beans leaves a green bean; otherwise the last
/// bean is blue. An empty tin has no last bean.
pub fn predict(tin: &Tin) -> Option<Bean> {
    last_bean_for(tin.len(), tin.greens())
}

/// Last bean of a tin holding `beans` beans, `greens` of them green.
fn last_bean_for(beans: usize, greens: usize) -> Option<Bean> {
    if beans == 0 {
        None
    } else if greens % 2 == 1 {
        Some(Bean::Green)
    } else {
        Some(Bean::Blue)
    }
}

/// Runs the game to completion and returns the last bean.
///
/// The tin is left holding at most one bean. Total over every tin: an
/// empty tin yields `None`, a single bean is returned untouched.
pub fn reduce<R: Rng + ?Sized>(tin: &mut Tin, rng: &mut R) -> Option<Bean> {
    play(tin, rng).last
}

/// One reduction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The two beans drawn, in draw order.
    pub drawn: (Bean, Bean),
    /// The bean put back.
    pub returned: Bean,
    /// Beans left in the tin after the step.
    pub remaining: usize,
}

/// Full record of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Beans in the tin before the first draw.
    pub initial_beans: usize,
    /// Green beans in the tin before the first draw.
    pub initial_greens: usize,
    /// Every step, in order.
    pub steps: Vec<Step>,
    /// The bean left at the end, if any.
    pub last: Option<Bean>,
}

impl GameOutcome {
    /// Returns the prediction made from the initial green count.
    pub fn expected(&self) -> Option<Bean> {
        last_bean_for(self.initial_beans, self.initial_greens)
    }

    /// Returns true if the last bean matches the prediction.
    pub fn matches_prediction(&self) -> bool {
        self.last == self.expected()
    }
}

/// Runs the game to completion, recording every step.
pub fn play<R: Rng + ?Sized>(tin: &mut Tin, rng: &mut R) -> GameOutcome {
    let initial_beans = tin.len();
    let initial_greens = tin.greens();
    let mut steps = Vec::with_capacity(initial_beans.saturating_sub(1));

    debug!(beans = initial_beans, greens = initial_greens, "starting game");

    while tin.has_at_least_two() {
        // The guard above keeps take_two and put_in within their contracts.
        let Ok(drawn) = tin.take_two(rng) else {
            break;
        };
        let returned = reduction(drawn.0, drawn.1);
        if tin.put_in(returned).is_err() {
            break;
        }

        let step = Step {
            drawn,
            returned,
            remaining: tin.len(),
        };
        trace!(
            first = %drawn.0,
            second = %drawn.1,
            returned = %returned,
            remaining = step.remaining,
            "reduction step"
        );
        steps.push(step);
    }

    let last = tin.any_bean();
    debug!(steps = steps.len(), last = ?last, "game finished");

    GameOutcome {
        initial_beans,
        initial_greens,
        steps,
        last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimRng;

    #[test]
    fn empty_tin_has_no_last_bean() {
        let mut tin = Tin::new(Vec::new());
        let mut rng = SimRng::new(0);
        assert_eq!(predict(&tin), None);
        assert_eq!(reduce(&mut tin, &mut rng), None);
    }

    #[test]
    fn single_bean_is_returned_unchanged() {
        for bean in Bean::ALL {
            let mut tin = Tin::new([bean]);
            let mut rng = SimRng::new(0);
            let outcome = play(&mut tin, &mut rng);
            assert_eq!(outcome.last, Some(bean));
            assert!(outcome.steps.is_empty());
            assert_eq!(tin.len(), 1);
        }
    }

    #[test]
    fn each_step_removes_one_bean() {
        let mut tin: Tin = "BBGGBGBG".parse().unwrap();
        let mut rng = SimRng::new(5);
        let outcome = play(&mut tin, &mut rng);

        assert_eq!(outcome.steps.len(), 7);
        for (i, step) in outcome.steps.iter().enumerate() {
            assert_eq!(step.remaining, 8 - (i + 1));
            assert_eq!(step.returned, reduction(step.drawn.0, step.drawn.1));
        }
        assert_eq!(tin.len(), 1);
        assert_eq!(tin.capacity(), 8);
    }

    #[test]
    fn game_respects_existing_vacant_slots() {
        let mut tin: Tin = "G--B-G".parse().unwrap();
        let mut rng = SimRng::new(9);
        let outcome = play(&mut tin, &mut rng);

        assert_eq!(outcome.initial_beans, 3);
        assert_eq!(outcome.steps.len(), 2);
        assert_eq!(outcome.last, Some(Bean::Blue));
    }

    #[test]
    fn outcome_expectation_uses_initial_contents() {
        let mut tin: Tin = "BGG".parse().unwrap();
        let mut rng = SimRng::new(1);
        let outcome = play(&mut tin, &mut rng);

        assert_eq!(outcome.initial_greens, 2);
        assert_eq!(outcome.expected(), Some(Bean::Blue));
        assert!(outcome.matches_prediction());
    }

    #[test]
    fn prediction_agrees_with_outcome_expectation() {
        for beans in ["", "B", "G", "BG", "GG", "BBBGG", "BBBGGG", "G-G-G", "--"] {
            let mut tin: Tin = beans.parse().unwrap();
            let predicted = predict(&tin);
            let outcome = play(&mut tin, &mut SimRng::new(8));
            assert_eq!(outcome.expected(), predicted, "tin {beans:?}");
        }
        assert_eq!(last_bean_for(0, 0), None);
        assert_eq!(last_bean_for(4, 3), Some(Bean::Green));
        assert_eq!(last_bean_for(4, 2), Some(Bean::Blue));
    }

    #[test]
    fn same_seed_same_steps() {
        let tin: Tin = "BBBBGGGGG".parse().unwrap();

        let first = play(&mut tin.clone(), &mut SimRng::new(77));
        let second = play(&mut tin.clone(), &mut SimRng::new(77));
        assert_eq!(first, second);
    }

    #[test]
    fn works_through_trait_objects() {
        let mut master = SimRng::new(3);
        let mut rng: Box<dyn Rng> = Rng::fork(&mut master);
        let mut tin: Tin = "GGG".parse().unwrap();
        assert_eq!(reduce(&mut tin, rng.as_mut()), Some(Bean::Green));
    }
}
