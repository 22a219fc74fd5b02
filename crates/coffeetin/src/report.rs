//! Reports for a single played tin.

use std::fmt;

use serde::Serialize;

use crate::{Bean, GameOutcome, Rng, Scenario, play};

/// What happened to one tin: contents before and after, and the last bean
/// against the parity prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    /// Scenario name.
    pub name: String,
    /// Tin listing before the game.
    pub initial: String,
    /// Green beans before the game.
    pub greens: usize,
    /// Last bean predicted from the green parity.
    pub expected: Option<Bean>,
    /// Last bean actually left.
    pub actual: Option<Bean>,
    /// Tin listing after the game.
    pub after: String,
    /// Reduction steps taken.
    pub steps: usize,
    /// Whether `actual` equals `expected`.
    pub matched: bool,
}

impl GameReport {
    /// Plays `scenario` on a copy of its tin and reports the result.
    pub fn run<R: Rng + ?Sized>(scenario: &Scenario, rng: &mut R) -> Self {
        let mut tin = scenario.tin.clone();
        let initial = tin.to_string();
        let outcome = play(&mut tin, rng);
        Self::from_outcome(&scenario.name, initial, &outcome, tin.to_string())
    }

    /// Builds a report from an outcome and the before/after listings.
    pub fn from_outcome(
        name: impl Into<String>,
        initial: String,
        outcome: &GameOutcome,
        after: String,
    ) -> Self {
        let expected = outcome.expected();
        Self {
            name: name.into(),
            initial,
            greens: outcome.initial_greens,
            expected,
            actual: outcome.last,
            after,
            steps: outcome.steps.len(),
            matched: outcome.last == expected,
        }
    }

    /// Returns the line naming the last bean, or the mismatch message.
    pub fn verdict(&self) -> String {
        if self.matched {
            format!("last bean: {}", bean_or_none(self.actual))
        } else {
            format!(
                "Oops, wrong last bean: {} (expected: {})",
                bean_or_none(self.actual),
                bean_or_none(self.expected)
            )
        }
    }
}

fn bean_or_none(bean: Option<Bean>) -> String {
    bean.map_or_else(|| "none".to_string(), |b| b.to_string())
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TIN ({} Gs): {}", self.greens, self.initial)?;
        writeln!(f, "tin after: {}", self.after)?;
        write!(f, "{}", self.verdict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SimRng, Tin};

    #[test]
    fn report_renders_classic_layout() {
        let scenario = Scenario::parse("BBBGG").unwrap();
        let report = GameReport::run(&scenario, &mut SimRng::new(4));

        assert!(report.matched);
        assert_eq!(report.steps, 4);
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "TIN (2 Gs): [B, B, B, G, G]");
        assert!(lines[1].starts_with("tin after: ["));
        assert_eq!(lines[1].matches('-').count(), 4);
        assert_eq!(lines[2], "last bean: B");
    }

    #[test]
    fn empty_tin_reports_none() {
        let scenario = Scenario::new("empty", Tin::new(Vec::new()));
        let report = GameReport::run(&scenario, &mut SimRng::new(0));
        assert_eq!(report.verdict(), "last bean: none");
        assert_eq!(report.after, "[]");
    }

    #[test]
    fn mismatch_verdict() {
        let outcome = GameOutcome {
            initial_beans: 2,
            initial_greens: 1,
            steps: vec![],
            last: Some(Bean::Blue),
        };
        let report = GameReport::from_outcome("forged", "[B, G]".into(), &outcome, "[B, -]".into());
        assert!(!report.matched);
        assert_eq!(report.verdict(), "Oops, wrong last bean: B (expected: G)");
    }

    #[test]
    fn serializes_to_json() {
        let scenario = Scenario::parse("G").unwrap();
        let report = GameReport::run(&scenario, &mut SimRng::new(0));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["actual"], "Green");
        assert_eq!(json["matched"], true);
        assert_eq!(json["greens"], 1);
    }
}
