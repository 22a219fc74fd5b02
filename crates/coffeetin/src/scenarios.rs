//! Built-in tins and named user tins.
//!
//! The classic set covers the interesting shapes: an even and an odd
//! green count in a mixed tin, the two single-bean tins, and the smallest
//! mixed pair.

use std::str::FromStr;

use crate::{Bean, Rng, Tin, TinError, predict};

// ============================================================================
// Classic Scenarios
// ============================================================================

/// The built-in tins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioType {
    /// `BBBGG`: two greens, ends blue
    EvenGreens,
    /// `BBBGGG`: three greens, ends green
    OddGreens,
    /// `G`: a lone green bean
    SingleGreen,
    /// `B`: a lone blue bean
    SingleBlue,
    /// `BG`: one draw of a mixed pair
    MixedPair,
}

impl ScenarioType {
    /// Returns a short name for the scenario.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EvenGreens => "even-greens",
            Self::OddGreens => "odd-greens",
            Self::SingleGreen => "single-green",
            Self::SingleBlue => "single-blue",
            Self::MixedPair => "mixed-pair",
        }
    }

    /// Returns the initial contents as a bean string.
    pub fn beans(&self) -> &'static str {
        match self {
            Self::EvenGreens => "BBBGG",
            Self::OddGreens => "BBBGGG",
            Self::SingleGreen => "G",
            Self::SingleBlue => "B",
            Self::MixedPair => "BG",
        }
    }

    /// Returns a description of what this scenario exercises.
    pub fn description(&self) -> &'static str {
        match self {
            Self::EvenGreens => "Five beans with an even green count",
            Self::OddGreens => "Six beans with an odd green count",
            Self::SingleGreen => "No draw at all, the green bean is returned as is",
            Self::SingleBlue => "No draw at all, the blue bean is returned as is",
            Self::MixedPair => "A single mixed draw that must give back green",
        }
    }

    /// Returns all scenario types, in listing order.
    pub fn all() -> &'static [ScenarioType] {
        &[
            Self::EvenGreens,
            Self::OddGreens,
            Self::SingleGreen,
            Self::SingleBlue,
            Self::MixedPair,
        ]
    }

    /// Builds a fresh tin for this scenario.
    pub fn tin(&self) -> Tin {
        self.beans()
            .chars()
            .filter_map(Bean::from_char)
            .collect()
    }
}

impl FromStr for ScenarioType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown scenario: {s}"))
    }
}

// ============================================================================
// Named Tins
// ============================================================================

/// A tin with a name, ready to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Display name.
    pub name: String,
    /// Initial contents.
    pub tin: Tin,
}

impl Scenario {
    /// Creates a named scenario.
    pub fn new(name: impl Into<String>, tin: Tin) -> Self {
        Self {
            name: name.into(),
            tin,
        }
    }

    /// Parses a bean string such as `"BBGG"`, naming the scenario after it.
    /// A blank string is the empty tin, named `empty`.
    pub fn parse(beans: &str) -> Result<Self, TinError> {
        let tin = beans.parse()?;
        let name = match beans.trim() {
            "" => "empty",
            trimmed => trimmed,
        };
        Ok(Self::new(name, tin))
    }

    /// Returns the five classic tins.
    pub fn classic() -> Vec<Scenario> {
        ScenarioType::all()
            .iter()
            .map(|scenario| Scenario::new(scenario.name(), scenario.tin()))
            .collect()
    }

    /// Generates a tin of up to `max_beans` beans with random colours.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, max_beans: usize) -> Self {
        let count = rng.next_usize(max_beans + 1);
        let tin: Tin = (0..count)
            .map(|_| if rng.next_bool() { Bean::Green } else { Bean::Blue })
            .collect();
        Self::new(format!("random-{count}"), tin)
    }

    /// Returns the predicted last bean for this tin.
    pub fn expected(&self) -> Option<Bean> {
        predict(&self.tin)
    }
}
