//! Bean colours and the reduction rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TinError;

/// A single bean.
///
/// `Blue` is the primary colour, `Green` the secondary one. Only the
/// number of green beans matters for the outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bean {
    Blue,
    Green,
}

impl Bean {
    /// Both colours, primary first.
    pub const ALL: [Bean; 2] = [Bean::Blue, Bean::Green];

    /// Returns the one-letter code used in tin listings.
    pub fn as_char(self) -> char {
        match self {
            Bean::Blue => 'B',
            Bean::Green => 'G',
        }
    }

    /// Parses a one-letter code (case-insensitive).
    pub fn from_char(ch: char) -> Option<Bean> {
        match ch.to_ascii_uppercase() {
            'B' => Some(Bean::Blue),
            'G' => Some(Bean::Green),
            _ => None,
        }
    }

}

impl fmt::Display for Bean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Bean {
    type Err = TinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let mut chars = input.chars();
        let bean = match (chars.next(), chars.next()) {
            (Some(ch), None) => Bean::from_char(ch),
            _ => None,
        };
        bean.ok_or_else(|| TinError::NotABean {
            input: input.to_string(),
        })
    }
}

/// Returns the bean put back after drawing `first` and `second`.
///
/// A matching pair gives back a blue bean, a mixed pair a green one. The
/// green count therefore changes by 0 or -2 on every step, so its parity
/// never changes.
pub fn reduction(first: Bean, second: Bean) -> Bean {
    if first == second {
        Bean::Blue
    } else {
        Bean::Green
    }
}
