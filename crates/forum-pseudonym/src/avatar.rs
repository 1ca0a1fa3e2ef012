//! Avatar colors for anonymous authors.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Indigo,
}

impl ColorToken {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const PALETTE: [ColorToken; 6] = [
    ColorToken::Blue,
    ColorToken::Green,
    ColorToken::Purple,
    ColorToken::Orange,
    ColorToken::Pink,
    ColorToken::Indigo,
];

/// Avatar color for a display name: `PALETTE[char count % 6]`.
///
/// Depends only on the number of characters, so it is stable across runs.
#[must_use]
pub fn color_for(name: &str) -> ColorToken {
    PALETTE[name.chars().count() % PALETTE.len()]
}
