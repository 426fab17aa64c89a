use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How the grid is populated when the program starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedStrategy {
    Empty,
    /// The glider gun, also accepted as `gun`
    #[default]
    Pattern,
    Random,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown seed strategy `{0}` (expected empty, pattern or random)")]
pub struct ParseSeedStrategyError(pub String);

impl FromStr for SeedStrategy {
    type Err = ParseSeedStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "pattern" | "gun" => Ok(Self::Pattern),
            "random" => Ok(Self::Random),
            _ => Err(ParseSeedStrategyError(s.to_string())),
        }
    }
}

impl fmt::Display for SeedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Pattern => "pattern",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}
