use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use super::error::StateError;

/// One of the three legal moves: multiply the shared number by 2, 3 or 4.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum Multiplier {
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Multiplier {
    /// Canonical move order. Both search algorithms iterate in this order and
    /// their tie-breaking depends on it.
    pub const ALL: [Multiplier; 3] = [Multiplier::Two, Multiplier::Three, Multiplier::Four];

    pub fn factor(&self) -> u32 {
        *self as u32
    }
}

impl TryFrom<u32> for Multiplier {
    type Error = StateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Multiplier::Two),
            3 => Ok(Multiplier::Three),
            4 => Ok(Multiplier::Four),
            _ => Err(StateError::InvalidMultiplierError { value }),
        }
    }
}

impl FromStr for Multiplier {
    type Err = StateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = input
            .trim()
            .parse::<u32>()
            .map_err(|_| StateError::UnparsableMultiplierError {
                input: input.to_string(),
            })?;
        Multiplier::try_from(value)
    }
}

impl From<Multiplier> for u32 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.factor()
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.factor())
    }
}
