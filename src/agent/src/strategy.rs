use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the computer picks its moves. Both strategies keep learning.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    Random,
    #[default]
    Smart,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => f.write_str("random"),
            Strategy::Smart => f.write_str("smart"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "random" => Ok(Strategy::Random),
            "s" | "smart" => Ok(Strategy::Smart),
            other => Err(format!("unknown strategy {:?}, expected random or smart", other)),
        }
    }
}
