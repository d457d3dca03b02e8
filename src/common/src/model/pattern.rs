use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::Error, model::game::Move};

/// An ordered run of moves, written as contiguous letters (`RPS`).
///
/// Ordering is lexicographic over the moves, so a pattern always sorts
/// directly before every pattern it is a prefix of.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pattern(Vec<Move>);

impl Pattern {
    pub fn new(moves: Vec<Move>) -> Self {
        Pattern(moves)
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Move> {
        self.0.get(index).copied()
    }

    pub fn starts_with(&self, prefix: &[Move]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl From<&[Move]> for Pattern {
    fn from(moves: &[Move]) -> Self {
        Pattern(moves.to_vec())
    }
}

impl FromIterator<Move> for Pattern {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Pattern(iter.into_iter().collect())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.0 {
            write!(f, "{}", m.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::InvalidPattern(s.to_string()));
        }
        s.chars()
            .map(|c| Move::from_letter(c).ok_or_else(|| Error::InvalidPattern(s.to_string())))
            .collect()
    }
}

// Serialized in its text form so scenario files read like the store file.
impl Serialize for Pattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
