use common::model::{game::Move, pattern::Pattern};
use itertools::Itertools;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::debug;

use crate::{history::HistoryWindow, store::PatternStore};

/// The stored pattern a prediction was drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub pattern: Pattern,
    pub count: u64,
    /// The human move that followed the prefix in `pattern`.
    pub predicted: Move,
}

impl Forecast {
    pub fn response(&self) -> Move {
        self.predicted.counter()
    }
}

/// Picks the computer's move from observed patterns, falling back to a
/// uniform random move when there is nothing to go on.
#[derive(Debug, Clone)]
pub struct Predictor<R = SmallRng> {
    rng: R,
}

impl Predictor<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Predictor::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Predictor::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> Predictor<R> {
    pub fn new(rng: R) -> Self {
        Predictor { rng }
    }

    pub fn random_move(&mut self) -> Move {
        self.rng.random()
    }

    /// Finds the most frequent stored pattern that extends `prefix`.
    ///
    /// Ties keep the earliest pattern in key order.
    pub fn forecast(&self, prefix: &[Move], store: &PatternStore) -> Option<Forecast> {
        let (pattern, count) = store
            .matching(prefix)
            .max_set_by_key(|(_, count)| *count)
            .into_iter()
            .next()?;
        let predicted = pattern.get(prefix.len())?;
        Some(Forecast {
            pattern: pattern.clone(),
            count,
            predicted,
        })
    }

    /// The move to play given everything seen before this round.
    pub fn choose(&mut self, window: &HistoryWindow, store: &PatternStore) -> Move {
        let Some(prefix) = window.lookup_key() else {
            debug!(
                "History has {}/{} moves, playing randomly",
                window.len(),
                window.capacity()
            );
            return self.random_move();
        };
        match self.forecast(&prefix, store) {
            Some(forecast) => {
                debug!(
                    "Matched {} (seen {} times), expecting {}",
                    forecast.pattern, forecast.count, forecast.predicted
                );
                forecast.response()
            }
            None => {
                debug!("No stored pattern follows {}, playing randomly", Pattern::from(prefix.as_slice()));
                self.random_move()
            }
        }
    }
}
