use common::{
    model::game::{Move, Round},
    player::MoveSource,
    Result,
};
use tracing::debug;

use crate::{
    history::HistoryWindow, predictor::Predictor, store::PatternStore, strategy::Strategy,
};

/// The computer opponent. Owns its pattern table and keeps learning from
/// every round regardless of strategy.
pub struct ComputerPlayer {
    strategy: Strategy,
    window: HistoryWindow,
    store: PatternStore,
    predictor: Predictor,
    last_move: Option<Move>,
}

impl ComputerPlayer {
    pub fn new(
        strategy: Strategy,
        memory_size: usize,
        store: PatternStore,
        predictor: Predictor,
    ) -> Self {
        ComputerPlayer {
            strategy,
            window: HistoryWindow::new(memory_size),
            store,
            predictor,
            last_move: None,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn window(&self) -> &HistoryWindow {
        &self.window
    }

    pub fn store(&self) -> &PatternStore {
        &self.store
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn into_store(self) -> PatternStore {
        self.store
    }

    fn play(&mut self) -> Move {
        let next_move = match self.strategy {
            Strategy::Random => self.predictor.random_move(),
            Strategy::Smart => self.predictor.choose(&self.window, &self.store),
        };
        self.last_move = Some(next_move);
        next_move
    }
}

impl MoveSource for ComputerPlayer {
    fn choose_move(&mut self, _history: &[Round]) -> Result<Move> {
        Ok(self.play())
    }

    fn observe(&mut self, round: &Round) {
        if let Some(pattern) = self.window.observe(round.human) {
            let count = self.store.record(pattern.clone());
            debug!("Recorded {} (now {})", pattern, count);
        }
    }
}
