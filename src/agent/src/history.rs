use std::collections::VecDeque;

use common::model::{game::Move, pattern::Pattern};

/// Sliding window over the most recent human moves.
#[derive(Debug, Clone)]
pub struct HistoryWindow {
    moves: VecDeque<Move>,
    capacity: usize,
}

impl HistoryWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        HistoryWindow {
            moves: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `next`. If the window was already full, its contents are
    /// returned as a finished pattern and the oldest move is dropped first.
    pub fn observe(&mut self, next: Move) -> Option<Pattern> {
        let finished = if self.is_full() {
            let pattern = self.current_pattern();
            self.moves.pop_front();
            Some(pattern)
        } else {
            None
        };
        self.moves.push_back(next);
        finished
    }

    pub fn is_full(&self) -> bool {
        self.moves.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Every held move, oldest first.
    pub fn current_pattern(&self) -> Pattern {
        self.moves.iter().copied().collect()
    }

    /// Leading moves of the next pattern this window will finish: the newest
    /// `capacity - 1` moves. Only available once the window is full.
    pub fn lookup_key(&self) -> Option<Vec<Move>> {
        if !self.is_full() {
            return None;
        }
        Some(self.moves.iter().skip(1).copied().collect())
    }
}
