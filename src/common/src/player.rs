use crate::{
    error::Result,
    model::game::{Move, Round},
};

/// Anything that can pick a move for a round.
///
/// `history` holds the rounds already completed in the current match and
/// never includes the round being chosen for.
pub trait MoveSource {
    fn choose_move(&mut self, history: &[Round]) -> Result<Move>;

    /// Called once per completed round, after the outcome is known.
    fn observe(&mut self, _round: &Round) {}
}
