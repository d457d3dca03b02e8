use std::io::Write;

use common::{model::game::Round, player::MoveSource, Error, Result};
use tracing::{debug, info};

use crate::{model::score::Scoreboard, service::console::Narrator};

/// Drives a fixed number of rounds between two move sources.
pub struct GameLoop<H, C> {
    human: H,
    computer: C,
    rounds: u32,
    score: Scoreboard,
    history: Vec<Round>,
}

impl<H: MoveSource, C: MoveSource> GameLoop<H, C> {
    pub fn new(human: H, computer: C, rounds: u32) -> Self {
        GameLoop {
            human,
            computer,
            rounds,
            score: Scoreboard::new(),
            history: Vec::new(),
        }
    }

    /// One round. The computer only ever sees rounds that are already over;
    /// the human's move for this round reaches it through `observe` after the
    /// outcome is settled.
    pub fn play_round(&mut self) -> Result<Round> {
        let human_move = self.human.choose_move(&self.history)?;
        let computer_move = self.computer.choose_move(&self.history)?;
        let round = Round::new(human_move, computer_move);
        self.score.apply(&round.outcome);
        debug!(
            "Round {}: {} vs {} -> {:?}",
            self.score.rounds_played, round.human, round.computer, round.outcome
        );
        self.human.observe(&round);
        self.computer.observe(&round);
        self.history.push(round.clone());
        Ok(round)
    }

    /// Plays until the configured round count. Running out of human input
    /// ends the match early without an error.
    pub fn run<W: Write>(&mut self, narrator: &mut Narrator<W>) -> Result<()> {
        while self.score.rounds_played < self.rounds {
            match self.play_round() {
                Ok(round) => narrator.round(&round)?,
                Err(Error::InputClosed) => {
                    info!(
                        "Input closed after {} of {} rounds",
                        self.score.rounds_played, self.rounds
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.score
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    pub fn into_players(self) -> (H, C) {
        (self.human, self.computer)
    }
}
