use std::io::{self, BufRead, Write};

use agent::{ComputerPlayer, PatternStore, Predictor};
use anyhow::Context;
use tracing::{info, warn};

use crate::{
    config::Config,
    model::score::Scoreboard,
    service::{
        console::{prompt_strategy, HumanPlayer, Narrator},
        game_loop::GameLoop,
    },
};

/// Plays one session: load the table, play the match, print the summary and
/// write the table back.
pub fn play<R, P, N>(config: &Config, mut input: R, mut prompts: P, narration: N) -> anyhow::Result<Scoreboard>
where
    R: BufRead,
    P: Write,
    N: Write,
{
    // A table that exists but could not be read is never overwritten.
    let (store, writable) = match PatternStore::load(&config.store) {
        Ok(store) => (store, true),
        Err(e) => {
            warn!("{}; starting with an empty pattern table", e);
            (PatternStore::new(), false)
        }
    };

    let strategy = match config.strategy {
        Some(strategy) => strategy,
        None => prompt_strategy(&mut input, &mut prompts).context("reading strategy choice")?,
    };
    let predictor = match config.seed {
        Some(seed) => Predictor::seeded(seed),
        None => Predictor::from_os_rng(),
    };
    info!(
        "Playing {} rounds against the {} computer (memory {})",
        config.rounds, strategy, config.memory
    );

    let computer = ComputerPlayer::new(strategy, config.memory, store, predictor);
    let human = HumanPlayer::new(input, prompts);
    let mut narrator = Narrator::new(narration);
    let mut game = GameLoop::new(human, computer, config.rounds);
    game.run(&mut narrator).context("playing match")?;

    let score = game.scoreboard().clone();
    narrator.summary(&score).context("printing summary")?;

    let (_, computer) = game.into_players();
    if !writable {
        warn!(
            "Not saving over unreadable pattern store {:?}",
            config.store
        );
        return Ok(score);
    }
    computer
        .into_store()
        .save(&config.store)
        .context("saving pattern table")?;
    Ok(score)
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    play(&config, stdin.lock(), io::stdout(), io::stdout())?;
    Ok(())
}
