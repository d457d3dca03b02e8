use std::io::{BufRead, Write};

use agent::Strategy;
use colored::Colorize;
use common::{
    model::game::{Move, Outcome, Round},
    player::MoveSource,
    Error, Result,
};
use tracing::debug;

use crate::model::score::Scoreboard;

/// Reads one trimmed line, or `None` once input is exhausted.
fn read_line(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// The person at the keyboard.
pub struct HumanPlayer<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        HumanPlayer { reader, writer }
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanPlayer<R, W> {
    fn choose_move(&mut self, history: &[Round]) -> Result<Move> {
        loop {
            write!(
                self.writer,
                "Round {} - Enter choice (R/P/S): ",
                history.len() + 1
            )?;
            self.writer.flush()?;
            let Some(input) = read_line(&mut self.reader)? else {
                return Err(Error::InputClosed);
            };
            match input.parse::<Move>() {
                Ok(choice) => return Ok(choice),
                Err(_) => {
                    debug!("Rejected move input {:?}", input);
                    writeln!(self.writer, "Invalid choice {:?}, please enter R, P or S.", input)?;
                }
            }
        }
    }
}

/// Asks which computer strategy to play against until a valid answer arrives.
pub fn prompt_strategy(reader: &mut impl BufRead, writer: &mut impl Write) -> Result<Strategy> {
    loop {
        write!(writer, "Choose strategy (R for Random, S for Smart): ")?;
        writer.flush()?;
        let Some(input) = read_line(reader)? else {
            return Err(Error::InputClosed);
        };
        match input.parse::<Strategy>() {
            Ok(strategy) => return Ok(strategy),
            Err(reason) => writeln!(writer, "{}", reason)?,
        }
    }
}

/// Console narration of a match.
pub struct Narrator<W> {
    writer: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(writer: W) -> Self {
        Narrator { writer }
    }

    pub fn round(&mut self, round: &Round) -> Result<()> {
        writeln!(self.writer, "Computer chose: {}", round.computer)?;
        let verdict = match round.outcome {
            Outcome::Win => "Human wins this round!".green(),
            Outcome::Loss => "Computer wins this round!".red(),
            Outcome::Draw => "It's a tie!".yellow(),
        };
        writeln!(self.writer, "{}", verdict)?;
        Ok(())
    }

    pub fn summary(&mut self, score: &Scoreboard) -> Result<()> {
        let percent = score.summary();
        writeln!(
            self.writer,
            "{} Human: {} Computer: {} Ties: {}",
            "Final Score -".bold(),
            score.wins.0,
            score.wins.1,
            score.draws
        )?;
        writeln!(
            self.writer,
            "Over {} rounds: human won {}%, computer won {}%, ties {}%",
            score.rounds_played, percent.human, percent.computer, percent.draws
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reprompts_until_valid() {
        let mut output = Vec::new();
        let mut human = HumanPlayer::new(Cursor::new("x\n\nrock\n"), &mut output);
        assert_eq!(human.choose_move(&[]).unwrap(), Move::Rock);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter choice").count(), 3);
        assert_eq!(text.matches("Invalid choice").count(), 2);
    }

    #[test]
    fn prompt_shows_round_number() {
        let mut output = Vec::new();
        let history = vec![Round::new(Move::Rock, Move::Paper)];
        let mut human = HumanPlayer::new(Cursor::new("s\n"), &mut output);
        assert_eq!(human.choose_move(&history).unwrap(), Move::Scissors);
        assert!(String::from_utf8(output).unwrap().starts_with("Round 2"));
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut human = HumanPlayer::new(Cursor::new("q\n"), std::io::sink());
        assert!(matches!(human.choose_move(&[]), Err(Error::InputClosed)));
    }

    #[test]
    fn strategy_prompt() {
        let mut output = Vec::new();
        let strategy = prompt_strategy(&mut Cursor::new("maybe\nr\n"), &mut output).unwrap();
        assert_eq!(strategy, Strategy::Random);
        assert!(String::from_utf8(output).unwrap().contains("unknown strategy"));
    }

    #[test]
    fn narrates_rounds_and_summary() {
        let mut output = Vec::new();
        let mut narrator = Narrator::new(&mut output);
        narrator.round(&Round::new(Move::Rock, Move::Paper)).unwrap();
        let mut score = Scoreboard::new();
        score.apply(&Outcome::Loss);
        narrator.summary(&score).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Computer chose: Paper"));
        assert!(text.contains("Computer wins this round!"));
        assert!(text.contains("Human: 0 Computer: 1 Ties: 0"));
        assert!(text.contains("computer won 100%"));
    }
}
