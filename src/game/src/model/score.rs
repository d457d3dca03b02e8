use common::model::game::Outcome;

/// Running tally for one match, counted from the human's side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scoreboard {
    /// (human, computer)
    pub wins: (u32, u32),
    pub draws: u32,
    pub rounds_played: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win => self.wins.0 += 1,
            Outcome::Loss => self.wins.1 += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.rounds_played += 1;
    }

    pub fn summary(&self) -> Summary {
        Summary {
            human: percent(self.wins.0, self.rounds_played),
            computer: percent(self.wins.1, self.rounds_played),
            draws: percent(self.draws, self.rounds_played),
        }
    }
}

/// Whole-number percentages of rounds played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub human: u32,
    pub computer: u32,
    pub draws: u32,
}

fn percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(count) * 100.0 / f64::from(total)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_outcomes() {
        let mut score = Scoreboard::new();
        for outcome in [Outcome::Win, Outcome::Loss, Outcome::Loss, Outcome::Draw] {
            score.apply(&outcome);
        }
        assert_eq!(score.wins, (1, 2));
        assert_eq!(score.draws, 1);
        assert_eq!(score.rounds_played, 4);
    }

    #[test]
    fn percentages_round_to_nearest() {
        let score = Scoreboard {
            wins: (1, 1),
            draws: 1,
            rounds_played: 3,
        };
        assert_eq!(
            score.summary(),
            Summary {
                human: 33,
                computer: 33,
                draws: 33
            }
        );
        let score = Scoreboard {
            wins: (2, 0),
            draws: 1,
            rounds_played: 3,
        };
        assert_eq!(score.summary().human, 67);
        let score = Scoreboard {
            wins: (1, 7),
            draws: 0,
            rounds_played: 8,
        };
        assert_eq!(score.summary().human, 13);
    }

    #[test]
    fn empty_match_is_zero() {
        assert_eq!(
            Scoreboard::new().summary(),
            Summary {
                human: 0,
                computer: 0,
                draws: 0
            }
        );
    }
}
