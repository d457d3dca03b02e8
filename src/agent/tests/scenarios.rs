use std::fs;

use agent::{ComputerPlayer, PatternStore, Predictor, Strategy};
use common::{
    model::{
        game::{Move, Round},
        pattern::Pattern,
    },
    player::MoveSource,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(tag = "type")]
enum Event {
    Record { pattern: Pattern },
    Observe { moves: Pattern },
    ExpectCount { pattern: Pattern, count: u64 },
    ExpectWindow { moves: Pattern },
    ExpectMove { value: Move },
    Comment { text: String },
}

#[derive(Deserialize, Debug)]
struct TestCase {
    memory_size: usize,
    seed: u64,
    #[serde(default)]
    strategy: Strategy,
    sequence: Vec<Event>,
}

impl TestCase {
    fn load(file_path: &str, replacements: &[(&str, &str)]) -> Self {
        let mut text = fs::read_to_string(file_path).expect("Unable to read file");
        for (from, to) in replacements {
            text = text.replace(&format!("${{{}}}", from), to);
        }
        serde_json::from_str(&text).expect("Could not parse test case")
    }

    fn run(self) {
        let mut computer = ComputerPlayer::new(
            self.strategy,
            self.memory_size,
            PatternStore::new(),
            Predictor::seeded(self.seed),
        );
        let mut seeded = PatternStore::new();
        let mut history: Vec<Round> = Vec::new();
        for (step, event) in self.sequence.into_iter().enumerate() {
            match event {
                Event::Record { pattern } => {
                    seeded.record(pattern);
                    computer = ComputerPlayer::new(
                        self.strategy,
                        self.memory_size,
                        seeded.clone(),
                        Predictor::seeded(self.seed),
                    );
                    assert!(history.is_empty(), "step {}: Record must precede play", step);
                }
                Event::Observe { moves } => {
                    for human in moves.moves() {
                        let computer_move = computer.choose_move(&history).unwrap();
                        let round = Round::new(*human, computer_move);
                        computer.observe(&round);
                        history.push(round);
                    }
                }
                Event::ExpectCount { pattern, count } => {
                    assert_eq!(
                        computer.store().count(&pattern),
                        count,
                        "step {}: count of {}",
                        step,
                        pattern
                    );
                }
                Event::ExpectWindow { moves } => {
                    assert_eq!(computer.window().current_pattern(), moves, "step {}", step);
                }
                Event::ExpectMove { value } => {
                    assert_eq!(computer.choose_move(&history).unwrap(), value, "step {}", step);
                }
                Event::Comment { text } => {
                    println!("Comment: {}", text);
                }
            }
        }
    }
}

fn case(name: &str) -> String {
    format!("{}/tests/cases/{}.json", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn prefers_most_frequent_continuation() {
    TestCase::load(&case("most_frequent"), &[]).run();
}

#[test]
fn learns_a_repeated_move() {
    for (letter, counter) in [("R", "Paper"), ("P", "Scissors"), ("S", "Rock")] {
        TestCase::load(&case("repeated_move"), &[("move", letter), ("counter", counter)]).run();
    }
}

#[test]
fn window_slides_and_records() {
    TestCase::load(&case("sliding_window"), &[]).run();
}
