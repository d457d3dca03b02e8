use std::path::PathBuf;

use agent::{Strategy, DEFAULT_MEMORY_SIZE};
use clap::Parser;
use tracing::Level;

pub const DEFAULT_ROUNDS: u32 = 20;

#[derive(Parser, Debug, Clone)]
#[command(name = "rps")]
#[command(version)]
#[command(about = "Rock-Paper-Scissors against a computer that learns your habits")]
pub struct Config {
    /// Number of rounds to play
    #[arg(long, short, env = "RPS_ROUNDS", default_value_t = DEFAULT_ROUNDS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// How many of your recent moves the computer remembers
    #[arg(long, short, env = "RPS_MEMORY", default_value_t = DEFAULT_MEMORY_SIZE,
          value_parser = parse_memory)]
    pub memory: usize,

    /// File the pattern table is loaded from and saved to
    #[arg(long, env = "RPS_STORE", default_value = "patterns.txt")]
    pub store: PathBuf,

    /// Computer strategy (random or smart); prompts when omitted
    #[arg(long, env = "RPS_STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Seed for the computer's random choices
    #[arg(long, env = "RPS_SEED")]
    pub seed: Option<u64>,

    /// Log level written to stderr
    #[arg(long, env = "RPS_LOG", default_value = "warn")]
    pub log_level: Level,
}

fn parse_memory(value: &str) -> Result<usize, String> {
    let memory: usize = value
        .parse()
        .map_err(|_| format!("{:?} is not a whole number", value))?;
    if memory < 2 {
        return Err("memory must be at least 2 moves".to_string());
    }
    Ok(memory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["rps"]).unwrap();
        assert_eq!(config.rounds, DEFAULT_ROUNDS);
        assert_eq!(config.memory, DEFAULT_MEMORY_SIZE);
        assert_eq!(config.store, PathBuf::from("patterns.txt"));
        assert_eq!(config.strategy, None);
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn explicit_values() {
        let config = Config::try_parse_from([
            "rps", "-r", "7", "-m", "3", "--store", "/tmp/p.txt", "--strategy", "random", "--seed",
            "9", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(config.rounds, 7);
        assert_eq!(config.memory, 3);
        assert_eq!(config.strategy, Some(Strategy::Random));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Config::try_parse_from(["rps", "--rounds", "0"]).is_err());
        assert!(Config::try_parse_from(["rps", "--memory", "1"]).is_err());
        assert!(Config::try_parse_from(["rps", "--strategy", "clever"]).is_err());
    }
}
