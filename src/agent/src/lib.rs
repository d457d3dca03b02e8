pub mod computer;
pub mod error;
pub mod history;
pub mod predictor;
pub mod store;
pub mod strategy;

pub use computer::ComputerPlayer;
pub use error::StoreError;
pub use history::HistoryWindow;
pub use predictor::{Forecast, Predictor};
pub use store::PatternStore;
pub use strategy::Strategy;

pub const DEFAULT_MEMORY_SIZE: usize = 5;
