pub mod game;
pub mod pattern;
