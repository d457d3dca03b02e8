pub mod error;
pub mod model;
pub mod player;
pub mod utility;

pub use error::{Error, Result};
