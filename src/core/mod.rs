pub mod engine;
pub mod printer;
pub mod roster;

pub use crate::domain::model::Person;
pub use crate::domain::ports::RosterSource;
pub use crate::utils::error::Result;
