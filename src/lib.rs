pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{FileSource, SampleSource};
pub use crate::core::{
    engine::RosterEngine,
    printer::{format_person, format_value, log_person, print_roster, render_roster},
    roster::Roster,
};
pub use domain::{model::Person, ports::RosterSource};
pub use utils::error::{Result, RosterError};
