#[cfg(feature = "cli")]
pub mod cli;
pub mod sources;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use sources::{ConfiguredSource, FileFormat, FileSource, SampleSource};
