use crate::config::sources::{ConfiguredSource, FileSource, SampleSource, SUPPORTED_EXTENSIONS};
use crate::core::printer::DEFAULT_HEADER;
use crate::utils::error::Result;
use crate::utils::validation::{validate_extension, validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "user-roster")]
#[command(about = "Print a typed user roster")]
pub struct CliConfig {
    /// Roster file (.json, .toml or .csv); the built-in sample is used when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Header line printed before the users
    #[arg(long, default_value = DEFAULT_HEADER)]
    pub header: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: None,
            header: DEFAULT_HEADER.to_string(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl CliConfig {
    pub fn source(&self) -> ConfiguredSource {
        match &self.input {
            Some(path) => ConfiguredSource::File(FileSource::new(path)),
            None => ConfiguredSource::Sample(SampleSource),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("header", &self.header)?;
        if let Some(path) = &self.input {
            validate_path("input", path)?;
            validate_extension("input", path, &SUPPORTED_EXTENSIONS)?;
        }
        Ok(())
    }
}
