use crate::core::roster::Roster;
use crate::core::{Person, RosterSource};
use crate::utils::error::{Result, RosterError};
use std::fs;
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["json", "toml", "csv"];

/// The two built-in users.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl RosterSource for SampleSource {
    fn describe(&self) -> String {
        "built-in sample".to_string()
    }

    fn load(&self) -> Result<Vec<Person>> {
        Ok(Roster::sample().as_slice().to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Csv,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            Some("csv") => Ok(FileFormat::Csv),
            _ => Err(RosterError::UnsupportedSource {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Roster file on local disk; the format follows the file extension.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Person>> {
        let format = FileFormat::from_path(&self.path)?;
        tracing::debug!("Reading {:?} roster from {}", format, self.path.display());

        let roster = match format {
            FileFormat::Json => Roster::from_json_str(&fs::read_to_string(&self.path)?)?,
            FileFormat::Toml => Roster::from_toml_str(&fs::read_to_string(&self.path)?)?,
            FileFormat::Csv => Roster::from_csv_reader(fs::File::open(&self.path)?)?,
        };

        if roster.is_empty() {
            tracing::warn!("{} contains no users", self.path.display());
        }
        Ok(roster.as_slice().to_vec())
    }
}

/// Either source, picked at start-up from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Sample(SampleSource),
    File(FileSource),
}

impl RosterSource for ConfiguredSource {
    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Sample(source) => source.describe(),
            ConfiguredSource::File(source) => source.describe(),
        }
    }

    fn load(&self) -> Result<Vec<Person>> {
        match self {
            ConfiguredSource::Sample(source) => source.load(),
            ConfiguredSource::File(source) => source.load(),
        }
    }
}
