use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Shape mismatch in record {index}, field `{field}`: {reason}")]
    ShapeMismatch {
        index: usize,
        field: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unsupported roster source: {path}")]
    UnsupportedSource { path: String },

    #[error("Invalid user: field `{field}` {reason}")]
    InvalidPerson { field: String, reason: String },

    #[error("Invalid roster document: {message}")]
    InvalidDocument { message: String },

    #[error("Invalid value for `{field}` ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn shape_mismatch(index: usize, field: &str, reason: impl Into<String>) -> Self {
        RosterError::ShapeMismatch {
            index,
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::ShapeMismatch { .. }
            | RosterError::InvalidPerson { .. }
            | RosterError::InvalidDocument { .. }
            | RosterError::SerializationError(_)
            | RosterError::TomlError(_)
            | RosterError::CsvError(_) => ErrorCategory::Data,
            RosterError::UnsupportedSource { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RosterError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error when it ends a run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::ShapeMismatch {
                index,
                field,
                reason,
            } => format!("Record #{} is not a valid user ({}: {})", index + 1, field, reason),
            RosterError::UnsupportedSource { path } => {
                format!("Cannot read users from '{}'", path)
            }
            RosterError::IoError(e) => format!("Could not read or write a file: {}", e),
            RosterError::SerializationError(_)
            | RosterError::TomlError(_)
            | RosterError::CsvError(_) => format!("The roster file could not be parsed: {}", self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::ShapeMismatch { .. } => {
                "Every user needs a non-empty `name`, an integer `age` >= 0 and a non-empty `occupation`"
            }
            RosterError::InvalidPerson { .. } => {
                "Users need a non-empty `name` and a non-empty `occupation`"
            }
            RosterError::InvalidDocument { .. } => {
                "A roster file holds a list of users, or a `users` list with unique CSV columns"
            }
            RosterError::UnsupportedSource { .. } => {
                "Use a roster file ending in .json, .toml or .csv"
            }
            RosterError::IoError(_) => "Check that the file exists and is readable",
            RosterError::SerializationError(_) => "Check the JSON syntax of the roster file",
            RosterError::TomlError(_) => "Check the TOML syntax; users go in [[users]] tables",
            RosterError::CsvError(_) => "Check the CSV header: name,age,occupation",
            RosterError::InvalidConfigValueError { .. } => "Run with --help to see valid options",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
