use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScourgifyError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Could not read {path}: {source}")]
    SourceNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Configuration,
    Input,
    Data,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Caller mistake caught before any file was touched.
    Medium,
    /// Input could not be read or did not have the expected shape.
    High,
    /// Output could not be written or committed.
    Critical,
}

impl ScourgifyError {
    pub fn too_few_arguments() -> Self {
        Self::InvalidArgument {
            message: "Too few command-line arguments".to_string(),
        }
    }

    pub fn too_many_arguments() -> Self {
        Self::InvalidArgument {
            message: "Too many command-line arguments".to_string(),
        }
    }

    pub fn not_a_csv(path: &str) -> Self {
        Self::InvalidArgument {
            message: format!("Not a CSV file: {}", path),
        }
    }

    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Argument,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::SourceNotFound { .. } => ErrorCategory::Input,
            Self::MalformedRecord { .. } | Self::CsvError(_) => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Argument | ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Message printed to stderr by the CLI.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => message.clone(),
            Self::SourceNotFound { .. } => "Could not read".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Run as: scourgify <input.csv> <output.csv>"
            }
            Self::SourceNotFound { .. } => "Check that the input file exists and is readable",
            Self::MalformedRecord { .. } => {
                "Every row needs a name of the form \"Last, First\" and a house column"
            }
            Self::CsvError(_) => "Check the input file is valid CSV with a header row",
            Self::IoError(_) => "Check the output directory exists and is writable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the settings file passed with --config"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScourgifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_messages_match_cli_contract() {
        assert_eq!(
            ScourgifyError::too_few_arguments().user_friendly_message(),
            "Too few command-line arguments"
        );
        assert_eq!(
            ScourgifyError::too_many_arguments().user_friendly_message(),
            "Too many command-line arguments"
        );
        assert_eq!(
            ScourgifyError::not_a_csv("before.txt").user_friendly_message(),
            "Not a CSV file: before.txt"
        );
    }

    #[test]
    fn test_source_not_found_message_is_generic() {
        let err = ScourgifyError::SourceNotFound {
            path: "missing.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.user_friendly_message(), "Could not read");
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(ScourgifyError::too_few_arguments().exit_code(), 2);
        assert_eq!(ScourgifyError::malformed(3, "bad").exit_code(), 1);

        let io = ScourgifyError::IoError(std::io::Error::other("disk full"));
        assert_eq!(io.category(), ErrorCategory::Output);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);
    }
}
