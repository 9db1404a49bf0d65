//! Shared CLI error handling and exit codes.

use std::{fmt, io};

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was rejected (invalid layout, bad arguments)
    ValidationError = 1,
    /// Files could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Rejected input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Failure to load a file: I/O if the chain holds an `io::Error`,
    /// validation otherwise.
    pub fn from_load(error: &anyhow::Error, message: impl Into<String>) -> Self {
        let is_io = error
            .chain()
            .any(|cause| cause.downcast_ref::<io::Error>().is_some());
        if is_io {
            Self::io(message)
        } else {
            Self::validation(message)
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("bad").exit_code.code(), 1);
        assert_eq!(CliError::io("disk").exit_code.code(), 2);
    }

    #[test]
    fn test_load_errors_split_by_cause() {
        let missing = anyhow::Error::new(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .context("Failed to read layout file");
        assert_eq!(
            CliError::from_load(&missing, "x").exit_code,
            ExitCode::IoError
        );

        let malformed = anyhow::anyhow!("expected a table").context("Failed to parse");
        assert_eq!(
            CliError::from_load(&malformed, "x").exit_code,
            ExitCode::ValidationError
        );
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(CliError::io("Failed to read").to_string(), "Failed to read");
    }
}
