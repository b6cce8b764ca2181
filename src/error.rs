//! Error handling for the number sorter

use std::io;
use std::path::Path;
use thiserror::Error;

use crate::source::SourceKind;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("invalid number '{token}'{}", location(.origin, .line))]
    InvalidNumber {
        token: String,
        line: Option<usize>,
        origin: SourceKind,
    },

    #[error("no numbers provided")]
    NoInput,
}

/// Render the position part of an invalid-number diagnostic
fn location(origin: &SourceKind, line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" on line {n} of {origin}"),
        None => format!(" in {origin}"),
    }
}

impl SortError {
    /// Returns the process exit status for this error.
    ///
    /// Every application-level failure maps to the same status; exit code 2
    /// is owned by the argument parser for malformed option usage.
    pub fn exit_code(&self) -> i32 {
        crate::EXIT_FAILURE
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(token: &str, line: Option<usize>, origin: SourceKind) -> Self {
        SortError::InvalidNumber {
            token: token.to_string(),
            line,
            origin,
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for turning raw I/O errors into file-level diagnostics
pub trait SortContext<T> {
    fn with_file_context(self, path: &Path) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, path: &Path) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::NotFound => SortError::file_not_found(&path.display().to_string()),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", path.display(), io_err),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_number_message_with_line() {
        let err = SortError::invalid_number(
            "abc",
            Some(3),
            SourceKind::File(PathBuf::from("numbers.txt")),
        );
        assert_eq!(err.to_string(), "invalid number 'abc' on line 3 of numbers.txt");
    }

    #[test]
    fn test_invalid_number_message_without_line() {
        let err = SortError::invalid_number("x1", None, SourceKind::Args);
        assert_eq!(err.to_string(), "invalid number 'x1' in arguments");

        let err = SortError::invalid_number("x1", None, SourceKind::Stdin);
        assert_eq!(err.to_string(), "invalid number 'x1' in standard input");
    }

    #[test]
    fn test_file_not_found_names_path() {
        let err = SortError::file_not_found("missing.txt");
        assert_eq!(err.to_string(), "No such file or directory: missing.txt");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SortError::NoInput.exit_code(), crate::EXIT_FAILURE);
        assert_eq!(
            SortError::file_not_found("missing.txt").exit_code(),
            crate::EXIT_FAILURE
        );
    }

    #[test]
    fn test_file_context_maps_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");
        let result: Result<(), io::Error> = Err(io_err);
        let err = result
            .with_file_context(Path::new("missing.txt"))
            .expect_err("Expected an error");
        assert!(matches!(err, SortError::FileNotFound { .. }));
    }

    #[test]
    fn test_file_context_keeps_other_io_errors() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let result: Result<(), io::Error> = Err(io_err);
        let err = result
            .with_file_context(Path::new("locked.txt"))
            .expect_err("Expected an error");
        assert!(matches!(err, SortError::Io(_)));
        assert!(err.to_string().contains("locked.txt"));
    }
}
