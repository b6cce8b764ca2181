//! Command line options for sort invocations

use std::path::PathBuf;

/// Parsed command line options for a single invocation
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    /// File to read numbers from (`-f`/`--file`)
    pub file: Option<PathBuf>,
    /// Numeric tokens given directly on the command line
    pub values: Vec<String>,
}

impl SortOptions {
    /// Create options with neither a file nor inline values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input file
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }

    /// Set the inline numeric tokens
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }
}
