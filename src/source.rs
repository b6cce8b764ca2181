//! Input source resolution
//!
//! Decides which of file, inline arguments, or standard input supplies the
//! numbers for an invocation. Resolution only inspects already-parsed
//! options; no file or stream is opened here.

use std::fmt;
use std::path::PathBuf;

use crate::options::SortOptions;

/// Where the numbers for an invocation come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file with one numeric token per line
    File(PathBuf),
    /// Numeric tokens given directly on the command line
    InlineArgs(Vec<String>),
    /// Whitespace-separated tokens read from standard input
    Stdin,
}

impl InputSource {
    /// Resolve the input source from parsed options.
    ///
    /// Precedence is fixed: a file always wins, inline values are used only
    /// without a file, and stdin is the fallback when neither is given.
    /// Inline values passed alongside `--file` are silently ignored.
    pub fn resolve(options: &SortOptions) -> Self {
        if let Some(path) = &options.file {
            return InputSource::File(path.clone());
        }
        if !options.values.is_empty() {
            return InputSource::InlineArgs(options.values.clone());
        }
        InputSource::Stdin
    }
}

/// Source tag carried by diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    File(PathBuf),
    Args,
    Stdin,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::File(path) => write!(f, "{}", path.display()),
            SourceKind::Args => write!(f, "arguments"),
            SourceKind::Stdin => write!(f, "standard input"),
        }
    }
}
