//! Number sorting utility
//!
//! Collects numeric values from command-line arguments, a file, or standard
//! input, sorts them in ascending order, and renders them as a single
//! space-separated line.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod format;
pub mod options;
pub mod parser;
pub mod sort;
pub mod source;

// Re-export commonly used types
pub use error::{SortError, SortResult};
pub use options::SortOptions;
pub use source::{InputSource, SourceKind};

/// Exit code for a successful run (including `--help` and `--version`)
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for any application-level failure
pub const EXIT_FAILURE: i32 = 1;
/// Exit code reserved for malformed option usage, reported by clap itself
pub const USAGE_FAILURE: i32 = 2;

/// Run the whole pipeline for the given options and return the output line.
///
/// Standard input is read to end-of-stream when the options name neither a
/// file nor inline values. An empty resolved sequence is an error.
pub fn sort_numbers(options: &SortOptions) -> SortResult<String> {
    let source = InputSource::resolve(options);
    let values = parser::collect(&source)?;
    if values.is_empty() {
        return Err(SortError::NoInput);
    }
    let sorted = sort::sorted(values);
    Ok(format::render_line(&sorted))
}
