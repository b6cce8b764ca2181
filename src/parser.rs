//! Number parsing for each input source
//!
//! Conversion is `str::parse::<f64>`: signed values, decimals, and exponent
//! notation all pass; anything else aborts the run with the offending token.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{SortContext, SortError, SortResult};
use crate::source::{InputSource, SourceKind};

/// Collect the numbers supplied by the resolved source.
///
/// Standard input is consumed to end-of-stream when the source is `Stdin`;
/// the other sources never touch it.
pub fn collect(source: &InputSource) -> SortResult<Vec<f64>> {
    match source {
        InputSource::File(path) => collect_from_file(path),
        InputSource::InlineArgs(tokens) => collect_from_tokens(tokens),
        InputSource::Stdin => collect_from_reader(io::stdin().lock()),
    }
}

/// Parse one value per line from a file.
///
/// Lines are trimmed before conversion and blank lines produce no token.
/// The first non-empty line that fails conversion aborts the whole run,
/// reporting its 1-based line number.
pub fn collect_from_file(path: &Path) -> SortResult<Vec<f64>> {
    let file = File::open(path).with_file_context(path)?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_file_context(path)?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                return Err(SortError::invalid_number(
                    token,
                    Some(index + 1),
                    SourceKind::File(path.to_path_buf()),
                ))
            }
        }
    }

    Ok(values)
}

/// Convert inline argument tokens in order
pub fn collect_from_tokens(tokens: &[String]) -> SortResult<Vec<f64>> {
    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => return Err(SortError::invalid_number(token, None, SourceKind::Args)),
        }
    }
    Ok(values)
}

/// Read a whitespace-separated stream to end-of-input and convert every
/// token. Spaces, tabs, and newlines all act as separators.
///
/// A stream with no tokens yields an empty sequence; emptiness is reported
/// by the top-level contract, not here.
pub fn collect_from_reader<R: Read>(mut reader: R) -> SortResult<Vec<f64>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let mut values = Vec::new();
    for token in content.split_whitespace() {
        match token.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => return Err(SortError::invalid_number(token, None, SourceKind::Stdin)),
        }
    }
    Ok(values)
}
