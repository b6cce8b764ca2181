//! Command-line entry point for the number sorter
//!
//! The binary is a thin boundary: clap parses the options, the library runs
//! the pipeline, and failures are rendered here with the program prefix and
//! mapped to exit codes.

use std::path::PathBuf;
use std::process;

use clap::{Arg, Command};

use number_sorter::{error::SortResult, sort_numbers, InputSource, SortOptions, EXIT_SUCCESS};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("sort-numbers: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let options = options_from_matches(&matches);

    // Interactive invocations would otherwise block on a silent read.
    if InputSource::resolve(&options) == InputSource::Stdin {
        eprintln!("no file or arguments given; reading from standard input");
    }

    let line = sort_numbers(&options)?;
    println!("{line}");
    Ok(EXIT_SUCCESS)
}

fn build_cli() -> Command {
    Command::new("sort-numbers")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("sort-numbers [OPTIONS] [NUMBER]...")
        .about("Sort numbers in ascending order")
        .long_about(
            "Sort numbers in ascending order and print them as a single \
             space-separated line.\n\nNumbers are taken from the command line, \
             from a file given with --file (one number per line), or from \
             standard input (whitespace-separated) when neither is present. \
             A file always takes precedence over numbers on the command line.",
        )
        .arg(
            Arg::new("numbers")
                .help("Numbers to sort (reads stdin when omitted)")
                .value_name("NUMBER")
                .num_args(0..)
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Read numbers from FILE, one per line")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// Build options from parsed command line matches
fn options_from_matches(matches: &clap::ArgMatches) -> SortOptions {
    let values: Vec<String> = matches
        .get_many::<String>("numbers")
        .unwrap_or_default()
        .cloned()
        .collect();

    SortOptions::new()
        .with_file(matches.get_one::<PathBuf>("file").cloned())
        .with_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_numbers() {
        let matches = build_cli()
            .try_get_matches_from(["sort-numbers", "5", "2", "8"])
            .expect("Failed to parse test arguments");
        let options = options_from_matches(&matches);

        assert!(options.file.is_none());
        assert_eq!(options.values, vec!["5", "2", "8"]);
    }

    #[test]
    fn test_parse_negative_numbers_as_values() {
        let matches = build_cli()
            .try_get_matches_from(["sort-numbers", "3", "-4", "-2.71"])
            .expect("Failed to parse test arguments");
        let options = options_from_matches(&matches);

        assert_eq!(options.values, vec!["3", "-4", "-2.71"]);
    }

    #[test]
    fn test_parse_file_flag() {
        let matches = build_cli()
            .try_get_matches_from(["sort-numbers", "-f", "numbers.txt"])
            .expect("Failed to parse test arguments");
        let options = options_from_matches(&matches);

        assert_eq!(options.file, Some(PathBuf::from("numbers.txt")));
        assert!(options.values.is_empty());
    }

    #[test]
    fn test_parse_file_flag_with_positionals() {
        let matches = build_cli()
            .try_get_matches_from(["sort-numbers", "--file", "numbers.txt", "1", "2"])
            .expect("Failed to parse test arguments");
        let options = options_from_matches(&matches);

        assert_eq!(options.file, Some(PathBuf::from("numbers.txt")));
        assert_eq!(options.values, vec!["1", "2"]);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = build_cli().try_get_matches_from(["sort-numbers", "--bogus"]);
        assert!(result.is_err());
    }
}
