//! Command-line interface for cubegame
//! This binary parses cube game puzzle inputs and prints them in different formats.
//!
//! Usage:
//!   cubegame parse `<path>` [--format `<format>`]  - Parse a puzzle input and print it
//!   cubegame check `<path>`                      - Validate every line, reporting failures

use clap::{Arg, Command};

use cubegame::parser::parse_line;
use cubegame::processor::{process_file, OutputFormat};

fn main() {
    let matches = Command::new("cubegame")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and inspecting cube game puzzle records")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a puzzle input and print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the puzzle input")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g. 'summary', 'json', 'canonical')")
                        .default_value("summary"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate every line of a puzzle input")
                .arg(
                    Arg::new("path")
                        .help("Path to the puzzle input")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(path, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let input = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let mut failures = 0usize;
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(error) = parse_line(line) {
            failures += 1;
            eprintln!("line {}: {}", index + 1, error);
        }
    }

    if failures > 0 {
        eprintln!("{} invalid line(s)", failures);
        std::process::exit(1);
    }
    println!("OK");
}
