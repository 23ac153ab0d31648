//! Output formatting for CLI commands.

use std::str::FromStr;

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Print rows as a table, or as a JSON array.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            if data.is_empty() {
                println!("{}", "No items.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data)),
    }
}

/// Print plain lines, or a JSON array of strings.
pub fn print_lines(lines: &[String], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for line in lines {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", format_json(lines)),
    }
}

/// Print a single item as JSON.
pub fn print_single<T: Serialize>(data: &T) {
    println!("{}", format_json(data));
}

fn format_json<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "null".to_string())
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Valid:".green().bold(), message);
}

/// Print a failure message for one input without aborting.
pub fn print_failure(input: &str, message: &str) {
    eprintln!("{} {}: {}", "Invalid:".red().bold(), input, message);
}
