//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid prefix '{prefix}': {source}")]
    InvalidPrefix {
        prefix: String,
        #[source]
        source: typeid::TypeIdError,
    },

    #[error("invalid UUID '{0}'")]
    InvalidUuid(String),

    #[error("{count} of {total} inputs are invalid")]
    SomeInvalid { count: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidPrefix { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: prefixes use a-z and '_', at most 63 characters, no leading or trailing '_'."
                        .yellow()
                );
            }
            CliError::InvalidUuid(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: expected a UUID such as 01890a5d-ac96-774b-bcce-b302099a8057.".yellow()
                );
            }
            _ => {}
        }
    }
}
