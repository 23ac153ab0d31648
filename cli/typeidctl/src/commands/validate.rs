//! Validate command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use typeid::TypeId;

use crate::error::CliError;
use crate::output::{print_failure, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Check a text against the identifier grammar.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Text to check.
    input: String,
}

#[derive(Debug, PartialEq, Serialize)]
struct ValidationView {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let view = check(&self.input);

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Text => match view.message {
                None => print_success(&self.input),
                Some(message) => print_failure(&self.input, message),
            },
        }

        if !view.valid {
            return Err(CliError::SomeInvalid { count: 1, total: 1 }.into());
        }

        Ok(())
    }
}

fn check(input: &str) -> ValidationView {
    match TypeId::parse_to_result(input) {
        Ok(_) => ValidationView {
            valid: true,
            message: None,
        },
        Err(message) => ValidationView {
            valid: false,
            message: Some(message),
        },
    }
}
