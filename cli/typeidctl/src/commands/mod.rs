//! CLI commands.

mod encode;
mod generate;
mod parse;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// typeid CLI - generate and inspect typed, sortable identifiers.
#[derive(Debug, Parser)]
#[command(name = "tid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new identifiers.
    Generate(generate::GenerateCommand),

    /// Decode identifiers into prefix, UUID, and timestamp.
    Parse(parse::ParseCommand),

    /// Render a UUID as an identifier.
    Encode(encode::EncodeCommand),

    /// Check whether a text is a valid identifier.
    Validate(validate::ValidateCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: self.format.unwrap_or(config.format),
            config,
        };

        tracing::debug!(format = ?ctx.format, "running command");

        match self.command {
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("tid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Resolve the prefix, preferring the flag over the configured default.
    pub fn resolve_prefix<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.unwrap_or(&self.config.default_prefix)
    }
}
