//! Generate command.

use anyhow::Result;
use clap::Args;
use typeid::TypeId;

use crate::error::CliError;
use crate::output::print_lines;

use super::CommandContext;

/// Generate new UUIDv7-based identifiers.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Prefix for the identifiers (defaults to $TYPEID_PREFIX, else none).
    #[arg(long, short)]
    prefix: Option<String>,

    /// Number of identifiers to generate.
    #[arg(long, short = 'n', default_value = "1")]
    count: usize,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let prefix = ctx.resolve_prefix(self.prefix.as_deref());
        let ids = generate(prefix, self.count)?;
        print_lines(&ids, ctx.format);
        Ok(())
    }
}

fn generate(prefix: &str, count: usize) -> Result<Vec<String>, CliError> {
    (0..count)
        .map(|_| {
            TypeId::generate(prefix)
                .map(|id| id.to_string())
                .map_err(|source| CliError::InvalidPrefix {
                    prefix: prefix.to_string(),
                    source,
                })
        })
        .collect()
}
