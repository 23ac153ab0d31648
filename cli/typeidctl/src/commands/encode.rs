//! Encode command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use typeid::{TypeId, Uuid};

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Render an existing UUID (any version) as an identifier.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Prefix for the identifier (defaults to $TYPEID_PREFIX, else none).
    #[arg(long, short)]
    prefix: Option<String>,

    /// UUID in any format accepted by the uuid crate.
    uuid: String,
}

#[derive(Debug, Serialize)]
struct EncodeView {
    typeid: String,
    prefix: String,
    uuid: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let prefix = ctx.resolve_prefix(self.prefix.as_deref());
        let id = encode(prefix, &self.uuid)?;

        match ctx.format {
            OutputFormat::Text => println!("{}", id),
            OutputFormat::Json => print_single(&EncodeView {
                typeid: id.to_string(),
                prefix: id.prefix().to_string(),
                uuid: id.uuid().to_string(),
            }),
        }

        Ok(())
    }
}

fn encode(prefix: &str, uuid: &str) -> Result<TypeId, CliError> {
    let uuid = Uuid::parse_str(uuid).map_err(|_| CliError::InvalidUuid(uuid.to_string()))?;

    TypeId::new(prefix, uuid).map_err(|source| CliError::InvalidPrefix {
        prefix: prefix.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_uuid() {
        let id = encode("theprefix", "01890a5d-ac96-774b-bcce-b302099a8057").unwrap();
        assert_eq!(id.to_string(), "theprefix_01h455vb4pex5vsknk084sn02q");
    }

    #[test]
    fn test_encode_without_prefix() {
        let id = encode("", "01890a5dac96774bbcceb302099a8057").unwrap();
        assert_eq!(id.to_string(), "01h455vb4pex5vsknk084sn02q");
    }

    #[test]
    fn test_encode_rejects_bad_uuid() {
        assert!(matches!(
            encode("user", "not-a-uuid"),
            Err(CliError::InvalidUuid(_))
        ));
    }

    #[test]
    fn test_encode_rejects_bad_prefix() {
        assert!(matches!(
            encode("_user", "01890a5d-ac96-774b-bcce-b302099a8057"),
            Err(CliError::InvalidPrefix { .. })
        ));
    }
}
