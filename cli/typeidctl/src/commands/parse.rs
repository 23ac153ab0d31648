//! Parse command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use typeid::TypeId;

use crate::error::CliError;
use crate::output::{print_failure, print_output};

use super::CommandContext;

/// Decode identifiers into their parts.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Identifiers to decode.
    #[arg(required = true)]
    inputs: Vec<String>,
}

/// One decoded identifier.
#[derive(Debug, Clone, Serialize, Tabled)]
struct ParsedRow {
    #[tabled(rename = "TYPEID")]
    typeid: String,
    #[tabled(rename = "PREFIX")]
    prefix: String,
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "VERSION")]
    version: usize,
    #[tabled(rename = "TIMESTAMP_MS", display = "display_timestamp")]
    timestamp_ms: Option<u64>,
}

fn display_timestamp(ts: &Option<u64>) -> String {
    ts.map(|ms| ms.to_string()).unwrap_or_else(|| "-".to_string())
}

impl From<&TypeId> for ParsedRow {
    fn from(id: &TypeId) -> Self {
        Self {
            typeid: id.to_string(),
            prefix: id.prefix().to_string(),
            uuid: id.uuid().to_string(),
            version: id.uuid().get_version_num(),
            timestamp_ms: id.timestamp_ms(),
        }
    }
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let total = self.inputs.len();
        let mut rows = Vec::with_capacity(total);
        let mut failed = 0;

        for input in &self.inputs {
            TypeId::parse_with(
                input,
                |id| rows.push(ParsedRow::from(&id)),
                |message| {
                    failed += 1;
                    print_failure(input, message);
                },
            );
        }

        print_output(&rows, ctx.format);

        if failed > 0 {
            return Err(CliError::SomeInvalid {
                count: failed,
                total,
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_v7_id() {
        let id = TypeId::parse("theprefix_01h455vb4pex5vsknk084sn02q").unwrap();
        let row = ParsedRow::from(&id);
        assert_eq!(row.prefix, "theprefix");
        assert_eq!(row.uuid, "01890a5d-ac96-774b-bcce-b302099a8057");
        assert_eq!(row.version, 7);
        assert_eq!(row.timestamp_ms, Some(1_688_096_058_518));
    }

    #[test]
    fn test_row_table_columns() {
        let headers: Vec<String> = ParsedRow::headers()
            .into_iter()
            .map(|h| h.into_owned())
            .collect();
        assert_eq!(
            headers,
            ["TYPEID", "PREFIX", "UUID", "VERSION", "TIMESTAMP_MS"]
        );

        let id = TypeId::parse("00000000000000000000000000").unwrap();
        let row = ParsedRow::from(&id);
        let fields = row.fields();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[3], "0");
        assert_eq!(fields[4], "-");
    }

    #[test]
    fn test_row_without_timestamp() {
        let id = TypeId::parse("00000000000000000000000000").unwrap();
        let row = ParsedRow::from(&id);
        assert_eq!(row.timestamp_ms, None);
        assert_eq!(display_timestamp(&row.timestamp_ms), "-");
    }
}
