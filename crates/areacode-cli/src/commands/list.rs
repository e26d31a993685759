use crate::commands::{describe_record, print_json, AreaDto, Context};
use crate::error::invalid_input;
use anyhow::Result;
use areacode_core::{AreaCode, LocationRecord, LocationTable, RecordKind};
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only local areas in this two-letter state or province
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    Local,
    #[value(name = "non-geographic")]
    NonGeographic,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Local => RecordKind::Local,
            KindArg::NonGeographic => RecordKind::NonGeographic,
        }
    }
}

pub fn list_areas(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let state = args.state.as_deref().map(parse_state_code).transpose()?;
    let kind = args.kind.map(RecordKind::from);
    let entries = select(ctx.table, state.as_deref(), kind);

    if ctx.json {
        let items: Vec<AreaDto<'_>> = entries
            .into_iter()
            .map(|(code, record)| AreaDto {
                code: code.as_str(),
                record,
            })
            .collect();
        return print_json(&items);
    }

    if entries.is_empty() {
        println!("no area codes");
        return Ok(());
    }

    for (code, record) in entries {
        println!("{}  {}", code, describe_record(record));
    }
    Ok(())
}

fn parse_state_code(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.len() != 2 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(invalid_input(format!(
            "state must be a two-letter code: {raw}"
        )));
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn select<'a>(
    table: &'a LocationTable,
    state: Option<&str>,
    kind: Option<RecordKind>,
) -> Vec<(&'a AreaCode, &'a LocationRecord)> {
    table
        .iter()
        .filter(|(_, record)| kind.map_or(true, |kind| record.kind() == kind))
        .filter(|(_, record)| match state {
            Some(state) => record
                .as_local()
                .is_some_and(|area| area.state_code() == state),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_state_code, select};
    use areacode_core::{LocationTable, RecordKind};

    #[test]
    fn select_by_state() {
        let table = LocationTable::builtin();
        let codes: Vec<&str> = select(table, Some("DE"), None)
            .into_iter()
            .map(|(code, _)| code.as_str())
            .collect();
        assert_eq!(codes, vec!["302"]);
    }

    #[test]
    fn select_non_geographic() {
        let table = LocationTable::builtin();
        let entries = select(table, None, Some(RecordKind::NonGeographic));
        assert!(entries.iter().any(|(code, _)| code.as_str() == "800"));
        assert!(entries.iter().all(|(_, record)| !record.is_local()));
    }

    #[test]
    fn state_filter_excludes_non_geographic() {
        let table = LocationTable::builtin();
        let entries = select(table, Some("NY"), Some(RecordKind::NonGeographic));
        assert!(entries.is_empty());
    }

    #[test]
    fn parse_state_code_normalizes() {
        assert_eq!(parse_state_code(" ny ").unwrap(), "NY");
        assert!(parse_state_code("New York").is_err());
        assert!(parse_state_code("N1").is_err());
    }
}
