use crate::commands::{describe_record, print_json, Context};
use anyhow::Result;
use areacode_core::{LocationRecord, ResolveError};
use clap::Args;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Phone numbers, e.g. "+1-212-123-4567" or "(212) 123-4567"
    #[arg(required = true, value_name = "NUMBER")]
    pub numbers: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ResolutionDto<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a LocationRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Resolves every number; the first failure becomes the command's error.
pub fn resolve_numbers(ctx: &Context<'_>, args: ResolveArgs) -> Result<()> {
    let mut first_error: Option<ResolveError> = None;
    let mut items = Vec::with_capacity(args.numbers.len());

    for input in &args.numbers {
        let outcome = ctx.table.resolve(input);
        match &outcome {
            Ok(record) => debug!(input = %input, kind = record.kind().as_str(), "resolved"),
            Err(err) => {
                debug!(input = %input, error = %err, "unresolved");
                if first_error.is_none() {
                    first_error = Some(*err);
                }
            }
        }
        items.push(ResolutionDto {
            input: input.as_str(),
            record: outcome.ok(),
            error: outcome.err().map(|err| err.to_string()),
        });
    }

    if ctx.json {
        print_json(&items)?;
    } else {
        for item in &items {
            match (item.record, &item.error) {
                (Some(record), _) => println!("{}: {}", item.input, describe_record(record)),
                (None, Some(err)) => println!("{}: {}", item.input, err),
                (None, None) => {}
            }
        }
    }

    match first_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
