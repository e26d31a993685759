use crate::commands::{print_json, AreaDto, Context};
use crate::error::{invalid_input, not_found};
use anyhow::Result;
use areacode_core::AreaCode;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Three-digit area code
    pub code: String,
}

pub fn show_area(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let raw = args.code.trim();
    let code = AreaCode::new(raw)
        .map_err(|_| invalid_input(format!("area code must be three digits: {raw}")))?;
    let record = ctx
        .table
        .get(&code)
        .ok_or_else(|| not_found(format!("area code {code}")))?;

    if ctx.json {
        return print_json(&AreaDto {
            code: code.as_str(),
            record,
        });
    }

    println!("area code: {}", code);
    println!("type: {}", record.kind().as_str());
    if let Some(area) = record.as_local() {
        println!("city: {}", area.city());
        println!("state: {} ({})", area.state(), area.state_code());
        println!("country: {}", area.country());
    }
    Ok(())
}
