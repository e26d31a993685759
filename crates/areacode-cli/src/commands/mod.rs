use anyhow::Result;
use areacode_core::{LocationRecord, LocationTable};
use serde::Serialize;
use std::io::{self, Write};

pub mod list;
pub mod resolve;
pub mod show;

pub struct Context<'a> {
    pub table: &'a LocationTable,
    pub json: bool,
}

/// An area code with its record flattened alongside it.
#[derive(Debug, Serialize)]
pub struct AreaDto<'a> {
    pub code: &'a str,
    #[serde(flatten)]
    pub record: &'a LocationRecord,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// One-line text rendering shared by `resolve`, `show` and `list`.
pub fn describe_record(record: &LocationRecord) -> String {
    match record.as_local() {
        Some(area) => format!(
            "{}, {} ({})",
            area.city(),
            area.state_code(),
            area.country()
        ),
        None => "non-geographic".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::describe_record;
    use areacode_core::LocationTable;

    #[test]
    fn describe_local_and_non_geographic() {
        let table = LocationTable::builtin();
        let local = table.lookup("212").expect("212");
        assert_eq!(describe_record(local), "New York City, NY (US)");
        let toll_free = table.lookup("800").expect("800");
        assert_eq!(describe_record(toll_free), "non-geographic");
    }
}
