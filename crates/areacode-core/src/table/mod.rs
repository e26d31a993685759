mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::{AreaCode, LocalArea, LocationRecord};
use crate::error::ResolveError;
use crate::parser::parse_phone_number;

use self::data::{Row, ROWS};

static BUILTIN: LazyLock<LocationTable> = LazyLock::new(|| LocationTable::builder().build());

/// Immutable mapping from area code to [`LocationRecord`].
///
/// Once built a table is never mutated; share it by reference.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    records: HashMap<AreaCode, LocationRecord>,
    ordered: Vec<AreaCode>,
}

impl LocationTable {
    /// The table shipped with the crate, built on first use.
    pub fn builtin() -> &'static LocationTable {
        &BUILTIN
    }

    /// Starts from the built-in rows.
    pub fn builder() -> LocationTableBuilder {
        let mut builder = LocationTableBuilder::default();
        for (code, row) in ROWS {
            builder.insert(AreaCode::from_trusted(code), record_from_row(row));
        }
        builder
    }

    pub fn empty_builder() -> LocationTableBuilder {
        LocationTableBuilder::default()
    }

    /// Exact match on a three-character key.
    pub fn lookup(&self, code: &str) -> Option<&LocationRecord> {
        self.records.get(code)
    }

    pub fn get(&self, code: &AreaCode) -> Option<&LocationRecord> {
        self.records.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entries in ascending area-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&AreaCode, &LocationRecord)> + '_ {
        self.ordered
            .iter()
            .filter_map(|code| self.records.get(code).map(|record| (code, record)))
    }

    pub fn codes(&self) -> impl Iterator<Item = &AreaCode> + '_ {
        self.ordered.iter()
    }

    /// Extracts the area code from `raw` and looks it up.
    pub fn resolve(&self, raw: &str) -> Result<&LocationRecord, ResolveError> {
        let parsed = parse_phone_number(raw)?;
        self.get(&parsed.area_code).ok_or(ResolveError::NotFound)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LocationTableBuilder {
    records: HashMap<AreaCode, LocationRecord>,
}

impl LocationTableBuilder {
    /// Adds an entry, returning the record it replaced.
    pub fn insert(&mut self, code: AreaCode, record: LocationRecord) -> Option<LocationRecord> {
        self.records.insert(code, record)
    }

    pub fn remove(&mut self, code: &AreaCode) -> Option<LocationRecord> {
        self.records.remove(code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn build(self) -> LocationTable {
        let mut ordered: Vec<AreaCode> = self.records.keys().cloned().collect();
        ordered.sort();
        LocationTable {
            records: self.records,
            ordered,
        }
    }
}

fn record_from_row(row: &Row) -> LocationRecord {
    match *row {
        Row::Local {
            city,
            state,
            state_code,
            country,
        } => LocationRecord::Local(LocalArea::from_trusted(city, state, state_code, country)),
        Row::NonGeographic => LocationRecord::NonGeographic,
    }
}

#[cfg(test)]
mod tests {
    use super::data::{Row, ROWS};
    use super::LocationTable;
    use crate::domain::{AreaCode, LocalArea, LocationRecord, RecordKind};
    use crate::error::ResolveError;

    #[test]
    fn builtin_rows_satisfy_record_invariants() {
        for (code, row) in ROWS {
            AreaCode::new(code).unwrap_or_else(|err| panic!("{code}: {err}"));
            if let Row::Local {
                city,
                state,
                state_code,
                country,
            } = row
            {
                let checked = LocalArea::new(city, state, state_code, country)
                    .unwrap_or_else(|err| panic!("{code}: {err}"));
                assert_eq!(checked.city(), *city);
                assert_eq!(checked.state_code(), *state_code);
            }
        }
    }

    #[test]
    fn builtin_rows_have_unique_codes() {
        assert_eq!(LocationTable::builtin().len(), ROWS.len());
    }

    #[test]
    fn lookup_is_exact_match() {
        let table = LocationTable::builtin();
        let record = table.lookup("212").unwrap();
        let area = record.as_local().unwrap();
        assert_eq!(area.city(), "New York City");
        assert_eq!(area.state(), "New York");
        assert_eq!(area.state_code(), "NY");
        assert_eq!(area.country(), "US");

        assert!(table.lookup("21").is_none());
        assert!(table.lookup("2120").is_none());
        assert!(table.lookup("000").is_none());
    }

    #[test]
    fn toll_free_codes_are_non_geographic() {
        let table = LocationTable::builtin();
        for code in ["800", "833", "844", "855", "866", "877", "888", "900"] {
            assert_eq!(
                table.lookup(code).map(LocationRecord::kind),
                Some(RecordKind::NonGeographic),
                "{code}"
            );
        }
    }

    #[test]
    fn iter_is_sorted() {
        let codes: Vec<&str> = LocationTable::builtin()
            .codes()
            .map(AreaCode::as_str)
            .collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn builder_overrides_and_removes() {
        let mut builder = LocationTable::builder();
        let code = AreaCode::new("555").unwrap();
        let record = LocationRecord::Local(
            LocalArea::new("Springfield", "Illinois", "IL", "US").unwrap(),
        );
        assert!(builder.insert(code.clone(), record.clone()).is_none());
        assert!(builder.remove(&AreaCode::new("212").unwrap()).is_some());
        let table = builder.build();

        assert_eq!(table.get(&code), Some(&record));
        assert!(!table.contains("212"));
        assert_eq!(table.len(), LocationTable::builtin().len());
    }

    #[test]
    fn resolve_against_custom_table() {
        let mut builder = LocationTable::empty_builder();
        builder.insert(AreaCode::new("001").unwrap(), LocationRecord::NonGeographic);
        let table = builder.build();

        assert_eq!(
            table.resolve("(001) 123-4567"),
            Ok(&LocationRecord::NonGeographic)
        );
        assert_eq!(
            table.resolve("+1-212-123-4567"),
            Err(ResolveError::NotFound)
        );
    }
}
