use crate::domain::LocationRecord;
use crate::error::ResolveError;
use crate::table::LocationTable;

/// Resolves a free-form phone number against the built-in table.
///
/// Pure and reentrant: the table is immutable and all state is per call.
pub fn resolve(phone_number: &str) -> Result<LocationRecord, ResolveError> {
    LocationTable::builtin().resolve(phone_number).cloned()
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::error::ResolveError;
    use crate::table::LocationTable;

    #[test]
    fn resolve_matches_direct_lookup() {
        let record = resolve("+1-212-123-4567").unwrap();
        assert_eq!(Some(&record), LocationTable::builtin().lookup("212"));
    }

    #[test]
    fn resolve_reports_failure_kinds() {
        assert_eq!(resolve("0-212-123-456"), Err(ResolveError::NotFound));
        assert_eq!(resolve("0-212-123-4567"), Err(ResolveError::InvalidNumber));
        assert_eq!(resolve("+1-000-123-4567"), Err(ResolveError::NotFound));
    }

    #[test]
    fn resolve_toll_free() {
        let record = resolve("1-800-555-0199").unwrap();
        assert!(!record.is_local());
    }

    #[test]
    fn resolve_is_usable_across_threads() {
        let handles: Vec<_> = ["(415) 555-1212", "617.555.0100", "bogus"]
            .into_iter()
            .map(|raw| std::thread::spawn(move || resolve(raw)))
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().expect("join"))
            .collect();
        assert_eq!(results[0], resolve("(415) 555-1212"));
        assert!(results[1].is_ok());
        assert_eq!(results[2], Err(ResolveError::NotFound));
    }
}
