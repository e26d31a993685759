use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid area code: {0}")]
    InvalidAreaCode(String),
    #[error("{0} is required")]
    EmptyField(&'static str),
    #[error("invalid state code: {0}")]
    InvalidStateCode(String),
}

/// Failure kinds reported by phone-number resolution.
///
/// The display text is part of the public contract; callers match on it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveError {
    #[error("not found")]
    NotFound,
    #[error("phone number not valid")]
    InvalidNumber,
}

#[cfg(test)]
mod tests {
    use super::ResolveError;

    #[test]
    fn resolve_error_messages_are_stable() {
        assert_eq!(ResolveError::NotFound.to_string(), "not found");
        assert_eq!(
            ResolveError::InvalidNumber.to_string(),
            "phone number not valid"
        );
    }
}
