use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A three-digit North-American area code. Leading zeros are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AreaCode(String);

impl AreaCode {
    pub const LEN: usize = 3;

    pub fn new(raw: &str) -> Result<Self, CoreError> {
        if raw.len() != Self::LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidAreaCode(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Wraps a code from trusted table data without re-checking it.
    pub(crate) fn from_trusted(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AreaCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for AreaCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AreaCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AreaCode> for String {
    fn from(value: AreaCode) -> Self {
        value.0
    }
}

impl AsRef<str> for AreaCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::AreaCode;
    use crate::error::CoreError;

    #[test]
    fn area_code_keeps_leading_zeros() {
        let code = AreaCode::new("007").unwrap();
        assert_eq!(code.as_str(), "007");
        assert_eq!(code.to_string(), "007");
    }

    #[test]
    fn area_code_rejects_wrong_length() {
        assert_eq!(
            AreaCode::new("21"),
            Err(CoreError::InvalidAreaCode("21".to_string()))
        );
        assert!(AreaCode::new("2125").is_err());
        assert!(AreaCode::new("").is_err());
    }

    #[test]
    fn area_code_rejects_non_digits() {
        assert!(AreaCode::new("2a2").is_err());
        assert!(AreaCode::new(" 21").is_err());
        assert!(AreaCode::new("２１２").is_err());
    }

    #[test]
    fn area_code_deserialize_validates() {
        let code: AreaCode = serde_json::from_str("\"415\"").unwrap();
        assert_eq!(code.as_str(), "415");
        assert!(serde_json::from_str::<AreaCode>("\"41\"").is_err());
    }
}
