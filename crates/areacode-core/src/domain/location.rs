use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Local,
    NonGeographic,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Local => "local",
            RecordKind::NonGeographic => "non-geographic",
        }
    }
}

/// What an area code maps to.
///
/// Non-geographic codes (toll-free, premium) carry no place data, so the
/// city/state fields only exist on the `Local` variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LocationRecord {
    Local(LocalArea),
    NonGeographic,
}

impl LocationRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            LocationRecord::Local(_) => RecordKind::Local,
            LocationRecord::NonGeographic => RecordKind::NonGeographic,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, LocationRecord::Local(_))
    }

    pub fn as_local(&self) -> Option<&LocalArea> {
        match self {
            LocationRecord::Local(area) => Some(area),
            LocationRecord::NonGeographic => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LocalAreaFields")]
pub struct LocalArea {
    city: String,
    state: String,
    state_code: String,
    country: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocalAreaFields {
    city: String,
    state: String,
    state_code: String,
    country: String,
}

impl TryFrom<LocalAreaFields> for LocalArea {
    type Error = CoreError;

    fn try_from(value: LocalAreaFields) -> Result<Self, Self::Error> {
        Self::new(&value.city, &value.state, &value.state_code, &value.country)
    }
}

impl LocalArea {
    pub fn new(city: &str, state: &str, state_code: &str, country: &str) -> Result<Self, CoreError> {
        let city = required("city", city)?;
        let state = required("state", state)?;
        let country = required("country", country)?;
        let state_code = normalize_state_code(state_code)?;
        Ok(Self {
            city,
            state,
            state_code,
            country,
        })
    }

    pub(crate) fn from_trusted(city: &str, state: &str, state_code: &str, country: &str) -> Self {
        Self {
            city: city.to_string(),
            state: state.to_string(),
            state_code: state_code.to_string(),
            country: country.to_string(),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Two-letter postal abbreviation, upper-case.
    pub fn state_code(&self) -> &str {
        &self.state_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

fn required(field: &'static str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

fn normalize_state_code(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.len() != 2 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidStateCode(raw.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::{LocalArea, LocationRecord, RecordKind};
    use crate::error::CoreError;
    use serde_json::json;

    #[test]
    fn local_area_trims_and_uppercases() {
        let area = LocalArea::new(" New York City ", "New York", "ny", "US").unwrap();
        assert_eq!(area.city(), "New York City");
        assert_eq!(area.state_code(), "NY");
    }

    #[test]
    fn local_area_requires_fields() {
        assert_eq!(
            LocalArea::new("  ", "New York", "NY", "US"),
            Err(CoreError::EmptyField("city"))
        );
        assert_eq!(
            LocalArea::new("Albany", "New York", "NY", ""),
            Err(CoreError::EmptyField("country"))
        );
    }

    #[test]
    fn local_area_rejects_bad_state_code() {
        assert!(matches!(
            LocalArea::new("Albany", "New York", "NYC", "US"),
            Err(CoreError::InvalidStateCode(_))
        ));
        assert!(LocalArea::new("Albany", "New York", "N1", "US").is_err());
    }

    #[test]
    fn local_record_serializes_with_type_tag() {
        let record = LocationRecord::Local(
            LocalArea::new("New York City", "New York", "NY", "US").unwrap(),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "local",
                "city": "New York City",
                "state": "New York",
                "stateCode": "NY",
                "country": "US"
            })
        );
    }

    #[test]
    fn non_geographic_record_carries_only_type() {
        let value = serde_json::to_value(LocationRecord::NonGeographic).unwrap();
        assert_eq!(value, json!({ "type": "non-geographic" }));
        assert_eq!(LocationRecord::NonGeographic.kind(), RecordKind::NonGeographic);
    }

    #[test]
    fn deserialize_enforces_local_invariant() {
        let ok: LocationRecord = serde_json::from_value(json!({
            "type": "local",
            "city": "Boston",
            "state": "Massachusetts",
            "stateCode": "MA",
            "country": "US"
        }))
        .unwrap();
        assert!(ok.is_local());

        let bad = serde_json::from_value::<LocationRecord>(json!({
            "type": "local",
            "city": "Boston",
            "state": "Massachusetts",
            "stateCode": "Mass",
            "country": "US"
        }));
        assert!(bad.is_err());
    }
}
