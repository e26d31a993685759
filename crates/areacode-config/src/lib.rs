use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use areacode_core::{AreaCode, CoreError, LocalArea, LocationRecord, LocationTable, RecordKind};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "areacode";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub default_format: OutputFormat,
    pub areas: Vec<AreaOverride>,
    pub removed: Vec<AreaCode>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A table entry added or replaced by the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaOverride {
    pub code: AreaCode,
    pub record: LocationRecord,
}

impl AppConfig {
    /// Built-in table with `removed` dropped and `areas` applied on top.
    pub fn location_table(&self) -> LocationTable {
        if self.areas.is_empty() && self.removed.is_empty() {
            return LocationTable::builtin().clone();
        }
        let mut builder = LocationTable::builder();
        for code in &self.removed {
            builder.remove(code);
        }
        for area in &self.areas {
            builder.insert(area.code.clone(), area.record.clone());
        }
        builder.build()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid area code in config: {0}")]
    InvalidAreaCode(String),
    #[error("invalid area entry {code}: {source}")]
    InvalidArea {
        code: String,
        #[source]
        source: CoreError,
    },
    #[error("non-geographic area {code} must not set {field}")]
    UnexpectedAreaField { code: String, field: &'static str },
    #[error("duplicate area entry: {0}")]
    DuplicateArea(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_format: Option<OutputFormat>,
    areas: Option<Vec<AreaFile>>,
    remove: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AreaFile {
    code: String,
    #[serde(rename = "type")]
    kind: RecordKind,
    city: Option<String>,
    state: Option<String>,
    state_code: Option<String>,
    country: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(format) = parsed.default_format {
        config.default_format = format;
    }

    for raw in parsed.remove.unwrap_or_default() {
        let code = parse_area_code(raw.trim())?;
        config.removed.push(code);
    }

    let mut seen = HashSet::new();
    for area in parsed.areas.unwrap_or_default() {
        let entry = build_override(area)?;
        if !seen.insert(entry.code.clone()) {
            return Err(ConfigError::DuplicateArea(entry.code.to_string()));
        }
        config.areas.push(entry);
    }

    Ok(config)
}

fn parse_area_code(raw: &str) -> Result<AreaCode> {
    AreaCode::new(raw).map_err(|_| ConfigError::InvalidAreaCode(raw.to_string()))
}

fn build_override(area: AreaFile) -> Result<AreaOverride> {
    let code = parse_area_code(area.code.trim())?;
    let record = match area.kind {
        RecordKind::Local => {
            let local = LocalArea::new(
                area.city.as_deref().unwrap_or_default(),
                area.state.as_deref().unwrap_or_default(),
                area.state_code.as_deref().unwrap_or_default(),
                area.country.as_deref().unwrap_or_default(),
            )
            .map_err(|source| ConfigError::InvalidArea {
                code: code.to_string(),
                source,
            })?;
            LocationRecord::Local(local)
        }
        RecordKind::NonGeographic => {
            let fields = [
                ("city", &area.city),
                ("state", &area.state),
                ("state_code", &area.state_code),
                ("country", &area.country),
            ];
            if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_some()) {
                return Err(ConfigError::UnexpectedAreaField {
                    code: code.to_string(),
                    field: *field,
                });
            }
            LocationRecord::NonGeographic
        }
    };
    Ok(AreaOverride { code, record })
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, AreaFile, ConfigError, ConfigFile, OutputFormat,
    };
    use areacode_core::{CoreError, LocationRecord, RecordKind};
    use std::fs;
    use tempfile::TempDir;

    fn local_area(code: &str) -> AreaFile {
        AreaFile {
            code: code.to_string(),
            kind: RecordKind::Local,
            city: Some("Springfield".to_string()),
            state: Some("Illinois".to_string()),
            state_code: Some("il".to_string()),
            country: Some("US".to_string()),
        }
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            default_format: Some(OutputFormat::Json),
            areas: Some(vec![local_area("555")]),
            remove: Some(vec!["212".to_string()]),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.default_format, OutputFormat::Json);
        assert_eq!(merged.removed[0].as_str(), "212");
        let area = merged.areas[0].record.as_local().expect("local");
        assert_eq!(area.state_code(), "IL");

        let table = merged.location_table();
        assert!(table.lookup("555").is_some());
        assert!(table.lookup("212").is_none());
    }

    #[test]
    fn merge_config_defaults_to_builtin_table() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged.default_format, OutputFormat::Text);
        assert_eq!(
            merged.location_table().len(),
            areacode_core::LocationTable::builtin().len()
        );
    }

    #[test]
    fn merge_config_rejects_duplicate_areas() {
        let parsed = ConfigFile {
            areas: Some(vec![local_area("555"), local_area("555")]),
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateArea(code) if code == "555"));
    }

    #[test]
    fn merge_config_rejects_incomplete_local_area() {
        let mut area = local_area("555");
        area.city = None;
        let parsed = ConfigFile {
            areas: Some(vec![area]),
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidArea {
                source: CoreError::EmptyField("city"),
                ..
            }
        ));
    }

    #[test]
    fn merge_config_rejects_fields_on_non_geographic_area() {
        let mut area = local_area("555");
        area.kind = RecordKind::NonGeographic;
        area.city = None;
        let parsed = ConfigFile {
            areas: Some(vec![area]),
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnexpectedAreaField { field: "state", .. }
        ));
    }

    #[test]
    fn merge_config_rejects_bad_codes() {
        let parsed = ConfigFile {
            remove: Some(vec!["21".to_string()]),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(parsed).unwrap_err(),
            ConfigError::InvalidAreaCode(code) if code == "21"
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "default_format = \"json\"\nremove = [\"900\"]\n\n[[areas]]\ncode = \"555\"\ntype = \"non-geographic\"\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.areas[0].record, LocationRecord::NonGeographic);
        let table = config.location_table();
        assert!(table.lookup("900").is_none());
        assert_eq!(table.lookup("555"), Some(&LocationRecord::NonGeographic));
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "colour = true\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
