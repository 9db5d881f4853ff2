//! Configuration file handling.
//!
//! Settings live in `~/.wkfs/config.json` (or `$WKFS_DATA_DIR/config.json`).
//! A missing file means defaults. The API token is never written here.

use std::fs;
use std::path::{Path, PathBuf};

use wkfs_types::{AppConfig, ConfigError};

const DATA_DIR: &str = ".wkfs";
const CONFIG_FILE: &str = "config.json";

/// Keys accepted by [`get_value`] and [`set_value`].
pub const CONFIG_KEYS: &[&str] = &[
    "api_base_url",
    "api_revision",
    "dataset_base_url",
    "max_synonyms",
    "request_ceiling",
    "include_radicals",
    "delete_after_run",
    "timeout_secs",
];

/// Get the data directory path, creating it if needed.
pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = match std::env::var_os("WKFS_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .ok_or_else(|| ConfigError::DirectoryUnavailable {
                message: "cannot resolve home directory".to_string(),
            })?
            .join(DATA_DIR),
    };

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).map_err(|e| ConfigError::DirectoryUnavailable {
            message: format!("failed to create {}: {}", data_dir.display(), e),
        })?;
    }

    Ok(data_dir)
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_data_dir()?.join(CONFIG_FILE))
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    let config: AppConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    config.validate()?;

    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    config.validate()?;
    let content =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::from_json_error(&e))?;

    // Atomic write
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    fs::rename(&temp_path, path).map_err(|e| ConfigError::from_io_error(&e))
}

/// Update specific fields in the config file.
pub fn update_config<F>(updater: F) -> Result<AppConfig, ConfigError>
where
    F: FnOnce(&mut AppConfig) -> Result<(), ConfigError>,
{
    let mut config = load_config()?;
    updater(&mut config)?;
    save_config(&config)?;
    Ok(config)
}

pub fn get_value(config: &AppConfig, key: &str) -> Result<String, ConfigError> {
    let value = match key {
        "api_base_url" => config.api_base_url.clone(),
        "api_revision" => config.api_revision.clone(),
        "dataset_base_url" => config.dataset_base_url.clone(),
        "max_synonyms" => config.max_synonyms.to_string(),
        "request_ceiling" => config.request_ceiling.to_string(),
        "include_radicals" => config.include_radicals.to_string(),
        "delete_after_run" => config.delete_after_run.to_string(),
        "timeout_secs" => config.timeout_secs.to_string(),
        _ => return Err(ConfigError::UnknownKey { key: key.to_string() }),
    };
    Ok(value)
}

/// Parse `value` for `key` and store it. The result is validated as a whole.
pub fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
        value
            .parse()
            .map_err(|_| ConfigError::invalid(key, format!("cannot parse {value:?}")))
    }

    let mut updated = config.clone();
    match key {
        "api_base_url" => updated.api_base_url = value.trim_end_matches('/').to_string(),
        "api_revision" => updated.api_revision = value.to_string(),
        "dataset_base_url" => updated.dataset_base_url = value.to_string(),
        "max_synonyms" => updated.max_synonyms = parse(key, value)?,
        "request_ceiling" => updated.request_ceiling = parse(key, value)?,
        "include_radicals" => updated.include_radicals = parse(key, value)?,
        "delete_after_run" => updated.delete_after_run = parse(key, value)?,
        "timeout_secs" => updated.timeout_secs = parse(key, value)?,
        _ => return Err(ConfigError::UnknownKey { key: key.to_string() }),
    }
    updated.validate()?;

    *config = updated;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = load_config_from(&dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config, AppConfig::new());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = AppConfig { include_radicals: true, request_ceiling: 30, ..AppConfig::new() };

        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from(&path).unwrap(), config);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{not json").unwrap();

        let err = load_config_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_set_value_validates() {
        let mut config = AppConfig::new();

        set_value(&mut config, "request_ceiling", "120").unwrap();
        assert_eq!(get_value(&config, "request_ceiling").unwrap(), "120");

        assert!(set_value(&mut config, "max_synonyms", "12").is_err());
        assert!(set_value(&mut config, "include_radicals", "maybe").is_err());
        assert_eq!(config.max_synonyms, 8);

        let err = set_value(&mut config, "api_token", "secret").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey { .. }));
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = AppConfig::new();
        for key in CONFIG_KEYS {
            assert!(get_value(&config, key).is_ok(), "{key}");
        }
    }
}
