use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedsideConfig {
    /// Schema version. Missing or 0 = an unversioned, hand-written file.
    #[serde(default)]
    pub config_version: u32,
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

impl Default for BedsideConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_format: OutputFormat::default(),
            log_filter: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("bedside"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// What startup made of the config file.
#[derive(Debug)]
pub struct StartupConfig {
    pub config: BedsideConfig,
    /// On-disk version of a file that was migrated while loading.
    pub migrated_from: Option<u32>,
    /// Why the file could not be used. Defaults are in effect when set, so
    /// `config reset` still works against a broken file.
    pub load_error: Option<eyre::Report>,
}

/// Load the config at `path` without failing. A missing file gives the
/// defaults; an unreadable or unsupported one gives the defaults plus the
/// error for the caller to report once logging is up.
pub fn load_for_startup(path: &Path) -> StartupConfig {
    if !path.exists() {
        return StartupConfig {
            config: BedsideConfig::default(),
            migrated_from: None,
            load_error: None,
        };
    }
    match read_config(path) {
        Ok((config, on_disk_version)) => StartupConfig {
            config,
            migrated_from: (on_disk_version < CURRENT_VERSION).then_some(on_disk_version),
            load_error: None,
        },
        Err(e) => StartupConfig {
            config: BedsideConfig::default(),
            migrated_from: None,
            load_error: Some(e),
        },
    }
}

pub fn load_config(path: &Path) -> eyre::Result<BedsideConfig> {
    read_config(path).map(|(config, _)| config)
}

fn read_config(path: &Path) -> eyre::Result<(BedsideConfig, u32)> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("config at {} is not valid JSON: {e}", path.display()))?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: BedsideConfig = serde_json::from_value(migrated)?;
    Ok((config, on_disk_version))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update bedside."
        ));
    }

    // v0 -> v1: unversioned files get stamped; fields fall back to defaults.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &BedsideConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config(path: &Path) -> eyre::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(path)?;
    tracing::info!(path = %path.display(), "config deleted");
    Ok(true)
}
