//! Configuration file loading for presetforge.
//!
//! Discovers and loads `presetforge.toml` from the working directory.
//! Every field has a default, so a missing file or section is not an error.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "presetforge.toml";

/// Top-level configuration from presetforge.toml.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PresetforgeConfig {
    /// Where inputs are read from and outputs written to.
    pub paths: PathsConfig,

    /// Placement conventions shared by every family.
    pub layout: LayoutSection,

    /// Per-family override of the attribute the feature code is keyed under.
    pub key_attributes: BTreeMap<String, String>,
}

impl Default for PresetforgeConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            layout: LayoutSection::default(),
            key_attributes: default_key_attributes(),
        }
    }
}

/// Paths section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the feeds of the default batch.
    pub schema_dir: Utf8PathBuf,

    /// Group taxonomy table (1-character codes).
    pub groups: Utf8PathBuf,

    /// Subgroup taxonomy table (2-character codes).
    pub subgroups: Utf8PathBuf,

    /// Directory receiving `<family>_preset.xml`.
    pub out_dir: Utf8PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            schema_dir: Utf8PathBuf::from("schemas"),
            groups: Utf8PathBuf::from("taxonomy/facc_groups.json"),
            subgroups: Utf8PathBuf::from("taxonomy/facc_subgroups.json"),
            out_dir: Utf8PathBuf::from("."),
        }
    }
}

/// Layout section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSection {
    pub subgroup_code_len: usize,
    pub fallback_subgroup: String,
    pub feature_code_columns: Vec<String>,
    pub default_key_attribute: String,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            subgroup_code_len: 2,
            fallback_subgroup: "ZD".to_string(),
            feature_code_columns: vec!["FCODE".to_string(), "F_CODE".to_string()],
            default_key_attribute: "F_CODE".to_string(),
        }
    }
}

/// Discover the presetforge.toml config file.
///
/// Returns `None` if `dir` has no config file.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a presetforge.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<PresetforgeConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
///
/// An explicit `[key_attributes]` table replaces the built-in overrides.
pub fn parse_config(contents: &str) -> anyhow::Result<PresetforgeConfig> {
    let config: PresetforgeConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<PresetforgeConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(PresetforgeConfig::default()),
    }
}

/// MGCP keys its feature codes as `FCODE`; everything else uses the layout default.
pub fn default_key_attributes() -> BTreeMap<String, String> {
    BTreeMap::from([("MGCP".to_string(), "FCODE".to_string())])
}
