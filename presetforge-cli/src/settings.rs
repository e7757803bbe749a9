//! Clap-free settings for the batch runner.

use crate::config::PresetforgeConfig;
use camino::Utf8PathBuf;
use presetforge_domain::LayoutConfig;
use std::collections::BTreeMap;

/// Everything one run needs, resolved from config and command line.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Batch descriptor path; `None` runs the default batch.
    pub batch: Option<Utf8PathBuf>,
    pub schema_dir: Utf8PathBuf,
    pub groups: Utf8PathBuf,
    pub subgroups: Utf8PathBuf,
    pub out_dir: Utf8PathBuf,
    pub layout: LayoutConfig,
    pub key_attributes: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(PresetforgeConfig::default(), None)
    }
}

impl Settings {
    pub fn from_config(config: PresetforgeConfig, batch: Option<Utf8PathBuf>) -> Self {
        let PresetforgeConfig {
            paths,
            layout,
            key_attributes,
        } = config;

        Self {
            batch,
            schema_dir: paths.schema_dir,
            groups: paths.groups,
            subgroups: paths.subgroups,
            out_dir: paths.out_dir,
            layout: LayoutConfig {
                subgroup_code_len: layout.subgroup_code_len,
                fallback_subgroup: layout.fallback_subgroup,
                feature_code_columns: layout.feature_code_columns,
                key_attribute: layout.default_key_attribute,
            },
            key_attributes,
        }
    }

    /// Layout for `family`, with its key attribute override applied.
    pub fn layout_for(&self, family: &str) -> LayoutConfig {
        match self.key_attributes.get(family) {
            Some(attr) => self.layout.clone().with_key_attribute(attr.as_str()),
            None => self.layout.clone(),
        }
    }
}
