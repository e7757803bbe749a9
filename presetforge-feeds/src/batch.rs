use crate::error::FeedError;
use crate::load::load_json;
use camino::Utf8Path;
use presetforge_types::batch::{BatchDescriptor, FamilySpec};
use tracing::debug;

/// A family processed when no batch descriptor is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFamily {
    pub id: &'static str,
    pub schema_file: &'static str,
    pub icon: &'static str,
}

const NGA_ICON: &str = "presets/misc/nga_logo.png";

pub const DEFAULT_FAMILIES: &[DefaultFamily] = &[
    DefaultFamily {
        id: "TDSv40",
        schema_file: "tds40_full_schema.json",
        icon: NGA_ICON,
    },
    DefaultFamily {
        id: "TDSv61",
        schema_file: "tds61_full_schema.json",
        icon: NGA_ICON,
    },
    DefaultFamily {
        id: "TDSv70",
        schema_file: "tds70_full_schema.json",
        icon: NGA_ICON,
    },
    DefaultFamily {
        id: "TDSv71",
        schema_file: "tds71_full_schema.json",
        icon: NGA_ICON,
    },
    DefaultFamily {
        id: "MGCP",
        schema_file: "mgcp_schema.json",
        icon: "presets/misc/MGCP_logo.png",
    },
    DefaultFamily {
        id: "GGDMv30",
        schema_file: "ggdm30_full_schema.json",
        icon: "presets/misc/usace_logo.png",
    },
];

/// The built-in batch: every default family, feeds resolved under `schema_dir`.
pub fn default_batch(schema_dir: &Utf8Path) -> BatchDescriptor {
    DEFAULT_FAMILIES
        .iter()
        .map(|f| {
            (
                f.id.to_string(),
                FamilySpec {
                    schema: schema_dir.join(f.schema_file),
                    name: f.id.to_string(),
                    icon: f.icon.to_string(),
                },
            )
        })
        .collect()
}

pub fn load_batch_descriptor(path: &Utf8Path) -> Result<BatchDescriptor, FeedError> {
    let batch: BatchDescriptor = load_json(path)?;
    debug!(path = %path, families = batch.len(), "loaded batch descriptor");
    Ok(batch)
}
