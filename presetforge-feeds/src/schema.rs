use crate::error::FeedError;
use crate::load::load_json;
use camino::{Utf8Path, Utf8PathBuf};
use presetforge_types::schema::SchemaEntry;
use tracing::debug;

/// Source of one family's schema entries.
pub trait SchemaSource {
    fn get_schema(&self) -> Result<Vec<SchemaEntry>, FeedError>;
}

/// Schema feed stored as a JSON array of entries.
#[derive(Debug, Clone)]
pub struct JsonFileSchema {
    path: Utf8PathBuf,
}

impl JsonFileSchema {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl SchemaSource for JsonFileSchema {
    fn get_schema(&self) -> Result<Vec<SchemaEntry>, FeedError> {
        let entries: Vec<SchemaEntry> = load_json(&self.path)?;
        debug!(path = %self.path, entries = entries.len(), "loaded schema feed");
        Ok(entries)
    }
}

/// In-memory schema, for embedders that already hold the entries.
#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    entries: Vec<SchemaEntry>,
}

impl StaticSchema {
    pub fn new(entries: Vec<SchemaEntry>) -> Self {
        Self { entries }
    }
}

impl SchemaSource for StaticSchema {
    fn get_schema(&self) -> Result<Vec<SchemaEntry>, FeedError> {
        Ok(self.entries.clone())
    }
}
