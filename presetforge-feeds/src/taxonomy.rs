use crate::error::FeedError;
use crate::load::load_json;
use camino::Utf8Path;
use presetforge_types::taxonomy::TaxonomyTable;
use tracing::debug;

/// Load a group or subgroup table (`code -> { title, icon }`), keeping declaration order.
pub fn load_taxonomy_table(path: &Utf8Path) -> Result<TaxonomyTable, FeedError> {
    let table: TaxonomyTable = load_json(path)?;
    debug!(path = %path, codes = table.len(), "loaded taxonomy table");
    Ok(table)
}
