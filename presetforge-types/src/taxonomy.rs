use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of a static group or subgroup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub title: String,
    #[serde(default)]
    pub icon: String,
}

impl TaxonomyEntry {
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
        }
    }
}

/// Code -> entry, in declaration order (which is also the output order).
pub type TaxonomyTable = IndexMap<String, TaxonomyEntry>;
