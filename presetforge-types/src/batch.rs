use camino::Utf8PathBuf;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One schema family in a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySpec {
    /// Path to the family's schema feed (JSON array of schema entries).
    pub schema: Utf8PathBuf,
    /// Display name of the top-level preset group.
    pub name: String,
    pub icon: String,
}

/// Family identifier -> spec, processed in declaration order.
pub type BatchDescriptor = IndexMap<String, FamilySpec>;
