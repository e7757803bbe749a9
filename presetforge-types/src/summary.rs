use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Counts describing one generated family document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub family: String,
    pub entries: u64,
    pub items: u64,
    /// Items that landed in the fallback subgroup.
    pub fallback_items: u64,
    pub groups: u64,
    pub subgroups: u64,
    pub list_fragments: u64,
    pub combo_fragments: u64,
    pub text_fragments: u64,
    pub ambiguous_fcodes: Vec<String>,
    /// Where the rendered document was written; unset until it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<Utf8PathBuf>,
}
