//! De-duplicated, content-addressed definitions ("chunks").

use crate::schema::Enumeration;
use serde::{Deserialize, Serialize};

/// Sorted enumeration list shared by every combo that offers the same values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFragment {
    pub key: String,
    pub entries: Vec<Enumeration>,
}

/// Metadata of an enumeration column, pointing at its list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboFragment {
    pub key: String,
    pub name: String,
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub values_searchable: bool,
    pub list_key: String,
}

/// Metadata of a scalar-text column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFragment {
    pub key: String,
    pub name: String,
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

/// All fragments of one family, each category in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentSet {
    pub lists: Vec<ListFragment>,
    pub combos: Vec<ComboFragment>,
    pub texts: Vec<TextFragment>,
}

impl FragmentSet {
    pub fn len(&self) -> usize {
        self.lists.len() + self.combos.len() + self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The fragment a column resolved to, remembered per schema entry in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentRef {
    pub column: String,
    pub key: String,
}
