//! Logical preset document: chunks followed by the group -> subgroup -> item hierarchy.

use crate::fragment::{ComboFragment, ListFragment, TextFragment};
use crate::schema::GeometryKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDocument {
    pub family: String,
    pub chunks: Vec<Chunk>,
    pub root: SchemaGroup,
}

impl PresetDocument {
    /// Every item in document order.
    pub fn items(&self) -> impl Iterator<Item = &ItemNode> {
        self.root
            .groups
            .iter()
            .flat_map(|g| g.subgroups.iter())
            .flat_map(|s| s.items.iter())
    }

    pub fn chunk(&self, key: &str) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chunk {
    List(ListFragment),
    Combo(ComboFragment),
    Text(TextFragment),
}

impl Chunk {
    pub fn key(&self) -> &str {
        match self {
            Chunk::List(l) => &l.key,
            Chunk::Combo(c) => &c.key,
            Chunk::Text(t) => &t.key,
        }
    }
}

/// Top-level group carrying the schema family's display name and icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaGroup {
    pub name: String,
    pub icon: String,
    pub groups: Vec<GroupNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
    pub code: String,
    pub name: String,
    pub icon: String,
    pub subgroups: Vec<SubgroupNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgroupNode {
    pub code: String,
    pub name: String,
    pub icon: String,
    pub items: Vec<ItemNode>,
}

/// One placed schema entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemNode {
    /// Display key, `"<desc> - <geom>"`.
    pub name: String,
    pub geometry: GeometryKind,
    /// Attribute name the feature code is written under (`F_CODE`, or `FCODE` for some families).
    pub key_attribute: String,
    pub fcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_marker: Option<AreaMarker>,
    /// Fragment keys in schema column order.
    pub references: Vec<String>,
}

/// Explicit area indicator for feature codes valid as both Line and Area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaMarker {
    pub area: bool,
}

impl AreaMarker {
    /// Tag payload carried by the marker key.
    pub fn tag_value(self) -> &'static str {
        if self.area {
            r#"{"area":"yes"}"#
        } else {
            r#"{"area":"no"}"#
        }
    }
}
