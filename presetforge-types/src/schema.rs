use crate::scalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spatial representation a feature code is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    Line,
    Area,
}

impl GeometryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::Line => "Line",
            GeometryKind::Area => "Area",
        }
    }

    /// JOSM element types an item of this geometry applies to.
    pub fn type_hint(self) -> &'static str {
        match self {
            GeometryKind::Point => "node",
            GeometryKind::Line => "way,closedway",
            GeometryKind::Area => "closedway,multipolygon",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column kind.
///
/// Feeds spell the kind as a free-form type name. Only `enumeration` is special; every other type
/// name (`String`, `Integer`, `Real`, ...) is entered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ColumnKind {
    Enumeration,
    Text,
}

impl From<String> for ColumnKind {
    fn from(s: String) -> Self {
        if s == "enumeration" {
            ColumnKind::Enumeration
        } else {
            ColumnKind::Text
        }
    }
}

impl From<ColumnKind> for &'static str {
    fn from(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Enumeration => "enumeration",
            ColumnKind::Text => "text",
        }
    }
}

/// One allowed value of an enumeration column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enumeration {
    #[serde(deserialize_with = "scalar::string")]
    pub name: String,
    #[serde(deserialize_with = "scalar::string")]
    pub value: String,
}

impl Enumeration {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Label shown in the editor drop-down; the name is omitted when it repeats the value.
    pub fn display_value(&self) -> String {
        if self.value == self.name {
            self.value.clone()
        } else {
            format!("{} - {}", self.value, self.name)
        }
    }
}

/// One attribute definition of a schema entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,

    #[serde(default)]
    pub desc: String,

    #[serde(rename = "type")]
    pub kind: ColumnKind,

    #[serde(
        rename = "defValue",
        default,
        deserialize_with = "scalar::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<String>,

    /// Max length, scalar-text columns only.
    #[serde(
        default,
        deserialize_with = "scalar::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub length: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enumerations: Vec<Enumeration>,
}

impl Column {
    pub fn text(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            kind: ColumnKind::Text,
            default: None,
            length: None,
            enumerations: Vec::new(),
        }
    }

    pub fn enumeration(
        name: impl Into<String>,
        desc: impl Into<String>,
        enumerations: Vec<Enumeration>,
    ) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            kind: ColumnKind::Enumeration,
            default: None,
            length: None,
            enumerations,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn is_enumeration(&self) -> bool {
        matches!(self.kind, ColumnKind::Enumeration)
    }
}

/// One feature definition from a schema feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub fcode: String,
    pub geom: GeometryKind,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl SchemaEntry {
    pub fn new(
        fcode: impl Into<String>,
        geom: GeometryKind,
        desc: impl Into<String>,
        columns: Vec<Column>,
    ) -> Self {
        Self {
            fcode: fcode.into(),
            geom,
            desc: desc.into(),
            columns,
        }
    }

    /// Item name in the preset tree; also the sort and uniqueness key for placement.
    pub fn display_key(&self) -> String {
        format!("{} - {}", self.desc, self.geom)
    }
}
