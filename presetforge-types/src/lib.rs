//! Shared DTOs (schemas-as-code) for the presetforge workspace.
//!
//! # Design constraints
//! - Input types mirror the schema feeds field-for-field and tolerate extra fields.
//! - Output types describe the logical preset tree; XML mechanics live in `presetforge-render`.

pub mod batch;
pub mod fragment;
pub mod preset;
pub mod scalar;
pub mod schema;
pub mod summary;
pub mod taxonomy;

/// Well-known names in the JOSM tagging-preset dialect.
pub mod josm {
    pub const PRESET_NAMESPACE: &str = "http://josm.openstreetmap.de/tagging-preset-1.0";
    pub const AREA_MARKER_KEY: &str = "OSMTAGS";
    pub const MATCH_NONE: &str = "none";
}
