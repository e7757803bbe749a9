use presetforge_types::preset::AreaMarker;
use presetforge_types::schema::{GeometryKind, SchemaEntry};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Feature codes declared under both Line and Area geometry.
///
/// A closed way is structurally either, so items of these codes carry an explicit area marker.
/// Point alongside either kind is not ambiguous.
pub fn ambiguous_feature_codes(entries: &[SchemaEntry]) -> BTreeSet<String> {
    let mut geoms: BTreeMap<&str, BTreeSet<GeometryKind>> = BTreeMap::new();
    for e in entries {
        geoms.entry(e.fcode.as_str()).or_default().insert(e.geom);
    }

    let ambiguous: BTreeSet<String> = geoms
        .into_iter()
        .filter(|(_, kinds)| {
            kinds.contains(&GeometryKind::Area) && kinds.contains(&GeometryKind::Line)
        })
        .map(|(code, _)| code.to_string())
        .collect();

    debug!(count = ambiguous.len(), "ambiguous feature codes");
    ambiguous
}

/// Marker for `entry`, if its feature code is ambiguous. Only Area entries get `area = true`.
pub fn area_marker(entry: &SchemaEntry, ambiguous: &BTreeSet<String>) -> Option<AreaMarker> {
    ambiguous.contains(&entry.fcode).then(|| AreaMarker {
        area: entry.geom == GeometryKind::Area,
    })
}
