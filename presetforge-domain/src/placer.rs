use crate::error::GenerateError;
use crate::geometry::area_marker;
use crate::layout::LayoutConfig;
use crate::taxonomy::TaxonomyTree;
use presetforge_types::fragment::FragmentRef;
use presetforge_types::preset::ItemNode;
use presetforge_types::schema::SchemaEntry;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// What placement did to the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    /// Subgroup and group codes that received at least one item.
    pub used: BTreeSet<String>,
    pub items: usize,
    /// Items placed in the fallback subgroup.
    pub fallbacks: usize,
}

/// Attach one item per unique display key under its subgroup.
///
/// Entries are visited in display-key order. When two entries share a display key the later one
/// in `entries` wins. `sequences` must be parallel to `entries`.
pub fn place(
    entries: &[SchemaEntry],
    sequences: &[Vec<FragmentRef>],
    ambiguous: &BTreeSet<String>,
    tree: &mut TaxonomyTree,
    layout: &LayoutConfig,
) -> Result<Placement, GenerateError> {
    if sequences.len() != entries.len() {
        return Err(GenerateError::SequenceMismatch {
            entries: entries.len(),
            sequences: sequences.len(),
        });
    }

    let mut by_key: BTreeMap<String, usize> = BTreeMap::new();
    for (i, entry) in entries.iter().enumerate() {
        by_key.insert(entry.display_key(), i);
    }

    let mut placement = Placement::default();
    for (name, i) in by_key {
        let entry = &entries[i];

        let mut code = layout.subgroup_code(&entry.fcode);
        if tree.subgroup_for(&code).is_none() {
            debug!(
                fcode = %entry.fcode,
                fallback = %layout.fallback_subgroup,
                "no subgroup for feature code"
            );
            code = layout.fallback_subgroup.clone();
            placement.fallbacks += 1;
        }
        let group_code = tree
            .subgroup_for(&code)
            .and_then(|s| s.parent.clone())
            .ok_or_else(|| GenerateError::FallbackMissing {
                fcode: entry.fcode.clone(),
                fallback: layout.fallback_subgroup.clone(),
            })?;

        let references = sequences[i]
            .iter()
            .filter(|r| !layout.is_feature_code_column(&r.column))
            .map(|r| r.key.clone())
            .collect();

        let item = ItemNode {
            name,
            geometry: entry.geom,
            key_attribute: layout.key_attribute.clone(),
            fcode: entry.fcode.clone(),
            area_marker: area_marker(entry, ambiguous),
            references,
        };

        tree.attach(&code, item);
        placement.items += 1;
        placement.used.insert(code);
        placement.used.insert(group_code);
    }

    debug!(
        items = placement.items,
        fallbacks = placement.fallbacks,
        used = placement.used.len(),
        "items placed"
    );
    Ok(placement)
}
