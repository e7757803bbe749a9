use crate::taxonomy::TaxonomyTree;
use presetforge_types::fragment::FragmentSet;
use presetforge_types::preset::{Chunk, GroupNode, PresetDocument, SchemaGroup, SubgroupNode};

/// Build the output tree: list chunks, then combo chunks, then text chunks, followed by the
/// (already pruned) hierarchy under a top-level group named after the schema.
pub fn assemble(
    family: &str,
    name: &str,
    icon: &str,
    fragments: FragmentSet,
    tree: &TaxonomyTree,
) -> PresetDocument {
    let FragmentSet {
        lists,
        combos,
        texts,
    } = fragments;

    let chunks = lists
        .into_iter()
        .map(Chunk::List)
        .chain(combos.into_iter().map(Chunk::Combo))
        .chain(texts.into_iter().map(Chunk::Text))
        .collect();

    let groups = tree
        .groups()
        .map(|g| GroupNode {
            code: g.code.clone(),
            name: g.title.clone(),
            icon: g.icon.clone(),
            subgroups: tree
                .subgroups_of(g)
                .map(|s| SubgroupNode {
                    code: s.code.clone(),
                    name: s.title.clone(),
                    icon: s.icon.clone(),
                    items: s.items.clone(),
                })
                .collect(),
        })
        .collect();

    PresetDocument {
        family: family.to_string(),
        chunks,
        root: SchemaGroup {
            name: name.to_string(),
            icon: icon.to_string(),
            groups,
        },
    }
}
