use crate::assemble::assemble;
use crate::error::GenerateError;
use crate::fragments::FragmentIndex;
use crate::geometry::ambiguous_feature_codes;
use crate::layout::LayoutConfig;
use crate::placer::place;
use crate::prune::prune;
use crate::taxonomy::{NodeLevel, TaxonomyTree};
use presetforge_types::preset::PresetDocument;
use presetforge_types::schema::SchemaEntry;
use presetforge_types::summary::GenerationSummary;
use presetforge_types::taxonomy::TaxonomyTable;
use tracing::debug;

/// Identity and conventions of the family being generated.
#[derive(Debug, Clone)]
pub struct GenerateContext {
    pub family: String,
    /// Display name of the top-level group.
    pub name: String,
    pub icon: String,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone)]
pub struct Generated {
    pub document: PresetDocument,
    pub summary: GenerationSummary,
}

/// Runs the whole transform for one family at a time.
///
/// Holds only the read-only taxonomy tables; every call builds fresh fragment and tree
/// accumulators, so families never share mutable state.
pub struct Generator<'t> {
    groups: &'t TaxonomyTable,
    subgroups: &'t TaxonomyTable,
}

impl<'t> Generator<'t> {
    pub fn new(groups: &'t TaxonomyTable, subgroups: &'t TaxonomyTable) -> Self {
        Self { groups, subgroups }
    }

    pub fn generate(
        &self,
        ctx: &GenerateContext,
        entries: &[SchemaEntry],
    ) -> Result<Generated, GenerateError> {
        debug!(family = %ctx.family, entries = entries.len(), "generating preset");

        let ingested = FragmentIndex::ingest(entries)?;
        let ambiguous = ambiguous_feature_codes(entries);

        let mut tree = TaxonomyTree::build(self.groups, self.subgroups);
        let placement = place(
            entries,
            &ingested.sequences,
            &ambiguous,
            &mut tree,
            &ctx.layout,
        )?;
        prune(&mut tree, &placement.used);

        let summary = GenerationSummary {
            family: ctx.family.clone(),
            entries: entries.len() as u64,
            items: placement.items as u64,
            fallback_items: placement.fallbacks as u64,
            groups: tree.count(NodeLevel::Group) as u64,
            subgroups: tree.count(NodeLevel::Subgroup) as u64,
            list_fragments: ingested.fragments.lists.len() as u64,
            combo_fragments: ingested.fragments.combos.len() as u64,
            text_fragments: ingested.fragments.texts.len() as u64,
            ambiguous_fcodes: ambiguous.into_iter().collect(),
            output_path: None,
        };

        let document = assemble(&ctx.family, &ctx.name, &ctx.icon, ingested.fragments, &tree);
        Ok(Generated { document, summary })
    }
}
