//! Batch runner: load inputs, generate and render each family, write its preset file.
//!
//! All writes go through [`WritePort`]. Families run in batch order with fresh domain state
//! each; the first failure aborts the batch.

use crate::ports::WritePort;
use crate::settings::Settings;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use presetforge_domain::{GenerateContext, Generator};
use presetforge_feeds::{
    JsonFileSchema, SchemaSource, default_batch, load_batch_descriptor, load_taxonomy_table,
};
use presetforge_render::render_preset_xml;
use presetforge_types::batch::FamilySpec;
use presetforge_types::summary::GenerationSummary;
use tracing::{debug, info};

/// Result of one family's run.
#[derive(Debug, Clone)]
pub struct FamilyOutcome {
    pub summary: GenerationSummary,
    pub path: Utf8PathBuf,
}

/// `<out_dir>/<family>_preset.xml`
pub fn output_path(out_dir: &Utf8Path, family: &str) -> Utf8PathBuf {
    out_dir.join(format!("{family}_preset.xml"))
}

/// Run every family of the configured batch.
pub fn run(settings: &Settings, writer: &dyn WritePort) -> anyhow::Result<Vec<FamilyOutcome>> {
    run_with(settings, writer, |_| {})
}

/// Like [`run`], calling `on_written` as each family's file lands, before the next family starts.
pub fn run_with(
    settings: &Settings,
    writer: &dyn WritePort,
    mut on_written: impl FnMut(&FamilyOutcome),
) -> anyhow::Result<Vec<FamilyOutcome>> {
    let groups = load_taxonomy_table(&settings.groups).context("load group taxonomy")?;
    let subgroups = load_taxonomy_table(&settings.subgroups).context("load subgroup taxonomy")?;

    let batch = match &settings.batch {
        Some(path) => load_batch_descriptor(path).context("load batch descriptor")?,
        None => default_batch(&settings.schema_dir),
    };
    debug!(
        families = batch.len(),
        default = settings.batch.is_none(),
        "resolved batch"
    );

    writer.create_dir_all(&settings.out_dir)?;

    let generator = Generator::new(&groups, &subgroups);
    let mut outcomes = Vec::with_capacity(batch.len());
    for (family, spec) in &batch {
        let source = JsonFileSchema::new(spec.schema.clone());
        let outcome = run_family(family, spec, &source, &generator, settings, writer)
            .with_context(|| format!("generate {family}"))?;
        on_written(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Generate, render and write one family.
///
/// The document is fully rendered before anything is written.
pub fn run_family(
    family: &str,
    spec: &FamilySpec,
    source: &dyn SchemaSource,
    generator: &Generator<'_>,
    settings: &Settings,
    writer: &dyn WritePort,
) -> anyhow::Result<FamilyOutcome> {
    let entries = source.get_schema()?;

    let ctx = GenerateContext {
        family: family.to_string(),
        name: spec.name.clone(),
        icon: spec.icon.clone(),
        layout: settings.layout_for(family),
    };
    let generated = generator.generate(&ctx, &entries)?;
    let xml = render_preset_xml(&generated.document)?;

    let path = output_path(&settings.out_dir, family);
    writer.write_file(&path, xml.as_bytes())?;

    let summary = GenerationSummary {
        output_path: Some(path.clone()),
        ..generated.summary
    };
    info!(
        family,
        path = %path,
        items = summary.items,
        groups = summary.groups,
        subgroups = summary.subgroups,
        fragments = summary.list_fragments + summary.combo_fragments + summary.text_fragments,
        ambiguous = summary.ambiguous_fcodes.len(),
        "wrote preset"
    );
    Ok(FamilyOutcome { summary, path })
}
