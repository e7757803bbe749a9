use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use presetforge_cli::{FsWritePort, Settings, config, run_with};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "presetforge",
    version,
    about = "Build de-duplicated JOSM tagging presets from feature-schema catalogs."
)]
struct Cli {
    /// Batch descriptor JSON (family -> {schema, name, icon}). Omit to run the default batch.
    batch: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let file_config =
        config::load_or_default(Utf8Path::new(".")).context("load presetforge.toml config")?;
    let settings = Settings::from_config(file_config, cli.batch);
    debug!(
        "settings: batch={:?}, out_dir={}, layout={:?}",
        settings.batch, settings.out_dir, settings.layout
    );

    run_with(&settings, &FsWritePort, |outcome| {
        println!("{} file has been saved.", outcome.path);
    })?;
    Ok(())
}
