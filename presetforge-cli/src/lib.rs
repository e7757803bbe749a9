//! Library half of the `presetforge` binary: config, settings, I/O ports and the batch runner.

pub mod config;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use config::{PresetforgeConfig, load_or_default};
pub use pipeline::{FamilyOutcome, output_path, run, run_family, run_with};
pub use ports::{FsWritePort, WritePort};
pub use settings::Settings;
