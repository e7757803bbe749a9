//! Domain logic: turn one family's schema entries plus the static taxonomy into a preset document.
//!
//! Stages run strictly forward, each with its own accumulator:
//! fragments + geometry ambiguity -> placement into the taxonomy -> pruning -> assembly.
//! Nothing here performs I/O; loading lives in `presetforge-feeds`, XML in `presetforge-render`.

mod assemble;
mod error;
mod fragments;
mod generator;
mod geometry;
mod layout;
mod placer;
mod prune;
mod taxonomy;

pub use assemble::assemble;
pub use error::GenerateError;
pub use fragments::{FragmentIndex, Ingested, sort_enumerations};
pub use generator::{GenerateContext, Generated, Generator};
pub use geometry::{ambiguous_feature_codes, area_marker};
pub use layout::LayoutConfig;
pub use placer::{Placement, place};
pub use prune::{PruneStats, prune};
pub use taxonomy::{NodeLevel, TaxonomyNode, TaxonomyTree};
