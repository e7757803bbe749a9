use presetforge_hash::HashError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Two different fragment contents reduced to the same identifier key.
    #[error("fragment key collision on {key}")]
    KeyCollision { key: String },

    #[error("feature code {fcode} has no subgroup and fallback subgroup {fallback} is not in the taxonomy")]
    FallbackMissing { fcode: String, fallback: String },

    /// Placement was handed fragment sequences that are not parallel to its entries.
    #[error("{sequences} fragment sequences for {entries} schema entries")]
    SequenceMismatch { entries: usize, sequences: usize },

    #[error(transparent)]
    Hash(#[from] HashError),
}
