//! Input boundary for presetforge.
//!
//! Everything that reads from disk lives here: schema feeds (behind the [`SchemaSource`] port),
//! the static taxonomy tables, and the batch descriptor. Loaders are strict about JSON syntax and
//! the fields they need but ignore extra fields, so feeds exported with more metadata still load.

mod batch;
mod error;
mod load;
mod schema;
mod taxonomy;

pub use batch::{DEFAULT_FAMILIES, DefaultFamily, default_batch, load_batch_descriptor};
pub use error::FeedError;
pub use schema::{JsonFileSchema, SchemaSource, StaticSchema};
pub use taxonomy::load_taxonomy_table;
