use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("input not found: {path}")]
    Missing { path: Utf8PathBuf },

    #[error("io error reading {path}: {message}")]
    Io { path: Utf8PathBuf, message: String },

    #[error("json parse error in {path}: {message}")]
    Json { path: Utf8PathBuf, message: String },
}

impl FeedError {
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            FeedError::Missing { path } | FeedError::Io { path, .. } | FeedError::Json { path, .. } => {
                path
            }
        }
    }
}
