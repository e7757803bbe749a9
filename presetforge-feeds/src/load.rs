use crate::error::FeedError;
use camino::Utf8Path;
use fs_err as fs;
use serde::de::DeserializeOwned;
use tracing::debug;

pub(crate) fn load_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, FeedError> {
    if !path.exists() {
        return Err(FeedError::Missing {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path, "reading json input");
    let contents = fs::read_to_string(path).map_err(|e| FeedError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&contents).map_err(|e| FeedError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
