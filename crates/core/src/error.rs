use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ChunkError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChunkError::Io {
            path: path.into(),
            source,
        }
    }
}
