use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read review dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse review dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Ratings outside 1..=5 would silently fall out of every star bucket, so
    /// a dataset carrying one is rejected at load time.
    #[error("review {id} has rating {rating}, expected 1-5")]
    InvalidRating { id: String, rating: u8 },
}
