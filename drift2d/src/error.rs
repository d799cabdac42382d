use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading Drift2D data files.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid camera config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sprite sheet grid needs a non-zero step, got frame {frame_width}x{frame_height} with padding {padding_width}x{padding_height}")]
    InvalidGrid {
        frame_width: u32,
        frame_height: u32,
        padding_width: u32,
        padding_height: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn read_to_string(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
