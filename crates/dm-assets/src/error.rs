use std::io;

use thiserror::Error;

/// Errors surfaced while loading or parsing option set assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read option set file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse option set: {0}")]
    Parse(#[from] serde_yaml::Error),
}
