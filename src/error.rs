use std::path::PathBuf;

use thiserror::Error;

use crate::model::DistributionId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown distribution id {0}")]
    UnknownIdentity(DistributionId),

    #[error("cannot open archive {path}: {reason}")]
    ArchiveOpenFailed { path: PathBuf, reason: String },

    #[error("cannot add {right} to {left}: incompatible binning")]
    IncompatibleBinning { left: String, right: String },

    #[error("invalid histogram {name}: {reason}")]
    InvalidHistogram { name: String, reason: String },
}

impl Error {
    #[must_use]
    pub fn archive_open(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ArchiveOpenFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn invalid_histogram(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHistogram {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
