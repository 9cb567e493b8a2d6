//! Error kinds raised by the recommendation core.
//!
//! Validation problems are not errors: they are reported as data through
//! [`crate::validate::ValidationReport`]. Only lookups that cannot succeed and
//! filesystem failures surface here.

use std::path::PathBuf;
use thiserror::Error;

/// The core error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A plan was requested for a variant id the catalog does not contain.
    #[error("selected variant not found: {variant_id}")]
    NotFound {
        /// The identifier that failed to resolve.
        variant_id: String,
    },

    /// Probing the data directory failed.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
