//! Error taxonomy for the catalog pipeline.
//!
//! A field missing from a descriptor is not an error; it falls back to a
//! placeholder in [`crate::extract`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The directory holding the descriptors could not be listed.
    #[error("failed to read directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A matched descriptor could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize catalog as {format}: {message}")]
    Serialize { format: &'static str, message: String },

    #[error("unknown format: {0}. Use yaml or json")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
