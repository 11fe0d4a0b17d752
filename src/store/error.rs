use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the catalog store and its persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file exists but could not be decoded. Fatal at startup;
    /// there is no partial-recovery policy.
    #[error("catalog file `{file}` is not valid: {source}")]
    Malformed {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory catalog could not be serialized for the rewrite.
    #[error("failed to encode catalog: {0}")]
    Encode(serde_json::Error),

    /// A structural mutation named a record that does not exist.
    #[error("record index {0} is out of range")]
    OutOfRange(usize),
}
