// Error taxonomy for the library.
//
// Usage errors never reach this type: clap rejects bad arguments before
// any processing starts. Everything here is fatal to the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistanceError {
    /// File missing, unreadable, or not valid UTF-8.
    #[error("error opening or reading input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A document produced zero tokens, so its vector has no direction.
    #[error("document {} contains no words; the angle is undefined", .path.display())]
    EmptyDocument { path: PathBuf },

    /// One of the tables handed to the similarity engine was empty.
    #[error("cannot compute an angle against a zero-magnitude vector")]
    ZeroMagnitude,

    /// A count product or sum exceeded u64.
    #[error("word counts too large: inner product overflows u64")]
    Overflow,

    /// The blocking task that builds a table panicked or was cancelled.
    #[error("document processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
