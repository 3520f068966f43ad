// docdist: document distance as the angle between word-frequency vectors.
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: text -> frequency table -> angle -> report.

pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod text;
pub mod vector;

pub use error::DistanceError;
