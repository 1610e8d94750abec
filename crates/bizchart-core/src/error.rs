// File: crates/bizchart-core/src/error.rs
// Summary: Error type for the few operations that can reject caller input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// An out-of-range or unrecognized value reached a typed selection
    /// (line cap, dash style, chart type, color string).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChartError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        ChartError::InvalidArgument(what.into())
    }
}
