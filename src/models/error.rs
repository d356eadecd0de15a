//! Error type shared by every hex-accepting color operation.

use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input did not match the expected hex color syntax.
    #[error("Invalid color format: '{0}'. Expected #RRGGBB")]
    InvalidColorFormat(String),
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColorFormat(input.to_string())
    }
}
