// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SizerError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SizerError {
    /// The overlay could not be attached to the target's surface.
    #[error("invalid host: {reason}")]
    InvalidHost { reason: String },

    #[error("invalid thickness \"{input}\": {reason}")]
    InvalidThickness { input: String, reason: String },

    #[error("unknown handle role \"{0}\"")]
    UnknownRole(String),
}

impl SizerError {
    pub fn invalid_host(reason: impl Into<String>) -> Self {
        Self::InvalidHost {
            reason: reason.into(),
        }
    }
}
