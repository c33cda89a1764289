use thiserror::Error;

use crate::UID;

/// Errors produced by the lighting calculation and the calculation store.
#[derive(Debug, Error)]
pub enum LightingError {
    /// An input value is outside its valid domain.
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// The fixture count resolved to zero.
    #[error("degenerate layout: fixture count resolved to 0")]
    DegenerateLayout,

    /// The fixture count exceeds the configured upper bound.
    #[error("fixture count {count} exceeds the configured maximum of {max}")]
    TooManyFixtures { count: usize, max: usize },

    #[error("calculation not found: {0}")]
    NotFound(UID),
}

impl LightingError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true for input validation failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::DegenerateLayout | Self::TooManyFixtures { .. }
        )
    }
}

pub type Result<T, E = LightingError> = std::result::Result<T, E>;
