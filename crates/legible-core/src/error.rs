//! Boundary validation errors.
//!
//! The numeric operations never fail. These errors are only produced by the
//! explicit `validate` methods that callers run on untrusted input (palette
//! files, deserialized configs) before handing values to the engine.

/// Errors raised when validating caller-supplied values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteComponent { field: &'static str, value: f64 },

    #[error("alpha must be within 0..=1, got {0}")]
    AlphaOutOfRange(f64),
}

/// Result alias for validation.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteComponent { field, value })
    }
}
