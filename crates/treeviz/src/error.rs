//! Engine-boundary errors.

use thiserror::Error;

/// The only failure the engine surfaces.  Everything else, like deleting
/// an absent key or extracting from an empty heap, is a defined no-op or
/// an absent result, never an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The key is NaN or infinite.  Rejected before any mutation; the
    /// structure is untouched when this comes back.
    #[error("INVALID_KEY")]
    InvalidKey,
}

/// Fail-fast precondition shared by every keyed operation.
pub(crate) fn ensure_finite(key: f64) -> Result<(), EngineError> {
    if key.is_finite() {
        Ok(())
    } else {
        Err(EngineError::InvalidKey)
    }
}
