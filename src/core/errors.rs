//! Errors raised while producing an assistant reply.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// The inference backend could not be contacted at all.
    #[error("inference backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend answered, but reported a failure or sent no usable reply.
    #[error("inference backend error: {0}")]
    BackendError(String),
}
