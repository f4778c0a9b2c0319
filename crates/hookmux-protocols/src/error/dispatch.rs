//! Dispatch errors.

use thiserror::Error;

use super::BoxError;

/// Errors surfaced by the runtime-facing dispatch entry point.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Dispatch ran against an empty registry: there is no participant
    /// to delegate artifact generation to.
    #[error("no primary handler registered for artifact generation")]
    NoPrimaryHandler,

    /// The bound dispatcher failed with an error value. Panics inside
    /// a dispatcher are never translated into this variant; they
    /// unwind to the runtime untouched.
    #[error("artifact generation failed in the primary handler")]
    InvocationFailed(#[source] BoxError),
}
