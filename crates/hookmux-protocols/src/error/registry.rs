//! Registration and resolution errors.

use thiserror::Error;

use super::BoxError;

/// Errors surfaced on the registration/release path.
///
/// Only expected failures are represented here; an environment-level
/// fault (a panicking resolver) unwinds through the registry untouched.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The participant could not be registered. The cause is attached:
    /// a target without the required dispatcher, or a failed
    /// resolution of the canonical context.
    #[error("could not register transformer")]
    RegistrationFailed(#[source] BoxError),

    /// The canonical context was located but does not expose a hook
    /// registry at its well-known location, e.g. on a version mismatch
    /// between loaded images.
    #[error("hook registry not exposed by canonical context: {0}")]
    ResolutionFailed(String),
}

/// Cause recorded when a registration target does not expose the
/// required `make` dispatcher.
#[derive(Debug, Error)]
#[error("factory target does not expose a `make` dispatcher")]
pub struct MissingDispatcher;
