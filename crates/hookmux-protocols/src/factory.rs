//! Participant factory contracts.

use std::sync::Arc;

use bytes::Bytes;

use crate::error::BoxError;
use crate::request::MakeRequest;
use crate::token::TransformerToken;

/// Handler contract every participant factory must expose.
///
/// `make` receives the bundled runtime parameters plus the full set of
/// currently registered tokens - the participant's own token included -
/// so a primary handler can coordinate with or defer to its peers.
/// Error values are translated by the caller; panics unwind to the
/// runtime untouched.
pub trait ArtifactFactory: Send + Sync + 'static {
    /// Generate the artifact for one closure instantiation request.
    fn make(&self, request: &MakeRequest, peers: &[TransformerToken]) -> Result<Bytes, BoxError>;
}

/// An opaque object offered at registration.
///
/// The registry probes the target exactly once for its generation
/// capability and refuses registration when `as_factory` returns
/// `None`. The blanket impl makes every [`ArtifactFactory`] a valid
/// target; objects without the capability implement this trait
/// directly.
pub trait FactoryTarget: Send + Sync + 'static {
    /// Expose the bound `make` dispatcher, if this target carries one.
    fn as_factory(self: Arc<Self>) -> Option<Arc<dyn ArtifactFactory>>;
}

impl<T: ArtifactFactory> FactoryTarget for T {
    fn as_factory(self: Arc<Self>) -> Option<Arc<dyn ArtifactFactory>> {
        Some(self)
    }
}
