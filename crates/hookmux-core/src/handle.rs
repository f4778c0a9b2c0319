//! Bound participant handles.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bytes::Bytes;
use tracing::trace;

use hookmux_protocols::error::DispatchError;
use hookmux_protocols::factory::{ArtifactFactory, FactoryTarget};
use hookmux_protocols::request::MakeRequest;
use hookmux_protocols::token::TransformerToken;

/// One participant's generation target together with the dispatcher
/// bound to it at registration time.
///
/// Handles are immutable after construction; the registry replaces
/// whole handles instead of mutating them, so concurrent reads need no
/// synchronization. Two handles are interchangeable when both their
/// target and their dispatcher are the same object.
#[derive(Clone)]
pub struct FactoryHandle {
    target: Arc<dyn FactoryTarget>,
    dispatch: Arc<dyn ArtifactFactory>,
}

impl FactoryHandle {
    /// Probe `target` for its `make` dispatcher and bind it.
    ///
    /// Returns `None` when the target exposes no dispatcher; the probe
    /// runs once here, never again at dispatch time.
    pub fn bind(target: Arc<dyn FactoryTarget>) -> Option<Self> {
        let dispatch = target.clone().as_factory()?;
        Some(Self { target, dispatch })
    }

    /// Invoke the bound dispatcher with `request` and the full peer
    /// set.
    ///
    /// An error value from the dispatcher is wrapped into
    /// [`DispatchError::InvocationFailed`] with the cause attached; a
    /// panic unwinds to the caller untouched.
    pub fn invoke(
        &self,
        request: &MakeRequest,
        peers: &[TransformerToken],
    ) -> Result<Bytes, DispatchError> {
        trace!(
            invoked_name = %request.invoked_name,
            peer_count = peers.len(),
            "invoking bound dispatcher"
        );
        self.dispatch
            .make(request, peers)
            .map_err(DispatchError::InvocationFailed)
    }

    fn target_ptr(&self) -> *const () {
        Arc::as_ptr(&self.target) as *const ()
    }

    fn dispatch_ptr(&self) -> *const () {
        Arc::as_ptr(&self.dispatch) as *const ()
    }
}

impl PartialEq for FactoryHandle {
    fn eq(&self, other: &Self) -> bool {
        self.target_ptr() == other.target_ptr() && self.dispatch_ptr() == other.dispatch_ptr()
    }
}

impl Eq for FactoryHandle {}

impl Hash for FactoryHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target_ptr().hash(state);
        self.dispatch_ptr().hash(state);
    }
}

impl fmt::Debug for FactoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryHandle")
            .field("target", &self.target_ptr())
            .field("dispatch", &self.dispatch_ptr())
            .finish()
    }
}
