//! Runtime-facing dispatch entry point.

use bytes::Bytes;
use tracing::debug;

use hookmux_protocols::error::DispatchError;
use hookmux_protocols::request::{HostValue, MakeRequest};
use hookmux_protocols::token::TransformerToken;

use crate::registry::HookRegistry;

/// Produce the artifact for one closure instantiation.
///
/// This is the function the patched runtime calls by fixed name and
/// signature whenever it generates a closure; the nine parameters
/// arrive in the runtime's own order and are bundled into a
/// [`MakeRequest`] here. The first-registered transformer's handle is
/// the primary and performs the actual generation; every currently
/// registered token, the primary's own included, is passed along as
/// the peer set so the primary can compose with the others.
///
/// The registry is read as a point-in-time snapshot without taking the
/// mutation lock. A registration or release racing this call is
/// observed in either order; the primary and the peer set always come
/// from the same snapshot.
#[allow(clippy::too_many_arguments)]
pub fn make(
    caller: HostValue,
    invoked_name: String,
    invoked_type: HostValue,
    sam_type: HostValue,
    impl_method: HostValue,
    instantiated_type: HostValue,
    serializable: bool,
    marker_interfaces: Vec<HostValue>,
    additional_bridges: Vec<HostValue>,
) -> Result<Bytes, DispatchError> {
    let request = MakeRequest {
        caller,
        invoked_name,
        invoked_type,
        sam_type,
        impl_method,
        instantiated_type,
        serializable,
        marker_interfaces,
        additional_bridges,
    };
    make_with(HookRegistry::global(), &request)
}

/// Dispatch `request` against an explicit registry instance.
pub(crate) fn make_with(
    registry: &HookRegistry,
    request: &MakeRequest,
) -> Result<Bytes, DispatchError> {
    let snapshot = registry.snapshot();
    let Some((_, primary)) = snapshot.first() else {
        return Err(DispatchError::NoPrimaryHandler);
    };

    let peers: Vec<TransformerToken> = snapshot.keys().cloned().collect();
    debug!(
        invoked_name = %request.invoked_name,
        peer_count = peers.len(),
        "dispatching artifact generation to primary handler"
    );
    primary.invoke(request, &peers)
}
