//! End-to-end tests for the global registration and dispatch flow.
//!
//! These tests exercise the process-wide registry through the public
//! surface only: register through a resolver, dispatch through the
//! fixed-signature `make` entry point, release, and observe the
//! install/uninstall signals an installer would act on.

use std::sync::{Arc, Mutex};

use bytes::Bytes;

use hookmux_core::anchor::AnchorContext;
use hookmux_core::{make, register, release};
use hookmux_protocols::error::{BoxError, DispatchError};
use hookmux_protocols::factory::ArtifactFactory;
use hookmux_protocols::request::{HostValue, MakeRequest};
use hookmux_protocols::token::TransformerToken;

// ============================================================================
// Test Helpers
// ============================================================================

/// Serializes tests that touch the process-wide registry.
static GLOBAL_REGISTRY_LOCK: Mutex<()> = Mutex::new(());

struct EchoFactory(&'static [u8]);

impl ArtifactFactory for EchoFactory {
    fn make(
        &self,
        _request: &MakeRequest,
        _peers: &[TransformerToken],
    ) -> Result<Bytes, BoxError> {
        Ok(Bytes::from_static(self.0))
    }
}

fn canonical() -> AnchorContext {
    AnchorContext::current()
}

fn dispatch(invoked_name: &str) -> Result<Bytes, DispatchError> {
    make(
        HostValue::new("lookup".to_string()),
        invoked_name.to_string(),
        HostValue::new(()),
        HostValue::new(()),
        HostValue::new(()),
        HostValue::new(()),
        false,
        Vec::new(),
        Vec::new(),
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_install_dispatch_uninstall_round_trip() {
    let _guard = GLOBAL_REGISTRY_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let token = TransformerToken::labeled("echo-agent");
    let installed = register(
        token.clone(),
        Arc::new(EchoFactory(&[0x01, 0x02])),
        &canonical,
    )
    .unwrap();
    assert!(installed, "first participant must signal install");

    let artifact = dispatch("apply").unwrap();
    assert_eq!(artifact.as_ref(), &[0x01, 0x02]);

    let uninstalled = release(&token, &canonical).unwrap();
    assert!(uninstalled, "last participant must signal uninstall");

    let err = dispatch("apply").unwrap_err();
    assert!(matches!(err, DispatchError::NoPrimaryHandler));
}

#[test]
fn test_signals_fire_only_on_empty_transitions() {
    let _guard = GLOBAL_REGISTRY_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let first = TransformerToken::labeled("first");
    let second = TransformerToken::labeled("second");

    assert!(register(first.clone(), Arc::new(EchoFactory(&[0xA0])), &canonical).unwrap());
    assert!(!register(second.clone(), Arc::new(EchoFactory(&[0xB0])), &canonical).unwrap());

    // The first-registered participant stays primary while present.
    assert_eq!(dispatch("apply").unwrap().as_ref(), &[0xA0]);

    assert!(
        !release(&first, &canonical).unwrap(),
        "an entry remains, no uninstall yet"
    );
    assert_eq!(dispatch("apply").unwrap().as_ref(), &[0xB0]);

    assert!(release(&second, &canonical).unwrap());
    assert!(matches!(
        dispatch("apply").unwrap_err(),
        DispatchError::NoPrimaryHandler
    ));
}
