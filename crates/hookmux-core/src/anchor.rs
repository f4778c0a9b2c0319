//! Cross-context resolution of the canonical registry.

use hookmux_protocols::error::RegistryError;

use crate::registry::HookRegistry;

/// Handle to one loading context's copy of this crate's static state.
///
/// When the crate is linked into several dynamically loaded images in
/// the same process, every image carries its own registry static. An
/// `AnchorContext` names one of those copies; the installer's resolver
/// decides which copy is canonical.
#[derive(Clone, Copy, Debug)]
pub struct AnchorContext {
    registry: Option<&'static HookRegistry>,
}

impl AnchorContext {
    /// Context of the currently executing image.
    pub fn current() -> Self {
        Self {
            registry: Some(HookRegistry::global()),
        }
    }

    /// Context anchored at an explicit registry reference.
    pub fn with_registry(registry: &'static HookRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// A context that exposes no registry, as seen when the canonical
    /// image predates this crate's registry export.
    pub fn unavailable() -> Self {
        Self { registry: None }
    }

    /// The registry at this context's well-known location.
    pub(crate) fn registry(&self) -> Result<&'static HookRegistry, RegistryError> {
        self.registry.ok_or_else(|| {
            RegistryError::ResolutionFailed("anchor context exposes no registry".to_string())
        })
    }
}

/// Capability locating the canonical loading context.
///
/// Resolution runs on every register and release call. The caller's
/// own context may differ from the canonical one, so results are never
/// cached; every mutation routes through whatever the resolver returns
/// at that moment. An environment-level fault inside a resolver is a
/// panic and unwinds through the registry untouched.
pub trait AnchorResolver: Send + Sync {
    /// Locate the canonical context.
    fn resolve(&self) -> AnchorContext;
}

impl<F> AnchorResolver for F
where
    F: Fn() -> AnchorContext + Send + Sync,
{
    fn resolve(&self) -> AnchorContext {
        self()
    }
}
