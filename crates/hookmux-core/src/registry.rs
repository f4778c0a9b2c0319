//! Process-wide transformer registry.

use std::fmt;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use parking_lot::Mutex;
use tracing::{info, warn};

use hookmux_protocols::error::{MissingDispatcher, RegistryError};
use hookmux_protocols::factory::FactoryTarget;
use hookmux_protocols::token::TransformerToken;

use crate::anchor::AnchorResolver;
use crate::handle::FactoryHandle;

pub(crate) type EntryMap = IndexMap<TransformerToken, FactoryHandle>;

static GLOBAL_REGISTRY: OnceLock<HookRegistry> = OnceLock::new();

/// Process-wide, insertion-ordered mapping from transformer tokens to
/// their bound factory handles.
///
/// Insertion order is semantically significant: the first entry is the
/// primary handler every dispatch delegates to. A token appears at
/// most once; re-registering a present token replaces its handle in
/// place, while releasing and re-registering moves it to the end.
///
/// Mutations serialize on a single lock so the empty/non-empty
/// transition is computed in the same critical section as the change.
/// Readers load the current snapshot without locking; a register or
/// release racing a dispatch is observed in either order.
pub struct HookRegistry {
    /// Serializes register/release. Never held on the dispatch path.
    mutate: Mutex<()>,
    entries: ArcSwap<EntryMap>,
}

impl HookRegistry {
    pub(crate) fn new() -> Self {
        Self {
            mutate: Mutex::new(()),
            entries: ArcSwap::from_pointee(EntryMap::new()),
        }
    }

    /// The registry of the currently executing image, created on first
    /// access and alive for the process lifetime.
    ///
    /// This is the well-known location an
    /// [`AnchorContext`](crate::anchor::AnchorContext) exposes. Which
    /// image's copy is authoritative is decided by the installer's
    /// resolver, never by this accessor.
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::new)
    }

    /// Insert or overwrite an entry, reporting whether the map was
    /// empty before the mutation.
    fn insert(&self, token: TransformerToken, handle: FactoryHandle) -> bool {
        let _guard = self.mutate.lock();
        let current = self.entries.load();
        let was_empty = current.is_empty();
        let mut next = EntryMap::clone(&current);
        next.insert(token, handle);
        self.entries.store(Arc::new(next));
        was_empty
    }

    /// Remove an entry if present, reporting whether something was
    /// removed and the map is now empty.
    fn remove(&self, token: &TransformerToken) -> bool {
        let _guard = self.mutate.lock();
        let current = self.entries.load();
        if !current.contains_key(token) {
            return false;
        }
        let mut next = EntryMap::clone(&current);
        next.shift_remove(token);
        let now_empty = next.is_empty();
        self.entries.store(Arc::new(next));
        now_empty
    }

    /// Current snapshot of the ordered entries.
    pub(crate) fn snapshot(&self) -> Arc<EntryMap> {
        self.entries.load_full()
    }

    /// Number of registered transformers.
    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    /// Whether no transformer is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }

    /// Whether `token` is currently registered.
    pub fn contains(&self, token: &TransformerToken) -> bool {
        self.entries.load().contains_key(token)
    }

    /// Registered tokens in insertion order.
    pub fn tokens(&self) -> Vec<TransformerToken> {
        self.entries.load().keys().cloned().collect()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("tokens", &self.tokens())
            .finish()
    }
}

/// Register a transformer and its factory target with the canonical
/// registry.
///
/// The canonical instance is re-resolved through `resolver` on every
/// call; a local registry reference is never trusted across loading
/// contexts. Returns `true` if the registry was empty beforehand -
/// the signal that this is the first participant and the installer
/// must now patch the runtime to call [`make`](crate::dispatch::make).
///
/// Fails with [`RegistryError::RegistrationFailed`] when the target
/// exposes no `make` dispatcher or when the canonical context exposes
/// no registry; the cause is attached in both cases. The registry is
/// left unchanged on failure.
pub fn register(
    token: TransformerToken,
    target: Arc<dyn FactoryTarget>,
    resolver: &dyn AnchorResolver,
) -> Result<bool, RegistryError> {
    let registry = resolver
        .resolve()
        .registry()
        .map_err(|err| RegistryError::RegistrationFailed(Box::new(err)))?;

    let handle = match FactoryHandle::bind(target) {
        Some(handle) => handle,
        None => {
            warn!(%token, "factory target exposes no `make` dispatcher");
            return Err(RegistryError::RegistrationFailed(Box::new(
                MissingDispatcher,
            )));
        }
    };

    let was_empty = registry.insert(token.clone(), handle);
    info!(%token, was_empty, "transformer registered");
    Ok(was_empty)
}

/// Release a transformer from the canonical registry.
///
/// Re-resolves the canonical instance through `resolver` by the same
/// anchor mechanism as [`register`]. Returns `true` only if the token
/// was present and its removal left the registry empty - the signal
/// that the installer must un-patch the runtime. An absent token
/// yields `false` even when the registry was already empty.
pub fn release(
    token: &TransformerToken,
    resolver: &dyn AnchorResolver,
) -> Result<bool, RegistryError> {
    let registry = resolver
        .resolve()
        .registry()
        .map_err(|err| RegistryError::RegistrationFailed(Box::new(err)))?;

    let now_empty = registry.remove(token);
    info!(%token, now_empty, "transformer released");
    Ok(now_empty)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
