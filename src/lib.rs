//! # Hookmux
//!
//! Process-wide composition point for a managed runtime's
//! closure-generation hook: one ordered registry of instrumentation
//! participants presenting themselves to the runtime as a single
//! physical hook.
//!
//! This crate re-exports the public surface of the workspace:
//!
//! - [`register`] / [`release`] - ordered, thread-safe participation
//!   with exactly-once install/uninstall signaling
//! - [`make`] - the fixed-signature dispatch entry point the patched
//!   runtime calls
//! - [`AnchorResolver`] - caller-supplied resolution of the canonical
//!   registry across isolated loading contexts
//! - The contract types participants implement ([`ArtifactFactory`],
//!   [`FactoryTarget`], [`MakeRequest`], [`TransformerToken`])

pub use hookmux_core::{
    AnchorContext, AnchorResolver, FactoryHandle, HookRegistry, make, register, release,
};
pub use hookmux_protocols::error::{BoxError, DispatchError, MissingDispatcher, RegistryError};
pub use hookmux_protocols::factory::{ArtifactFactory, FactoryTarget};
pub use hookmux_protocols::request::{HostValue, MakeRequest};
pub use hookmux_protocols::token::TransformerToken;
