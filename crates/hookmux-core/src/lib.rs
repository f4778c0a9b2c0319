//! # Hookmux Core
//!
//! Process-wide composition point for a managed runtime's
//! closure-generation hook.
//!
//! A managed runtime exposes exactly one global hook for generating
//! closure artifacts, while any number of instrumentation agents may
//! want to take part in that generation. This crate keeps the single
//! ordered registry those agents share and exposes the fixed-signature
//! [`make`] entry point the patched runtime calls. Which image's
//! registry is authoritative is decided by a caller-supplied
//! [`AnchorResolver`], re-run on every mutation.
//!
//! Registration and release serialize on one lock and report the
//! empty/non-empty transitions the installer uses to patch and
//! un-patch the runtime. Dispatch never takes that lock; it reads a
//! point-in-time snapshot of the registered participants.

pub mod anchor;
pub mod dispatch;
pub mod handle;
pub mod registry;

pub use anchor::{AnchorContext, AnchorResolver};
pub use dispatch::make;
pub use handle::FactoryHandle;
pub use registry::{HookRegistry, register, release};
