//! # Hookmux Protocols
//!
//! Contract definitions for the hookmux composition point.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Contracts
//!
//! - [`TransformerToken`] - Opaque identity of one registered participant
//! - [`ArtifactFactory`] - Handler contract every participant factory exposes
//! - [`FactoryTarget`] - Capability probe performed once at registration
//! - [`MakeRequest`] - The fixed nine-parameter dispatch contract, bundled once

pub mod error;
pub mod factory;
pub mod request;
pub mod token;

// Re-export core contracts
pub use error::{BoxError, DispatchError, MissingDispatcher, RegistryError};
pub use factory::{ArtifactFactory, FactoryTarget};
pub use request::{HostValue, MakeRequest};
pub use token::TransformerToken;
