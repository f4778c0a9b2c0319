//! Error types for the hookmux contract layer.

mod dispatch;
mod registry;

pub use dispatch::*;
pub use registry::*;

/// Boxed error carried as the cause of a wrapped failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
