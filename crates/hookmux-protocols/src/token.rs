//! Opaque participant tokens.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use uuid::Uuid;

/// Opaque capability identifying one logical participant.
///
/// Tokens compare by identity: clones of a token are equal to each
/// other, tokens minted independently never are. The optional label is
/// diagnostic only and takes no part in equality or hashing.
#[derive(Clone)]
pub struct TransformerToken {
    id: Uuid,
    label: Option<Arc<str>>,
}

impl TransformerToken {
    /// Mint a token with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            label: None,
        }
    }

    /// Mint a token with a fresh identity and a diagnostic label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: Some(label.into().into()),
        }
    }

    /// The diagnostic label, if one was given.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Default for TransformerToken {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TransformerToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TransformerToken {}

impl Hash for TransformerToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TransformerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TransformerToken");
        s.field("id", &self.id);
        if let Some(label) = &self.label {
            s.field("label", label);
        }
        s.finish()
    }
}

impl fmt::Display for TransformerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => f.write_str(label),
            None => write!(f, "{}", self.id),
        }
    }
}
