// src/store/namespace.rs
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// Opaque key for one namespace, derived from a caller-chosen source string
/// (conventionally the plugin's main file path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NamespaceId(String);

impl NamespaceId {
    /// Trim surrounding whitespace, then hex-encode the SHA-256 digest.
    pub fn derive(source: &str) -> Self {
        Self(format!("{:x}", Sha256::digest(source.trim().as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight hex chars, for log lines.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NamespaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
