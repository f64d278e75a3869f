//! Errors reported by the runtime side of the crate

use thiserror::Error;

/// A string that names none of a discriminant's variants.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("unknown discriminant `{key}`")]
pub struct UnknownDiscriminant {
    key: String,
}

impl UnknownDiscriminant {
    pub fn new(key: &str) -> Self {
        UnknownDiscriminant {
            key: key.to_string(),
        }
    }

    /// The rejected key.
    pub fn key(&self) -> &str {
        &self.key
    }
}
