//! Graph error types.

use crate::domain::DomainError;

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A city with the same normalized name is already registered
    #[error("city '{0}' already exists in graph")]
    DuplicateCity(String),

    /// A route record names a city that was never declared
    #[error("route references unknown city '{0}'")]
    UnknownCity(String),

    /// A city or route record failed validation
    #[error(transparent)]
    Invalid(#[from] DomainError),
}
