//! Domain error types.
//!
//! These errors represent validation failures when constructing cities,
//! routes and trips. They are distinct from lookup and IO errors, which
//! live with the graph, planner and data layers.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// City name or coordinates are malformed
    #[error("invalid city: {0}")]
    InvalidCity(&'static str),

    /// Route endpoints or weights are malformed
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),

    /// Optimization criterion is not one of the supported values
    #[error("optimize_by must be 'distance' or 'cost', got '{0}'")]
    InvalidCriterion(String),

    /// Path and routes handed to a trip are inconsistent
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidCity("name must not be empty");
        assert_eq!(err.to_string(), "invalid city: name must not be empty");

        let err = DomainError::InvalidRoute("distance must be positive");
        assert_eq!(err.to_string(), "invalid route: distance must be positive");

        let err = DomainError::InvalidCriterion("time".into());
        assert_eq!(
            err.to_string(),
            "optimize_by must be 'distance' or 'cost', got 'time'"
        );

        let err = DomainError::InvalidPath("path cannot be empty");
        assert_eq!(err.to_string(), "invalid path: path cannot be empty");
    }
}
