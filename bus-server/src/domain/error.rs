//! Domain error types.
//!
//! These errors represent invariant violations while assembling domain
//! values. They are distinct from request parsing and I/O errors.

use super::StopId;

/// Domain-level errors for plan construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Plan has no segments
    #[error("route plan must have at least one segment")]
    EmptyPlan,

    /// Consecutive bus legs don't share a stop
    #[error("stops {0} and {1} are not connected")]
    StopsNotConnected(StopId, StopId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyPlan;
        assert_eq!(err.to_string(), "route plan must have at least one segment");

        let err = DomainError::StopsNotConnected(
            StopId::new("MG").unwrap(),
            StopId::new("KR").unwrap(),
        );
        assert_eq!(err.to_string(), "stops MG and KR are not connected");
    }
}
