//! Error types for the step engine
//!
//! Every variant is an invalid-argument condition: it is reported before any
//! structure is mutated or any frame is produced, and only aborts the attempted
//! operation.

use thiserror::Error;

/// Errors raised by generators, data structures and input validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// List index outside the accepted range for the operation
    #[error("List index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Removal requested on an empty list
    #[error("List is empty")]
    EmptyList,

    /// Enqueue on a full queue
    #[error("Maximum queue size exceeded (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Dequeue on an empty queue
    #[error("Queue is empty")]
    EmptyQueue,

    /// Insert requested without a value
    #[error("{operation} requires a value")]
    MissingValue { operation: &'static str },

    /// Index-anchored operation requested without an index
    #[error("{operation} requires an index")]
    MissingIndex { operation: &'static str },

    /// Raw input rejected by validation
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Handle does not name a running animation
    #[error("No running animation with id {id}")]
    UnknownAnimation { id: u64 },
}

impl EngineError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(err.to_string(), "List index 4 out of range for length 3");
        assert_eq!(
            EngineError::CapacityExceeded { capacity: 6 }.to_string(),
            "Maximum queue size exceeded (capacity 6)"
        );
        assert_eq!(
            EngineError::MissingValue { operation: "insert" }.to_string(),
            "insert requires a value"
        );
    }
}
