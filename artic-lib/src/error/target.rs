//! Selection target validation error

/// A selection count that is not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid selection target '{input}': expected a positive integer")]
pub struct InvalidTarget {
    /// The raw input that was rejected.
    pub input: String,
}

impl InvalidTarget {
    /// Creates a new invalid target error.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
