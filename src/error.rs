//! Error type for operations that can reject their input at runtime.
//!
//! Most operations in this crate are total: absent input yields `None` or an
//! empty result, and non-callable iterators are rejected by the type system.
//! The remaining failures come from ordering, where a missing sort property
//! or an incomparable pair of keys would otherwise produce a silently wrong
//! order.

use thiserror::Error;

/// Errors raised by ordering operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// A record did not carry the property used as sort key.
    #[error("record at index {index} has no property `{property}`")]
    MissingProperty {
        /// Position of the offending record in the input.
        index: usize,
        /// Name of the missing property.
        property: String,
    },

    /// Two sort keys have no defined ordering (e.g. a `NaN` key).
    #[error("sort keys at indices {left} and {right} are not comparable")]
    Incomparable {
        /// Index of the first key in the input.
        left: usize,
        /// Index of the second key in the input.
        right: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CollectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_message() {
        let err = CollectError::MissingProperty {
            index: 2,
            property: "age".to_string(),
        };
        assert_eq!(err.to_string(), "record at index 2 has no property `age`");
    }

    #[test]
    fn test_incomparable_message() {
        let err = CollectError::Incomparable { left: 0, right: 3 };
        assert_eq!(
            err.to_string(),
            "sort keys at indices 0 and 3 are not comparable"
        );
    }
}
