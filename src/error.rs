//! Error types
//!
//! [`ListError`] is returned by the list contract (see [`crate::traits::OrderedList`]). \
//! [`InputError`] describes user input that the interactive session rejects.

use chrono::NaiveDate;
use thiserror::Error;

/// Contract violations of an [`OrderedList`](crate::traits::OrderedList)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A container was asked to start with an unusable capacity
    #[error("Invalid initial capacity: {capacity}")]
    InvalidArgument { capacity: usize },

    /// An index outside of `[0, size)` was used
    #[error("Index {index} is out of bounds for a list of size {size}")]
    OutOfBounds { index: usize, size: usize },
}

/// Reasons why a line typed by the user has been refused
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Name for the task is a required field")]
    BlankName,

    #[error("Due date {due} is older than the current date {today}")]
    DueDateInPast { due: NaiveDate, today: NaiveDate },

    #[error("Invalid due date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("'{input}' is not a valid option")]
    InvalidSelection { input: String },

    #[error("Option {selected} is out of range [1-{max}]")]
    SelectionOutOfRange { selected: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message() {
        let err = ListError::OutOfBounds { index: 7, size: 3 };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn invalid_date_keeps_its_source() {
        let source = NaiveDate::parse_from_str("2024-13-01", "%Y-%m-%d").unwrap_err();
        let err = InputError::InvalidDate { input: "2024-13-01".to_string(), source };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("2024-13-01"));
    }
}
