use std::borrow::Cow;

use thiserror::Error;

pub type Result<T, E = IterError> = std::result::Result<T, E>;

/// Errors surfaced by cursors and adaptor constructors
///
/// Construction failures (`InvalidArgument`) are reported immediately by the
/// constructing function. `ReadAtEnd` is the checked form of the "dereference
/// past the end" precondition: a cursor that has reached its end refuses to
/// produce a value instead of reading out of bounds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IterError {
    #[error("cannot read value at end of {adaptor}")]
    ReadAtEnd { adaptor: &'static str },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument {
        name: &'static str,
        message: Cow<'static, str>,
    },
}

impl IterError {
    pub fn read_at_end(adaptor: &'static str) -> Self {
        IterError::ReadAtEnd { adaptor }
    }

    pub fn invalid_arg(name: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        IterError::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_at_end_display() {
        let error = IterError::read_at_end("slice");
        assert_eq!(error.to_string(), "cannot read value at end of slice");
    }

    #[test]
    fn test_invalid_arg_display() {
        let error = IterError::invalid_arg("step", "must be positive");
        assert_eq!(error.to_string(), "invalid argument step: must be positive");
        assert!(matches!(
            error,
            IterError::InvalidArgument { name: "step", .. }
        ));
    }

    #[test]
    fn test_invalid_arg_owned_message() {
        let error = IterError::invalid_arg("size", format!("got {}", 0));
        assert_eq!(error.to_string(), "invalid argument size: got 0");
    }
}
