use crate::interpreter::variable::Variable;
use thiserror::Error;

/// Describes the allowed characters of an expression, appended to character errors.
pub(crate) const ALLOWED_CHARACTERS: &str =
    "Allowed characters are: a-z, 0-9, + - *, ( ) and spaces";

/// Anything that can go wrong while registering or calculating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// The text itself is unusable: absent, empty, disallowed characters,
    /// a malformed variable name or a constant that does not fit.
    #[error("Invalid input: {0}")]
    InputFormat(String),
    /// The tokens do not form a valid expression.
    #[error("Syntax error: {message} at index {position}")]
    Syntax { message: String, position: usize },
    /// A variable referenced by the expression has no value in the given mapping.
    #[error("Invalid input: no value found for variable '{0}'")]
    MissingValue(Variable),
    /// The interpreter reached a state it should never be able to reach.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification of an [`ExpressionError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InputFormat,
    Syntax,
    Internal,
}

impl ExpressionError {
    pub(crate) fn input_format(message: impl Into<String>) -> Self {
        ExpressionError::InputFormat(message.into())
    }

    pub(crate) fn syntax(message: impl Into<String>, position: usize) -> Self {
        ExpressionError::Syntax {
            message: message.into(),
            position,
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        ExpressionError::Internal(message.into())
    }

    /// A missing variable value counts as bad input, just like malformed text.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpressionError::InputFormat(_) | ExpressionError::MissingValue(_) => {
                ErrorKind::InputFormat
            }
            ExpressionError::Syntax { .. } => ErrorKind::Syntax,
            ExpressionError::Internal(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T, E = ExpressionError> = std::result::Result<T, E>;
