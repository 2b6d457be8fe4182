use crate::interpreter::error::{ExpressionError, Result};
use std::fmt;
use std::fmt::Formatter;

/// What kind of element was consumed last, as far as the grammar cares.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ElementKind {
    /// Nothing yet, or an opening bracket: anything may follow.
    Undefined,
    /// A constant, a variable or a closed bracket group.
    Scalar,
    Operator,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Undefined => write!(f, "nothing"),
            ElementKind::Scalar => write!(f, "scalar"),
            ElementKind::Operator => write!(f, "operator"),
        }
    }
}

/// Tracks which kinds of element may come next.
///
/// Scalars and operators have to alternate. An opening bracket is checked like a
/// scalar and resets the state; a closing bracket is checked like an operator and
/// leaves a scalar behind. The state is shared by all bracket levels.
#[derive(Debug, Clone)]
pub(crate) struct Grammar {
    last: ElementKind,
}

impl Grammar {
    pub(crate) fn new() -> Grammar {
        Grammar {
            last: ElementKind::Undefined,
        }
    }

    /// Whether an element checked as `expected` may follow the last one.
    pub(crate) fn allows(&self, expected: ElementKind) -> bool {
        self.last == ElementKind::Undefined || self.last != expected
    }

    fn ensure_allowed(&self, expected: ElementKind, position: usize) -> Result<()> {
        if self.allows(expected) {
            return Ok(());
        }
        let missing = match expected {
            ElementKind::Scalar => ElementKind::Operator,
            _ => ElementKind::Scalar,
        };
        let message = format!(
            "Missing {}, found {} after {}",
            missing, expected, self.last
        );
        Err(ExpressionError::syntax(message, position))
    }

    fn consume(&mut self, kind: ElementKind) {
        self.last = kind;
    }

    pub(crate) fn scalar(&mut self, position: usize) -> Result<()> {
        self.ensure_allowed(ElementKind::Scalar, position)?;
        self.consume(ElementKind::Scalar);
        Ok(())
    }

    pub(crate) fn operator(&mut self, position: usize) -> Result<()> {
        self.ensure_allowed(ElementKind::Operator, position)?;
        self.consume(ElementKind::Operator);
        Ok(())
    }

    pub(crate) fn open_bracket(&mut self, position: usize) -> Result<()> {
        self.ensure_allowed(ElementKind::Scalar, position)?;
        self.consume(ElementKind::Undefined);
        Ok(())
    }

    pub(crate) fn close_bracket(&mut self, position: usize) -> Result<()> {
        self.ensure_allowed(ElementKind::Operator, position)?;
        self.consume(ElementKind::Scalar);
        Ok(())
    }
}
