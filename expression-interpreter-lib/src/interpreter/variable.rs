use crate::interpreter::error::{ExpressionError, Result};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A variable, identified by a single lowercase letter from `a` to `z`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    name: char,
}

/// The values to substitute for variables when calculating an expression.
pub type VariableValues = HashMap<Variable, i32>;

impl Variable {
    /// Creates a variable from its textual name.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_interpreter::interpreter::variable::Variable;
    ///
    /// let x = Variable::new("x").unwrap();
    /// assert_eq!(x.name(), 'x');
    /// assert!(Variable::new("xy").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Variable> {
        let mut characters = name.chars();
        match (characters.next(), characters.next()) {
            (Some(letter), None) => Variable::try_from(letter),
            _ => Err(ExpressionError::input_format(format!(
                "Invalid variable name: '{}'",
                name
            ))),
        }
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn has_same_name_as(&self, other: &Variable) -> bool {
        self.name == other.name
    }
}

impl TryFrom<char> for Variable {
    type Error = ExpressionError;

    fn try_from(letter: char) -> Result<Self> {
        if letter.is_ascii_lowercase() {
            Ok(Variable { name: letter })
        } else {
            Err(ExpressionError::input_format(format!(
                "Invalid variable name: '{}'",
                letter
            )))
        }
    }
}

impl str::FromStr for Variable {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Self> {
        Variable::new(input)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
