use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::variable::Variable;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    Constant(i32),
    Variable(Variable),
    Operator(BinaryOperator),
    OpenBracket,
    CloseBracket,
}

pub fn is_constant(element: &str) -> bool {
    !element.is_empty() && element.chars().all(|character| character.is_ascii_digit())
}

pub fn is_variable(element: &str) -> bool {
    let mut characters = element.chars();
    matches!(
        (characters.next(), characters.next()),
        (Some(letter), None) if letter.is_ascii_lowercase()
    )
}

pub fn is_scalar(element: &str) -> bool {
    is_constant(element) || is_variable(element)
}

pub fn is_operator(element: &str) -> bool {
    matches!(element, "+" | "-" | "*")
}

pub fn is_open_bracket(element: &str) -> bool {
    element == "("
}

pub fn is_close_bracket(element: &str) -> bool {
    element == ")"
}

/// Maps an operator character to its operator.
///
/// Only ever called on elements that [`is_operator`] accepted, so failing here
/// means the classification above is broken, not that the input was bad.
pub fn operator_kind(element: &str) -> Result<BinaryOperator> {
    match element {
        "+" => Ok(BinaryOperator::Add),
        "-" => Ok(BinaryOperator::Subtract),
        "*" => Ok(BinaryOperator::Multiply),
        other => Err(ExpressionError::internal(format!(
            "Unexpected operator '{}'",
            other
        ))),
    }
}

impl str::FromStr for Token {
    type Err = ExpressionError;

    fn from_str(element: &str) -> Result<Token> {
        if is_constant(element) {
            parse_constant(element)
        } else if is_variable(element) {
            Ok(Token::Variable(Variable::new(element)?))
        } else if is_operator(element) {
            Ok(Token::Operator(operator_kind(element)?))
        } else if is_open_bracket(element) {
            Ok(Token::OpenBracket)
        } else if is_close_bracket(element) {
            Ok(Token::CloseBracket)
        } else {
            Err(ExpressionError::input_format(format!(
                "Unknown element '{}'",
                element
            )))
        }
    }
}

fn parse_constant(element: &str) -> Result<Token> {
    element.parse::<i32>().map(Token::Constant).map_err(|_| {
        ExpressionError::input_format(format!("Constant '{}' is out of range", element))
    })
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Constant(value) => write!(f, "{}", value),
            Token::Variable(variable) => write!(f, "{}", variable),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenBracket => write!(f, "("),
            Token::CloseBracket => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
