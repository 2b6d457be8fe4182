use crate::interpreter::error::{ExpressionError, Result, ALLOWED_CHARACTERS};
use crate::interpreter::token::Token;
use itertools::Itertools;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

lazy_static! {
    /// Every character of an expression has to match this.
    static ref WHITE_LIST: Regex =
        Regex::new(r"^[0-9a-z+\-*() ]+$").expect("white list pattern is valid");
    /// A single element: a run of digits, or one letter, operator or bracket.
    static ref ELEMENT: Regex =
        Regex::new(r"[0-9]+|[a-z+\-*()]").expect("element pattern is valid");
}

/// Splits the given expression into tokens.
///
/// # Arguments
///
/// * `expression`: The textual expression. `None` stands for an absent expression.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use expression_interpreter::interpreter::lexer::tokenize;
/// use expression_interpreter::interpreter::token::Token;
///
/// let tokens = tokenize(Some("42 * (a)")).unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0], Token::Constant(42));
/// ```
pub fn tokenize(expression: Option<&str>) -> Result<Vec<Token>> {
    let expression = expression.ok_or_else(|| {
        ExpressionError::input_format("The expression cannot be absent.")
    })?;
    check_for_valid_characters(expression)?;

    let elements = split_into_elements(expression);
    trace!("Split '{}' into elements {:?}", expression, elements);

    elements.iter().map(|element| element.parse()).collect()
}

/// Fails if the expression is empty or contains anything outside the white list.
pub fn check_for_valid_characters(expression: &str) -> Result<()> {
    if WHITE_LIST.is_match(expression) {
        return Ok(());
    }

    if expression.is_empty() {
        return Err(ExpressionError::input_format(format!(
            "The expression cannot be empty. {}",
            ALLOWED_CHARACTERS
        )));
    }

    let invalid_characters = expression
        .chars()
        .filter(|character| !is_allowed(*character))
        .unique()
        .map(|character| format!("'{}'", character))
        .join(", ");
    Err(ExpressionError::input_format(format!(
        "Invalid characters {} in expression '{}'. {}",
        invalid_characters, expression, ALLOWED_CHARACTERS
    )))
}

/// Removes all whitespace and splits what remains into its elements.
pub fn split_into_elements(expression: &str) -> Vec<String> {
    let without_spaces: String = expression
        .chars()
        .filter(|character| !character.is_whitespace())
        .collect();
    ELEMENT
        .find_iter(&without_spaces)
        .map(|found| found.as_str().to_string())
        .collect()
}

fn is_allowed(character: char) -> bool {
    matches!(character, '0'..='9' | 'a'..='z' | '+' | '-' | '*' | '(' | ')' | ' ')
}
