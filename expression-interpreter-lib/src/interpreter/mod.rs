pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;
pub mod variable;

use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::token::Token;
use crate::interpreter::variable::VariableValues;
use log::debug;
use string_builder::Builder;
use syntax::expression_tree::Node;

/// Holds one parsed expression and calculates it for any number of variable values.
///
/// Valid expressions may contain
///  - the operators for addition (`+`), subtraction (`-`) and multiplication (`*`),
///  - non-negative integer constants,
///  - variables named by a single lowercase letter from `a` to `z`,
///  - brackets for grouping,
///  - spaces anywhere.
///
/// # Examples
///
/// ```
/// use expression_interpreter::interpreter::Interpreter;
/// use expression_interpreter::interpreter::variable::{Variable, VariableValues};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let interpreter = Interpreter::new("3*x + 20- y *(z + 17)")?;
/// let values = VariableValues::from([
///     (Variable::new("x")?, 1),
///     (Variable::new("y")?, 2),
///     (Variable::new("z")?, 3),
/// ]);
/// assert_eq!(interpreter.calculate_with(&values)?, -17);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter {
    expression_tree: Node,
}

impl Interpreter {
    /// Creates an interpreter holding the given expression.
    pub fn new<'a>(expression: impl Into<Option<&'a str>>) -> Result<Interpreter> {
        let expression_tree = register_tree(expression.into())?;
        Ok(Interpreter { expression_tree })
    }

    /// Replaces the held expression. If the new expression is invalid, the previous one is kept.
    pub fn register<'a>(&mut self, expression: impl Into<Option<&'a str>>) -> Result<()> {
        self.expression_tree = register_tree(expression.into())?;
        Ok(())
    }

    /// Calculates the held expression using the given variable values.
    pub fn calculate_with(&self, values: &VariableValues) -> Result<i32> {
        self.expression_tree.evaluate(values)
    }

    /// Calculates the held expression without any variable values.
    pub fn calculate(&self) -> Result<i32> {
        self.calculate_with(&VariableValues::new())
    }

    pub fn expression_tree(&self) -> &Node {
        &self.expression_tree
    }
}

fn register_tree(expression: Option<&str>) -> Result<Node> {
    let tree = convert(expression)?;
    debug!("Registered expression {:?}", expression.unwrap_or_default());
    debug!("Expression tree:\n{}", tree);
    Ok(tree)
}

/// Converts the given input string into an equivalent expression tree,
/// which is easier to evaluate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression, `None` if absent.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_interpreter::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let expression = "a + 2 * b";
/// let tree = convert(Some(expression))?;
/// let regenerated_tokens = tree.to_infix();
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: Option<&str>) -> Result<Node> {
    let tokens = lexer::tokenize(expression)?;
    let expression_tree = parser::parse(&tokens)?;
    Ok(expression_tree)
}

/// Parses and calculates the given expression in one go.
///
/// # Examples
///
/// ```
/// use expression_interpreter::interpreter::evaluate;
/// use expression_interpreter::interpreter::variable::VariableValues;
///
/// let result = evaluate("14 - 4 * 4 + 2", &VariableValues::new());
/// assert_eq!(result.unwrap(), 0);
/// ```
pub fn evaluate(expression: &str, values: &VariableValues) -> Result<i32> {
    convert(Some(expression))?.evaluate(values)
}

/// Pretty-prints the given vector of tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use expression_interpreter::interpreter::tokens_to_string;
/// use expression_interpreter::interpreter::token::Token;
/// use expression_interpreter::interpreter::operator::BinaryOperator;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Variable("x".parse()?),
///     Token::Operator(BinaryOperator::Multiply),
///     Token::OpenBracket,
///     Token::Constant(2),
///     Token::Operator(BinaryOperator::Add),
///     Token::Variable("y".parse()?),
///     Token::CloseBracket,
/// ];
/// let pretty_printed_tokens = tokens_to_string(tokens)?;
/// assert_eq!(pretty_printed_tokens, "x * (2 + y)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(_) => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().map_err(|error| {
        ExpressionError::internal(format!("Failed to build token string: {}", error))
    })
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::ErrorKind;
    use crate::interpreter::variable::Variable;
    use parameterized_macro::parameterized;

    fn variable(name: &str) -> Variable {
        Variable::new(name).unwrap()
    }

    fn abc_values() -> VariableValues {
        VariableValues::from([(variable("a"), 2), (variable("b"), 5), (variable("c"), 8)])
    }

    fn calculate(expression: &str, values: &VariableValues) -> i32 {
        Interpreter::new(expression)
            .unwrap()
            .calculate_with(values)
            .unwrap()
    }

    #[parameterized(expression = { "5", "42", "987654", "0", "007" }, value = { 5, 42, 987654, 0, 7 })]
    fn single_number_evaluates_to_itself(expression: &str, value: i32) {
        assert_eq!(calculate(expression, &VariableValues::new()), value);
    }

    #[parameterized(
    expression = {
    "4+ 5",
    "2 - 15",
    "42 *3",
    "14 - 4 * 4 + 2",
    "1*2*3*4+1",
    },
    value = {
    9,
    -13,
    126,
    0,
    25,
    }
    )]
    fn simple_expression_respects_precedence(expression: &str, value: i32) {
        assert_eq!(calculate(expression, &VariableValues::new()), value);
    }

    #[parameterized(
    expression = {
    "a+ 5",
    "2 - b",
    "42 *c",
    "c",
    "a + a * a",
    "c *c*c",
    },
    value = {
    7,
    -3,
    336,
    8,
    6,
    512,
    }
    )]
    fn variable_expression_uses_values(expression: &str, value: i32) {
        assert_eq!(calculate(expression, &abc_values()), value);
    }

    #[parameterized(
    expression = {
    "a * ( 3 + 7)",
    "3 * ( a + b * (17 - c)) + 2",
    "(33 + b) * (4711-23 * (42 - 0)) + a",
    "( 3 + 7)",
    },
    value = {
    20,
    143,
    142312,
    10,
    }
    )]
    fn bracket_expression_evaluates_group_first(expression: &str, value: i32) {
        assert_eq!(calculate(expression, &abc_values()), value);
    }

    #[test]
    fn predefined_expression_evaluates_correctly() {
        let values =
            VariableValues::from([(variable("x"), 1), (variable("y"), 2), (variable("z"), 3)]);
        assert_eq!(calculate("3*x + 20- y *(z + 17)", &values), -17);
    }

    #[test]
    fn whitespace_does_not_matter() {
        let values = VariableValues::new();
        assert_eq!(calculate("4+ 5", &values), 9);
        assert_eq!(calculate("4+5", &values), 9);
        assert_eq!(calculate(" 4 + 5 ", &values), 9);
    }

    #[test]
    fn spaces_between_digits_join_them_into_one_constant() {
        let values = VariableValues::new();
        assert_eq!(calculate("1 2", &values), 12);
        assert_eq!(calculate("4 7 + 1", &values), 48);
    }

    #[test]
    fn repeated_calculation_gives_same_result() {
        let interpreter = Interpreter::new("3 * ( a + b * (17 - c)) + 2").unwrap();
        let tree_before = interpreter.expression_tree().clone();
        let values = abc_values();

        let first = interpreter.calculate_with(&values).unwrap();
        let second = interpreter.calculate_with(&values).unwrap();
        let third = interpreter.calculate_with(&values).unwrap();

        assert_eq!(first, 143);
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(interpreter.expression_tree(), &tree_before);
    }

    #[test]
    fn calculations_with_different_values_do_not_interfere() {
        let interpreter = Interpreter::new("a * b - 1").unwrap();
        let small = VariableValues::from([(variable("a"), 2), (variable("b"), 3)]);
        let large = VariableValues::from([(variable("a"), 10), (variable("b"), 10)]);

        assert_eq!(interpreter.calculate_with(&small).unwrap(), 5);
        assert_eq!(interpreter.calculate_with(&large).unwrap(), 99);
        assert_eq!(interpreter.calculate_with(&small).unwrap(), 5);
    }

    #[test]
    fn tree_can_be_shared_between_threads() {
        let interpreter = Interpreter::new("a * a + 1").unwrap();
        let tree = interpreter.expression_tree();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (1..=4)
                .map(|value| {
                    scope.spawn(move || {
                        let values = VariableValues::from([(variable("a"), value)]);
                        tree.evaluate(&values).unwrap()
                    })
                })
                .collect();
            let results: Vec<i32> = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect();
            assert_eq!(results, vec![2, 5, 10, 17]);
        });
    }

    #[parameterized(expression = { "a * b", "a + b - c", "123 + a - 22 * 13 - c + b", "100 + 5 - x - 1" })]
    fn missing_variable_value_is_input_format_error(expression: &str) {
        let values = VariableValues::from([(variable("a"), 2), (variable("c"), 8)]);
        let interpreter = Interpreter::new(expression).unwrap();

        let error = interpreter.calculate_with(&values).unwrap_err();

        assert!(matches!(error, ExpressionError::MissingValue(_)));
        assert_eq!(error.kind(), ErrorKind::InputFormat);
    }

    #[test]
    fn single_variable_without_values_names_variable() {
        let interpreter = Interpreter::new("a").unwrap();

        let error = interpreter.calculate().unwrap_err();

        assert_eq!(error, ExpressionError::MissingValue(variable("a")));
    }

    #[parameterized(expression = {
        "a * ( 3 + 7) (",
        "a * ( 3 + 7) )",
        "a * ) ( 3 + 7) ",
        "* 3 + 5",
        "3 + * 5",
        "3 + 5 * ",
        "3 + 5 * (+ 7 - 3)",
    })]
    fn invalid_expression_is_syntax_error(expression: &str) {
        let error = Interpreter::new(expression).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Syntax);
    }

    #[parameterized(expression = {
        "3 + 5 % 2",
        "3 + 5 * A",
        "3 + 5 * ^",
        "3232XYZ",
        "äöü",
        "=/&%$§!\"",
        "",
    })]
    fn invalid_characters_are_input_format_error(expression: &str) {
        let error = Interpreter::new(expression).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InputFormat);
    }

    #[test]
    fn absent_expression_is_input_format_error() {
        let error = Interpreter::new(None::<&str>).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InputFormat);
    }

    #[test]
    fn failed_register_keeps_previous_expression() {
        let mut interpreter = Interpreter::new("2 * 21").unwrap();

        assert!(interpreter.register("2 * ").is_err());
        assert!(interpreter.register(None::<&str>).is_err());

        assert_eq!(interpreter.calculate().unwrap(), 42);
    }

    #[test]
    fn register_replaces_expression() {
        let mut interpreter = Interpreter::new("1 + 1").unwrap();

        interpreter.register("c * 2").unwrap();

        assert_eq!(interpreter.calculate_with(&abc_values()).unwrap(), 16);
    }

    #[test]
    fn evaluate_parses_and_calculates() {
        assert_eq!(evaluate("c *c*c", &abc_values()).unwrap(), 512);
    }

    #[test]
    fn simple_expression_regenerates_to_itself() {
        let expression = "a + b";

        let tree = convert(Some(expression)).unwrap();
        let regenerated_expression = tokens_to_string(tree.to_infix()).unwrap();

        assert_eq!(regenerated_expression, expression)
    }

    #[test]
    fn complex_expression_regenerates_to_itself() {
        let expression = "3 * (a + b * (17 - c)) + 2";

        let tree = convert(Some(expression)).unwrap();
        let regenerated_expression = tokens_to_string(tree.to_infix()).unwrap();

        assert_eq!(regenerated_expression, expression)
    }

    #[test]
    fn redundant_brackets_are_stripped_when_regenerating() {
        let redundant_expression = "a + ((b) * ((c - d)))";
        let expected_expression = "a + b * (c - d)";

        let tree = convert(Some(redundant_expression)).unwrap();
        let regenerated_expression = tokens_to_string(tree.to_infix()).unwrap();

        assert_eq!(regenerated_expression, expected_expression)
    }

    #[test]
    fn regenerated_expression_parses_to_same_tree() {
        let tree = convert(Some("(1 - (2 - 3)) * (4 * (5 * 6)) - (7 + 8)")).unwrap();
        let regenerated_expression = tokens_to_string(tree.to_infix()).unwrap();

        let reparsed = convert(Some(&regenerated_expression)).unwrap();

        assert_eq!(reparsed, tree);
    }
}
