mod grammar;
mod tree_builder;

use crate::interpreter::error::Result;
use crate::interpreter::parser::tree_builder::TreeBuilder;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to evaluate than the original tokens.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_interpreter::interpreter::operator::BinaryOperator;
/// use expression_interpreter::interpreter::parser::parse;
/// use expression_interpreter::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Variable("x".parse()?),
///     Token::Operator(BinaryOperator::Multiply),
///     Token::Constant(2),
/// ];
/// let tree = parse(&infix_tokens)?;
/// let regenerated_tokens = tree.to_infix();
/// assert_eq!(regenerated_tokens, infix_tokens);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: &[Token]) -> Result<Node> {
    TreeBuilder::new(infix_tokens).build()
}
