use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::variable::VariableValues;

/// Calculates the value of the given expression tree.
///
/// # Arguments
///
/// * `node`: The root of the tree to evaluate. It is only read, never changed.
/// * `values`: The value of every variable the tree refers to.
///
/// returns: The integer value of the expression. Arithmetic wraps around on overflow.
pub fn evaluate(node: &Node, values: &VariableValues) -> Result<i32> {
    match node {
        Node::LiteralInteger(value) => Ok(*value),
        Node::Identifier(variable) => values
            .get(variable)
            .copied()
            .ok_or(ExpressionError::MissingValue(*variable)),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let left = evaluate(left_operand, values)?;
            let right = evaluate(right_operand, values)?;
            Ok(operator.evaluate(left, right))
        }
    }
}

impl Node {
    pub fn evaluate(&self, values: &VariableValues) -> Result<i32> {
        evaluate(self, values)
    }
}
