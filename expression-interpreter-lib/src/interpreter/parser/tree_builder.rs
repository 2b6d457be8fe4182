use crate::interpreter::error::{ExpressionError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::parser::grammar::Grammar;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use log::trace;

/// Deepest bracket nesting accepted. Every level is one recursive call.
pub(crate) const MAX_BRACKET_DEPTH: usize = 256;

/// Builds an expression tree out of infix tokens in a single left-to-right pass.
///
/// Every bracket group is built by a recursive call. Within one group, multiplications
/// are merged into the pending node right away, while additions and subtractions are
/// parked on a stack and only merged once the whole group has been read.
pub(crate) struct TreeBuilder<'a> {
    tokens: &'a [Token],
    index: usize,
    bracket_depth: usize,
    grammar: Grammar,
}

/// A finished multiplicative chain and the additive operator that followed it.
struct StackEntry {
    node: Node,
    operator: BinaryOperator,
}

impl<'a> TreeBuilder<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> TreeBuilder<'a> {
        TreeBuilder {
            tokens,
            index: 0,
            bracket_depth: 0,
            grammar: Grammar::new(),
        }
    }

    pub(crate) fn build(mut self) -> Result<Node> {
        let tree = self.build_sub_expression()?;
        if self.bracket_depth != 0 {
            return Err(ExpressionError::syntax("Missing closing bracket", self.index));
        }
        Ok(tree)
    }

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn build_sub_expression(&mut self) -> Result<Node> {
        let mut pending: Option<Node> = None;
        let mut pending_operator: Option<BinaryOperator> = None;
        let mut stack: Vec<StackEntry> = Vec::new();
        let mut is_first_element = true;

        while let Some(token) = self.current() {
            let position = self.index;
            match token {
                Token::Constant(_) | Token::Variable(_) => {
                    self.grammar.scalar(position)?;
                    self.index += 1;
                    let leaf = new_scalar_node(token, position)?;
                    pending = Some(merge(pending, pending_operator.take(), leaf, position)?);
                }
                Token::Operator(operator) => {
                    if is_first_element {
                        return Err(ExpressionError::syntax(
                            "First element of expression cannot be an operator",
                            position,
                        ));
                    }
                    self.grammar.operator(position)?;
                    self.index += 1;

                    if *operator == BinaryOperator::Multiply {
                        pending_operator = Some(*operator);
                    } else {
                        let node = pending.take().ok_or_else(|| {
                            ExpressionError::internal(format!(
                                "No operand before operator at index {}",
                                position
                            ))
                        })?;
                        stack.push(StackEntry {
                            node,
                            operator: *operator,
                        });
                        pending_operator = None;
                    }
                }
                Token::OpenBracket => {
                    self.grammar.open_bracket(position)?;
                    if self.bracket_depth == MAX_BRACKET_DEPTH {
                        return Err(ExpressionError::syntax(
                            format!("Brackets nested deeper than {} levels", MAX_BRACKET_DEPTH),
                            position,
                        ));
                    }
                    self.bracket_depth += 1;
                    self.index += 1;
                    trace!("Entering bracket group at index {}", position);

                    let group = self.build_sub_expression()?;
                    pending = Some(merge(pending, pending_operator.take(), group, position)?);
                }
                Token::CloseBracket => {
                    self.grammar.close_bracket(position)?;
                    self.leave_bracket(position)?;
                    self.index += 1;
                    trace!("Leaving bracket group at index {}", position);
                    break;
                }
            }
            is_first_element = false;
        }

        if pending_operator.is_some() {
            return Err(ExpressionError::syntax(
                "Missing scalar at the end of the expression",
                self.index,
            ));
        }
        let pending = pending.ok_or_else(|| {
            ExpressionError::syntax("Missing element in expression", self.index)
        })?;

        merge_stack_to_tree(stack, pending, self.index)
    }

    fn leave_bracket(&mut self, position: usize) -> Result<()> {
        if self.bracket_depth == 0 {
            return Err(ExpressionError::syntax("Unexpected closing bracket", position));
        }
        self.bracket_depth -= 1;
        Ok(())
    }
}

fn new_scalar_node(token: &Token, position: usize) -> Result<Node> {
    match token {
        Token::Constant(value) => Ok(Node::new_literal_integer(*value)),
        Token::Variable(variable) => Ok(Node::new_identifier(*variable)),
        other => Err(ExpressionError::internal(format!(
            "'{}' at index {} is not a scalar",
            other, position
        ))),
    }
}

/// Joins `right` onto `left` with the given operator, or returns `right` if there is
/// nothing to join it to yet.
fn merge(
    left: Option<Node>,
    operator: Option<BinaryOperator>,
    right: Node,
    position: usize,
) -> Result<Node> {
    let left = match left {
        None => return Ok(right),
        Some(left) => left,
    };
    let operator = operator.ok_or_else(|| {
        ExpressionError::internal(format!("Missing operator at index {}", position))
    })?;
    Ok(Node::new_binary_operation(operator, left, right))
}

/// Collapses the parked additive chains from left to right, ending with `pending`.
fn merge_stack_to_tree(stack: Vec<StackEntry>, pending: Node, position: usize) -> Result<Node> {
    let mut result: Option<Node> = None;
    let mut operator: Option<BinaryOperator> = None;
    for entry in stack {
        result = Some(merge(result, operator, entry.node, position)?);
        operator = Some(entry.operator);
    }
    merge(result, operator, pending, position)
}
