use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::variable::Variable;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_literal_integer(&mut self, _value: i32) {}
    fn visit_identifier(&mut self, _variable: &Variable) {}
    fn visit_binary_operation(
        &mut self,
        _operation: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand)
    }
}

pub(crate) fn walk_binary_operation(
    visitor: &mut impl SyntaxVisitor,
    left_operand: &Node,
    right_operand: &Node,
) {
    left_operand.accept(visitor);
    right_operand.accept(visitor);
}

/// Collects every distinct variable in the order they are first encountered.
pub(crate) struct VariableCollector {
    pub(crate) variables: Vec<Variable>,
}

impl SyntaxVisitor for VariableCollector {
    fn visit_identifier(&mut self, variable: &Variable) {
        if !self.variables.contains(variable) {
            self.variables.push(*variable);
        }
    }
}
