use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, SyntaxVisitor, VariableCollector,
};
use crate::interpreter::token::Token;
use crate::interpreter::variable::Variable;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// A node of an expression tree. Once built, a tree is never modified.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    LiteralInteger(i32),
    Identifier(Variable),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal_integer(value: i32) -> Node {
        Node::LiteralInteger(value)
    }

    pub fn new_identifier(variable: Variable) -> Node {
        Node::Identifier(variable)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_binary_addition(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Add, left_operand, right_operand)
    }

    pub fn new_binary_subtraction(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Subtract, left_operand, right_operand)
    }

    pub fn new_binary_multiplication(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Multiply, left_operand, right_operand)
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Node::LiteralInteger(_) | Node::Identifier(_) => None,
            Node::BinaryOperation { operator, .. } => Some(*operator),
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::LiteralInteger(value) => visitor.visit_literal_integer(*value),
            Node::Identifier(variable) => visitor.visit_identifier(variable),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
        }
    }

    /// The distinct variables of the tree, in the order they first appear.
    pub fn variables(&self) -> Vec<Variable> {
        let mut collector = VariableCollector { variables: vec![] };
        self.accept(&mut collector);
        collector.variables
    }

    /// Regenerates the infix tokens of this tree, with only the brackets
    /// needed to parse back into the same tree.
    pub fn to_infix(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.build_expression(&mut tokens);
        tokens
    }

    fn build_expression(&self, tokens: &mut Vec<Token>) {
        match self {
            Node::LiteralInteger(value) => tokens.push(Token::Constant(*value)),
            Node::Identifier(variable) => tokens.push(Token::Variable(*variable)),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                // Operators are left-associative, so an equal-precedence operator
                // on the right has to keep its brackets.
                parenthesize_if(
                    tokens,
                    || child_operator_is(left_operand, |child| operator.precedence_gt(&child)),
                    |tokens| left_operand.build_expression(tokens),
                );
                tokens.push(operator.token());
                parenthesize_if(
                    tokens,
                    || child_operator_is(right_operand, |child| operator.precedence_ge(&child)),
                    |tokens| right_operand.build_expression(tokens),
                );
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::LiteralInteger(value) => write!(f, "{:?}", value),
            Node::Identifier(variable) => write!(f, "{}", variable),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => write!(f, "({:?} {} {:?})", left_operand, operator, right_operand),
        }
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal_integer(&mut self, value: i32) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_identifier(&mut self, variable: &Variable) {
        self.builder.add_empty_child(variable.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
}

fn child_operator_is(child: &Node, predicate: impl Fn(BinaryOperator) -> bool) -> bool {
    child.as_binary_operator().map_or(false, predicate)
}

fn parenthesize_if(
    tokens: &mut Vec<Token>,
    predicate: impl Fn() -> bool,
    mut build_interior: impl FnMut(&mut Vec<Token>),
) {
    let mut close_brackets = false;

    if predicate() {
        tokens.push(Token::OpenBracket);
        close_brackets = true;
    }

    build_interior(tokens);

    if close_brackets {
        tokens.push(Token::CloseBracket);
    }
}
