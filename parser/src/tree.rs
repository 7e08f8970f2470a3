//! FILENAME: parser/src/tree.rs
//! PURPOSE: Defines the parse tree produced by the parser.
//! CONTEXT: The parser builds this tree bottom-up, one node per grammar rule
//! it completes. The evaluator then walks it post-order and folds the
//! terminal values into a single number.
//!
//! NODE SHAPES (by label):
//! - Terminal: a single token, no children
//! - Expr:     Term (AddOp Term)*
//! - Term:     Factor (MulOp Factor)*
//! - Factor:   exactly one child (a Number terminal, a grouped Expr, or a Negative)
//! - Negative: '-' terminal followed by one operand

use crate::token::{OperatorClass, Token};
use serde::{Deserialize, Serialize};

/// Grammar symbols that expand into other symbols.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum NonTerminal {
    Expr,
    Term,
    Factor,
    Negative,
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Label {
    NonTerminal(NonTerminal),
    Terminal(Token),
}

/// How the evaluator combines a node's flattened children.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FoldKind {
    /// Terminal token, contributes itself.
    Leaf,
    /// Forwards the single value of its child.
    PassThrough,
    /// Negates its single operand.
    UnaryNegate,
    /// Folds `v0 op v1 op v2 ...` strictly left to right.
    LeftAssocFold { operators: OperatorClass },
}

/// A node of the parse tree. Nodes own their children exclusively.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ParseTree {
    label: Label,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ParseTree>,
}

impl ParseTree {
    pub fn terminal(token: Token) -> Self {
        ParseTree {
            label: Label::Terminal(token),
            children: Vec::new(),
        }
    }

    /// `Factor` wrapping a number terminal, a grouped expression or a negative.
    pub fn factor(child: ParseTree) -> Self {
        ParseTree {
            label: Label::NonTerminal(NonTerminal::Factor),
            children: vec![child],
        }
    }

    /// `Negative` node: the minus sign and the operand it applies to.
    pub fn negative(minus: Token, operand: ParseTree) -> Self {
        ParseTree {
            label: Label::NonTerminal(NonTerminal::Negative),
            children: vec![ParseTree::terminal(minus), operand],
        }
    }

    /// Repetition chain (`Expr` or `Term`): the first operand followed by
    /// (operator, operand) pairs in source order.
    pub fn chain(symbol: NonTerminal, first: ParseTree, rest: Vec<(Token, ParseTree)>) -> Self {
        let mut children = Vec::with_capacity(1 + rest.len() * 2);
        children.push(first);
        for (op, operand) in rest {
            children.push(ParseTree::terminal(op));
            children.push(operand);
        }
        ParseTree {
            label: Label::NonTerminal(symbol),
            children,
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn children(&self) -> &[ParseTree] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The evaluation rule attached to this node's label.
    pub fn fold_kind(&self) -> FoldKind {
        match self.label {
            Label::Terminal(_) => FoldKind::Leaf,
            Label::NonTerminal(NonTerminal::Factor) => FoldKind::PassThrough,
            Label::NonTerminal(NonTerminal::Negative) => FoldKind::UnaryNegate,
            Label::NonTerminal(NonTerminal::Expr) => FoldKind::LeftAssocFold {
                operators: OperatorClass::Additive,
            },
            Label::NonTerminal(NonTerminal::Term) => FoldKind::LeftAssocFold {
                operators: OperatorClass::Multiplicative,
            },
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ParseTree::node_count).sum::<usize>()
    }

    fn write_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        writeln!(f, "{}{}: {}", "  ".repeat(depth), depth, self.label)?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NonTerminal::Expr => write!(f, "Expr"),
            NonTerminal::Term => write!(f, "Term"),
            NonTerminal::Factor => write!(f, "Factor"),
            NonTerminal::Negative => write!(f, "Negative"),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::NonTerminal(symbol) => write!(f, "{}", symbol),
            Label::Terminal(token) => write!(f, "{}", token),
        }
    }
}

/// Debug dump: one node per line, indented two spaces per level and
/// prefixed with its depth. Not a stable format.
impl std::fmt::Display for ParseTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_indented(f, 0)
    }
}
