//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Folds a ParseTree into a single number.
//! CONTEXT: After an expression is parsed, this module walks the tree
//! post-order. Every node first collects the flattened items of its children
//! (numbers and operators), then applies the fold rule of its label:
//!
//! - Leaf:          a number or operator terminal contributes itself
//! - PassThrough:   `Factor` forwards its one value
//! - UnaryNegate:   `Negative` turns `[-, v]` into `[-v]`
//! - LeftAssocFold: `Expr`/`Term` reduce `[v0, op1, v1, ..., opn, vn]` by
//!                  replacing the leading `v op v` triple until one value is left
//!
//! The parser only builds well-shaped nodes, but trees can also come from
//! elsewhere (deserialized JSON), so every shape is checked here.

use crate::error::{EngineError, EngineResult};
use expr_parser::{FoldKind, Label, Operator, OperatorClass, ParseTree, Token};

/// One element of a node's flattened child sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Item {
    Value(f64),
    Op(Operator),
}

/// Stateless tree evaluator. Each call owns its own traversal state,
/// so one instance may evaluate any number of trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluates the tree rooted at `tree`.
    pub fn evaluate(&self, tree: &ParseTree) -> EngineResult<f64> {
        let items = self.traverse(tree)?;
        match items.as_slice() {
            [Item::Value(v)] => {
                log::trace!("evaluated tree of {} nodes to {}", tree.node_count(), v);
                Ok(*v)
            }
            _ => Err(incomplete(tree, items.len())),
        }
    }

    fn traverse(&self, node: &ParseTree) -> EngineResult<Vec<Item>> {
        let value = match node.fold_kind() {
            FoldKind::Leaf => return self.leaf(node),
            FoldKind::PassThrough => match self.flatten_children(node)?.as_slice() {
                [Item::Value(v)] => *v,
                items => return Err(incomplete(node, items.len())),
            },
            FoldKind::UnaryNegate => match self.flatten_children(node)?.as_slice() {
                [Item::Op(Operator::Subtract), Item::Value(v)] => -*v,
                items => return Err(incomplete(node, items.len())),
            },
            FoldKind::LeftAssocFold { operators } => {
                let items = self.flatten_children(node)?;
                fold_left(node, &items, operators)?
            }
        };

        Ok(vec![Item::Value(value)])
    }

    fn flatten_children(&self, node: &ParseTree) -> EngineResult<Vec<Item>> {
        let mut items = Vec::new();
        for child in node.children() {
            items.extend(self.traverse(child)?);
        }
        Ok(items)
    }

    fn leaf(&self, node: &ParseTree) -> EngineResult<Vec<Item>> {
        if !node.is_leaf() {
            return Err(incomplete(node, node.children().len()));
        }
        match node.label() {
            Label::Terminal(Token::Number(n)) => Ok(vec![Item::Value(*n)]),
            Label::Terminal(Token::Operator(op)) => Ok(vec![Item::Op(*op)]),
            // Parens are consumed by the parser and never stored
            _ => Err(incomplete(node, 0)),
        }
    }
}

/// Convenience function to evaluate a tree with a fresh evaluator.
pub fn evaluate(tree: &ParseTree) -> EngineResult<f64> {
    Evaluator::new().evaluate(tree)
}

/// Reduces `[v0, op1, v1, ..., opn, vn]` strictly left to right.
/// Every operator must belong to `class`.
fn fold_left(node: &ParseTree, items: &[Item], class: OperatorClass) -> EngineResult<f64> {
    let shape_error = || incomplete(node, items.len());

    let mut rest = items.iter();
    let mut acc = match rest.next() {
        Some(Item::Value(v)) => *v,
        _ => return Err(shape_error()),
    };

    loop {
        match (rest.next(), rest.next()) {
            (None, None) => break,
            (Some(Item::Op(op)), Some(Item::Value(rhs))) if op.class() == class => {
                acc = apply(*op, acc, *rhs)?;
            }
            _ => return Err(shape_error()),
        }
    }

    Ok(acc)
}

fn apply(op: Operator, left: f64, right: f64) -> EngineResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Subtract => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide if right == 0.0 => Err(EngineError::DivisionByZero),
        Operator::Divide => Ok(left / right),
    }
}

fn incomplete(node: &ParseTree, found: usize) -> EngineError {
    EngineError::IncompleteSubtree {
        node: node.label().to_string(),
        found,
    }
}
