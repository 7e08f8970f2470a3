//! FILENAME: tests/test_expressions.rs
//! Integration tests for the parse -> evaluate pipeline.

mod common;

use common::{reference_cases, Harness};
use expr_engine::{parse, EngineError, ParseTree};

// ============================================================================
// ARITHMETIC
// ============================================================================

#[test]
fn test_matches_native_arithmetic() {
    let harness = Harness::new();
    for (expression, expected) in reference_cases() {
        assert_eq!(harness.eval(expression), Ok(expected), "{}", expression);
    }
}

#[test]
fn test_left_associativity() {
    let harness = Harness::new();
    assert_eq!(harness.eval("8-3-2"), Ok(3.0));
    assert_eq!(harness.eval("2-3+4"), Ok(3.0));
    assert_eq!(harness.eval("100/10/5"), Ok(2.0));
    assert_eq!(harness.eval("12/3*2"), Ok(8.0));
}

#[test]
fn test_long_chain() {
    let harness = Harness::new();
    let expression = vec!["1"; 1000].join(" - ");
    assert_eq!(harness.eval(&expression), Ok(1.0 - 999.0));
}

#[test]
fn test_unary_minus_policy() {
    let harness = Harness::new();
    assert_eq!(harness.eval("-(2+3)/2"), Ok(-2.5));
    assert_eq!(harness.eval("-5"), Ok(-5.0));
    assert_eq!(harness.eval("2*-3"), Ok(-6.0));
    assert_eq!(harness.eval("-(-(1))"), Ok(1.0));
    assert!(harness.is_syntax_error("--1"));
    assert!(harness.is_syntax_error("-(--1)"));
}

#[test]
fn test_division_by_zero() {
    let harness = Harness::new();
    assert_eq!(harness.eval("1/0"), Err(EngineError::DivisionByZero));
    assert_eq!(harness.eval("5/(3-3)*2"), Err(EngineError::DivisionByZero));
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_malformed_numbers() {
    let harness = Harness::new();
    for expression in ["1.2.2", "01", "2.", ".32"] {
        assert!(harness.is_invalid_character(expression), "{}", expression);
    }
}

#[test]
fn test_incomplete_expressions() {
    let harness = Harness::new();
    for expression in [
        "(1 + 2", "1 - ", "1  2", "1 * 2)", "1 / ", "1 / x", "1.2 % 2",
    ] {
        assert!(harness.is_syntax_error(expression), "{}", expression);
    }
}

// ============================================================================
// TREES
// ============================================================================

#[test]
fn test_reevaluating_tree_is_stable() {
    let harness = Harness::new();
    let tree = parse("(((-2 + 5) * 2 + 1) /2 -1 * (5 -3)) + 2").unwrap();
    let first = expr_engine::evaluate(&tree).unwrap();
    assert_eq!(first, 3.5);
    for _ in 0..10 {
        assert_eq!(expr_engine::evaluate(&tree), Ok(first));
    }
    assert_eq!(harness.eval("(((-2 + 5) * 2 + 1) /2 -1 * (5 -3)) + 2"), Ok(first));
}

#[test]
fn test_reloaded_tree_evaluates_identically() {
    let tree = parse("(1.2+1) * 2 / 3 - 3").unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let reloaded: ParseTree = serde_json::from_str(&json).unwrap();
    assert_eq!(
        expr_engine::evaluate(&reloaded),
        expr_engine::evaluate(&tree)
    );
}

#[test]
fn test_tree_dump_lists_every_node() {
    let tree = parse("3 + 5 * 7").unwrap();
    let dump = tree.to_string();
    assert_eq!(dump.lines().count(), tree.node_count());
    assert!(dump.starts_with("0: Expr\n"));
    assert!(dump.contains("  1: AddOp(+)"));
    assert!(dump.contains("MulOp(*)"));
}
