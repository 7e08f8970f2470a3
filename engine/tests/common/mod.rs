//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for expression engine integration tests.

#![allow(dead_code)]

use expr_engine::{parse, parse_and_evaluate, EngineError, EngineResult, Evaluator, ParseError};

/// Expressions from the original calculator test corpus, paired with the
/// value Rust's own f64 arithmetic gives for the same expression.
pub fn reference_cases() -> Vec<(&'static str, f64)> {
    vec![
        ("1+1", 1.0 + 1.0),
        ("1-1", 1.0 - 1.0),
        ("1*2", 1.0 * 2.0),
        ("1/2", 1.0 / 2.0),
        ("3 + 5 * 7", 3.0 + 5.0 * 7.0),
        ("4 + 3 * -7 -4", 4.0 + 3.0 * -7.0 - 4.0),
        ("(1.2+1) * 2 / 3 - 3", (1.2 + 1.0) * 2.0 / 3.0 - 3.0),
        ("(1-2)*2/4 * (-2)", (1.0 - 2.0) * 2.0 / 4.0 * (-2.0)),
        (
            "(3+5)*2.1*(1.1234-3)/2.2234",
            (3.0 + 5.0) * 2.1 * (1.1234 - 3.0) / 2.2234,
        ),
        (
            "(((-2 + 5) * 2 + 1) /2 -1 * (5 -3)) + 2",
            (((-2.0 + 5.0) * 2.0 + 1.0) / 2.0 - 1.0 * (5.0 - 3.0)) + 2.0,
        ),
        ("-3+5*2*-1/1-1", -3.0 + 5.0 * 2.0 * -1.0 / 1.0 - 1.0),
        ("-(2+3) / 2", -(2.0 + 3.0) / 2.0),
    ]
}

/// Runs the full pipeline through an explicit parse + evaluate, so the
/// integration tests exercise the same path a library consumer would.
pub struct Harness {
    evaluator: Evaluator,
}

impl Harness {
    pub fn new() -> Self {
        Harness {
            evaluator: Evaluator::new(),
        }
    }

    pub fn eval(&self, expression: &str) -> EngineResult<f64> {
        let tree = parse(expression)?;
        let via_tree = self.evaluator.evaluate(&tree);
        assert_eq!(
            via_tree,
            parse_and_evaluate(expression),
            "pipeline mismatch for {:?}",
            expression
        );
        via_tree
    }

    pub fn is_invalid_character(&self, expression: &str) -> bool {
        matches!(
            self.eval(expression),
            Err(EngineError::Parse(ParseError::InvalidCharacter { .. }))
        )
    }

    pub fn is_syntax_error(&self, expression: &str) -> bool {
        matches!(
            self.eval(expression),
            Err(EngineError::Parse(ParseError::Syntax { .. }))
        )
    }
}
