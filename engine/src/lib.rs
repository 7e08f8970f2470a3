//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Wires the parser crate to the evaluator and re-exports the
//! types a caller needs.

pub mod error;
pub mod evaluator;

pub use error::{EngineError, EngineResult};
pub use evaluator::{evaluate, Evaluator};
pub use expr_parser::{parse, ParseError, ParseTree, ParserConfig};

/// Tokenizes, parses and evaluates `expression`.
pub fn parse_and_evaluate(expression: &str) -> EngineResult<f64> {
    parse_and_evaluate_with(expression, &ParserConfig::default())
}

/// Same as [`parse_and_evaluate`] with explicit parser settings.
pub fn parse_and_evaluate_with(expression: &str, config: &ParserConfig) -> EngineResult<f64> {
    let result = expr_parser::parse_with_config(expression, config)
        .map_err(EngineError::from)
        .and_then(|tree| evaluate(&tree));

    match &result {
        Ok(value) => log::debug!("{:?} = {}", expression, value),
        Err(e) => log::debug!("{:?} failed: {}", expression, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_evaluates_expressions() {
        assert_eq!(parse_and_evaluate("1 + 2 * 3"), Ok(7.0));
    }

    #[test]
    fn it_wraps_parse_errors() {
        assert!(matches!(
            parse_and_evaluate("1 +"),
            Err(EngineError::Parse(ParseError::Syntax { .. }))
        ));
        assert!(matches!(
            parse_and_evaluate("2."),
            Err(EngineError::Parse(ParseError::InvalidCharacter { .. }))
        ));
    }

    #[test]
    fn it_honours_parser_config() {
        let config = ParserConfig { max_depth: 1 };
        assert_eq!(parse_and_evaluate_with("(1)", &config), Ok(1.0));
        assert_eq!(
            parse_and_evaluate_with("((1))", &config),
            Err(EngineError::Parse(ParseError::NestingTooDeep { limit: 1 }))
        );
    }
}
