//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the arithmetic expression parser.
//! CONTEXT: This crate exposes the tokenizer, parser, and parse tree
//! needed to turn expression strings into trees the engine can fold.
//!
//! PIPELINE: Expression String --> Tokenizer --> Tokens --> Parser --> ParseTree --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Numbers: 42, 0.5, 3.14 (no leading zeros, no bare dots)
//! - Arithmetic: +, -, *, /
//! - Parentheses for grouping
//! - Unary negation of a number or a group: -5, -(2 + 3)

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod tree;


// Re-export commonly used types for convenience
pub use config::ParserConfig;
pub use error::{ParseError, ParseResult};
pub use lexer::tokenize;
pub use parser::{parse, parse_with_config, Parser};
pub use token::{Operator, OperatorClass, Token, TokenKind};
pub use tree::{FoldKind, Label, NonTerminal, ParseTree};
