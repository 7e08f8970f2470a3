//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the expression tokenizer.
//! CONTEXT: Tokens are the atomic units produced by the tokenizer and consumed
//! by the parser. A token can only be built from a lexeme that passes its
//! lexical rule, so an invalid token never exists.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number literal shape: no leading zeros, optional fraction with at least one digit.
static NUMBER_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0|[1-9][0-9]*)(\.[0-9]+)?$").expect("number regex is valid"));

/// Arithmetic operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Operator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
}

/// Precedence group an operator belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum OperatorClass {
    /// `+` and `-` (lowest precedence)
    Additive,
    /// `*` and `/`
    Multiplicative,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn class(self) -> OperatorClass {
        match self {
            Operator::Add | Operator::Subtract => OperatorClass::Additive,
            Operator::Multiply | Operator::Divide => OperatorClass::Multiplicative,
        }
    }
}

/// Semantic kind of a token, as seen by the grammar.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    AddOp,
    MulOp,
    LParen,
    RParen,
}

/// Tokens recognized by the tokenizer.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LParen,
    RParen,
}

impl Token {
    /// Builds a number token if `lexeme` is a well-formed literal.
    pub fn number(lexeme: &str) -> Option<Token> {
        if !NUMBER_SHAPE.is_match(lexeme) {
            return None;
        }
        lexeme.parse::<f64>().ok().map(Token::Number)
    }

    /// Builds an operator token if `lexeme` is one of `+ - * /`.
    pub fn operator(lexeme: &str) -> Option<Token> {
        Operator::from_symbol(lexeme).map(Token::Operator)
    }

    /// Builds a paren token if `lexeme` is `(` or `)`.
    pub fn paren(lexeme: &str) -> Option<Token> {
        match lexeme {
            "(" => Some(Token::LParen),
            ")" => Some(Token::RParen),
            _ => None,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(op) => match op.class() {
                OperatorClass::Additive => TokenKind::AddOp,
                OperatorClass::Multiplicative => TokenKind::MulOp,
            },
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
        }
    }

    /// Numeric literal carried by the token, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
            Operator::Divide => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number => write!(f, "Number"),
            TokenKind::AddOp => write!(f, "AddOp"),
            TokenKind::MulOp => write!(f, "MulOp"),
            TokenKind::LParen => write!(f, "LParen"),
            TokenKind::RParen => write!(f, "RParen"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "Number({})", n),
            Token::Operator(op) => write!(f, "{}({})", self.kind(), op),
            Token::LParen => write!(f, "LParen"),
            Token::RParen => write!(f, "RParen"),
        }
    }
}
