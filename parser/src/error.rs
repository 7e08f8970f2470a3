//! FILENAME: parser/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    /// A lexical run that is neither a number, an operator nor a paren.
    #[error("Invalid character sequence: `{lexeme}`")]
    InvalidCharacter { lexeme: String },

    /// `position` is the index of the offending token (or the token count at end of input).
    #[error("Syntax error at token {position}: {message}")]
    Syntax { position: usize, message: String },

    #[error("Expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            position,
            message: message.into(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
