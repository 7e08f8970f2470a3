//! FILENAME: parser/src/cursor.rs
//! PURPOSE: Forward-only cursor over a materialized token sequence.
//! CONTEXT: Gives the parser its one-token lookahead (`current` and `next`)
//! without threading an iterator through the parser state.

use crate::token::Token;

#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenCursor {
            tokens,
            position: 0,
        }
    }

    /// The token under the cursor, `None` once input is exhausted.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// The token after `current`.
    pub fn next(&self) -> Option<&Token> {
        self.tokens.get(self.position + 1)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
