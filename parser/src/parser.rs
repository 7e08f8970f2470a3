//! FILENAME: parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a token sequence into a ParseTree.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes the
//! tokens from the tokenizer and builds the tree the evaluator folds.
//!
//! GRAMMAR (lowest precedence first):
//!   expression --> term ( ("+" | "-") term )*
//!   term       --> factor ( ("*" | "/") factor )*
//!   factor     --> NUMBER | "(" expression ")" | negative
//!   negative   --> "-" ( NUMBER | "(" expression ")" )
//!
//! Precedence comes from the layering alone. Repetition (instead of right
//! recursion) keeps every operand of a chain as a sibling, so the evaluator
//! can fold `8 - 3 - 2` as `(8 - 3) - 2`.
//!
//! One token of lookahead is enough everywhere; the parser never backtracks.

use crate::config::ParserConfig;
use crate::cursor::TokenCursor;
use crate::error::{ParseError, ParseResult};
use crate::lexer::tokenize;
use crate::token::{Operator, OperatorClass, Token, TokenKind};
use crate::tree::{NonTerminal, ParseTree};

/// The Parser holds the token cursor and the current nesting depth.
pub struct Parser {
    cursor: TokenCursor,
    max_depth: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, &ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: &ParserConfig) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            max_depth: config.max_depth,
            depth: 0,
        }
    }

    /// Parses the whole token sequence into one tree.
    /// Consumes the parser; build a new one per input.
    pub fn parse(mut self) -> ParseResult<ParseTree> {
        if self.cursor.is_exhausted() {
            return Err(ParseError::syntax(0, "Empty expression"));
        }

        let tree = self.parse_expression()?;

        // Ensure we consumed all tokens
        if let Some(token) = self.cursor.current() {
            return Err(ParseError::syntax(
                self.cursor.position(),
                format!("Unexpected token after expression: {}", token),
            ));
        }

        Ok(tree)
    }

    /// Parses additive chains (+ and -).
    fn parse_expression(&mut self) -> ParseResult<ParseTree> {
        let first = self.parse_term()?;
        let mut rest = Vec::new();

        while let Some(op) = self.accept_operator(OperatorClass::Additive) {
            let operand = self.parse_term()?;
            rest.push((op, operand));
        }

        Ok(ParseTree::chain(NonTerminal::Expr, first, rest))
    }

    /// Parses multiplicative chains (* and /).
    fn parse_term(&mut self) -> ParseResult<ParseTree> {
        let first = self.parse_factor()?;
        let mut rest = Vec::new();

        while let Some(op) = self.accept_operator(OperatorClass::Multiplicative) {
            let operand = self.parse_factor()?;
            rest.push((op, operand));
        }

        Ok(ParseTree::chain(NonTerminal::Term, first, rest))
    }

    /// Parses a number, a parenthesized group, or a negated number/group.
    fn parse_factor(&mut self) -> ParseResult<ParseTree> {
        match self.cursor.current().copied() {
            Some(token @ Token::Number(_)) => {
                self.cursor.advance();
                Ok(ParseTree::factor(ParseTree::terminal(token)))
            }

            Some(Token::LParen) => {
                let group = self.parse_group()?;
                Ok(ParseTree::factor(group))
            }

            Some(minus @ Token::Operator(Operator::Subtract)) => {
                // Unary minus binds to exactly one number or group: "--1" is rejected.
                let operand = match self.cursor.next().map(Token::kind) {
                    Some(TokenKind::Number) | Some(TokenKind::LParen) => {
                        self.enter()?;
                        self.cursor.advance();
                        let operand = self.parse_factor();
                        self.leave();
                        operand?
                    }
                    _ => {
                        return Err(ParseError::syntax(
                            self.cursor.position() + 1,
                            "Expected a number or '(' after unary '-'",
                        ))
                    }
                };
                Ok(ParseTree::factor(ParseTree::negative(minus, operand)))
            }

            Some(token) => Err(ParseError::syntax(
                self.cursor.position(),
                format!("Expected an operand, found {}", token),
            )),

            None => Err(ParseError::syntax(
                self.cursor.position(),
                "Unexpected end of expression",
            )),
        }
    }

    /// Parses "(" expression ")" with the cursor on the opening paren.
    /// The parens themselves are not kept in the tree.
    fn parse_group(&mut self) -> ParseResult<ParseTree> {
        self.enter()?;
        self.cursor.advance();
        let inner = self.parse_expression();
        self.leave();
        let inner = inner?;

        match self.cursor.current() {
            Some(Token::RParen) => {
                self.cursor.advance();
                Ok(inner)
            }
            Some(token) => Err(ParseError::syntax(
                self.cursor.position(),
                format!("Expected ')', found {}", token),
            )),
            None => Err(ParseError::syntax(
                self.cursor.position(),
                "Expected ')', found end of expression",
            )),
        }
    }

    /// Consumes the current token if it is an operator of `class`.
    fn accept_operator(&mut self, class: OperatorClass) -> Option<Token> {
        match self.cursor.current().copied() {
            Some(Token::Operator(op)) if op.class() == class => self.cursor.advance(),
            _ => None,
        }
    }

    fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Convenience function to tokenize and parse an expression string directly.
pub fn parse(input: &str) -> ParseResult<ParseTree> {
    parse_with_config(input, &ParserConfig::default())
}

pub fn parse_with_config(input: &str, config: &ParserConfig) -> ParseResult<ParseTree> {
    let tokens = tokenize(input)?;
    let token_count = tokens.len();
    let tree = Parser::with_config(tokens, config).parse()?;
    log::debug!(
        "parsed {} tokens into {} nodes",
        token_count,
        tree.node_count()
    );
    Ok(tree)
}
