//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces the full token sequence.
//! CONTEXT: This is the first stage of the parsing pipeline. A single regex
//! pulls out maximal runs of digits/dots and single operator or paren
//! characters; every run is then handed to the token classifiers in order
//! (number, operator, paren).
//!
//! Anything the regex does not match (whitespace, letters, `%`, ...) is
//! skipped. Such characters never become tokens, so they show up later as
//! syntax errors: "1 / x" scans as `1 /`.

use crate::error::{ParseError, ParseResult};
use crate::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;

static LEXEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9.]+|[+\-*/()]").expect("lexeme regex is valid"));

/// Classifiers tried in order; the first one that accepts the lexeme wins.
const CLASSIFIERS: [fn(&str) -> Option<Token>; 3] = [Token::number, Token::operator, Token::paren];

/// Converts `input` into tokens, failing on the first run that fits no token class.
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut last_end = 0;

    for found in LEXEME.find_iter(input) {
        log_skipped(&input[last_end..found.start()]);
        last_end = found.end();

        let lexeme = found.as_str();
        let token = CLASSIFIERS
            .iter()
            .find_map(|classify| classify(lexeme))
            .ok_or_else(|| ParseError::InvalidCharacter {
                lexeme: lexeme.to_string(),
            })?;
        tokens.push(token);
    }
    log_skipped(&input[last_end..]);

    log::trace!("tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}

fn log_skipped(gap: &str) {
    let skipped = gap.trim();
    if !skipped.is_empty() {
        log::debug!("tokenizer skipped unrecognized input {:?}", skipped);
    }
}
