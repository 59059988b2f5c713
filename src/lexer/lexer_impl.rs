//! Implementation of the cube game record lexer
//!
//! This module provides convenience functions for tokenizing record lines.
//! The actual tokenization is handled entirely by logos.

use crate::lexer::tokens::Token;
use logos::Logos;

/// Convenience function to tokenize a line and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Tokenize a line and collect tokens with their source byte ranges
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
