//! Lexer module for the cube game record format
//!
//! Tokenization is handled entirely by logos; the parser consumes the
//! resulting tokens paired with their source byte ranges.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::Token;
