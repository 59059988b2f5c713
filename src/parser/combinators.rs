//! Parser combinator functions for building the game record parser.

use std::ops::Range;

use chumsky::prelude::*;

use crate::lexer::Token;
use crate::parser::ast::{Color, CubeCount, Round};
use crate::parser::error::RecordError;

/// Type alias for token with source byte range
pub(crate) type TokenSpan = (Token, Range<usize>);

/// Helper: match a specific token kind, ignoring the range
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, (), Error = RecordError> + Clone {
    filter(move |(tok, _): &TokenSpan| tok == &t).ignored()
}

/// A run of spaces of any length
pub(crate) fn spaces() -> impl Parser<TokenSpan, (), Error = RecordError> + Clone {
    filter(|(tok, _): &TokenSpan| tok.is_whitespace()).ignored()
}

/// Exactly one space, as required between a count and its color word
pub(crate) fn one_space() -> impl Parser<TokenSpan, (), Error = RecordError> + Clone {
    filter(|(tok, range): &TokenSpan| tok.is_whitespace() && range.len() == 1).ignored()
}

/// An unsigned integer
pub(crate) fn number() -> impl Parser<TokenSpan, u32, Error = RecordError> + Clone {
    filter_map(|_span, (tok, range): TokenSpan| match tok {
        Token::Number(value) => Ok(value),
        other => Err(RecordError::found(Some((other, range)))),
    })
}

/// One color literal mapped to its constructor
fn color_word(word: &'static str, color: Color) -> impl Parser<TokenSpan, Color, Error = RecordError> + Clone {
    filter(move |(tok, _): &TokenSpan| matches!(tok, Token::Word(w) if w.as_str() == word))
        .to(color)
}

/// A color word: the three recognizers are tried in a fixed order and the
/// first one that matches wins
pub(crate) fn color() -> impl Parser<TokenSpan, Color, Error = RecordError> + Clone {
    color_word("red", Color::Red)
        .or(color_word("blue", Color::Blue))
        .or(color_word("green", Color::Green))
        .map_err(RecordError::promote_unknown_color)
}

/// One cube entry: optional leading space, a count, one space, a color word
pub(crate) fn cube_entry() -> impl Parser<TokenSpan, CubeCount, Error = RecordError> + Clone {
    spaces()
        .or_not()
        .ignore_then(number())
        .then_ignore(one_space())
        .then(color())
        .map(|(count, color)| CubeCount::new(color, count))
}

/// One round: cube entries separated by commas, at least one
pub(crate) fn round() -> impl Parser<TokenSpan, Round, Error = RecordError> + Clone {
    cube_entry()
        .separated_by(token(Token::Comma))
        .at_least(1)
        .map(Round::new)
}
