//! Public API for parsing game record lines.

use std::ops::Range;

use chumsky::prelude::*;

use crate::lexer::{tokenize_with_spans, Token};
use crate::parser::ast::{GameRecord, Round};
use crate::parser::combinators::{round, spaces, TokenSpan};
use crate::parser::error::{ErrorKind, ParseError, RecordError};

/// Parse one line of puzzle input into a [`GameRecord`].
///
/// The line may carry a trailing newline (and carriage return), which is
/// stripped before lexing. On failure the error identifies the failure
/// kind and the offset where matching stopped; no partial record is
/// produced. The function is pure and takes no locks, so independent
/// lines can be parsed from any number of threads.
pub fn parse_line(line: &str) -> Result<GameRecord, ParseError> {
    let text = line.strip_suffix('\n').unwrap_or(line);
    let text = text.strip_suffix('\r').unwrap_or(text);

    let tokens = tokenize_with_spans(text);
    let (id, rest) = parse_header(text, &tokens)?;

    let mut rounds = Vec::new();
    for (body, offset) in isolate_round_bodies(rest, text.len()) {
        rounds.push(parse_round_body(text, body, offset)?);
    }

    Ok(GameRecord::new(id, rounds))
}

/// Recognize the fixed `Game <id>: ` header by walking the token stream
/// directly; the remainder of the stream is the round list.
///
/// The id must be a positive integer. Exactly one space follows the
/// keyword; at least one space follows the colon.
fn parse_header<'t>(
    source: &str,
    tokens: &'t [TokenSpan],
) -> Result<(u32, &'t [TokenSpan]), ParseError> {
    let offset_at = |index: usize| {
        tokens
            .get(index)
            .map(|(_, range)| range.start)
            .unwrap_or(source.len())
    };
    let stop = |offset: usize| {
        ParseError::new(
            ErrorKind::MalformedHeader,
            offset,
            source.get(offset..).unwrap_or(""),
        )
    };

    if !matches!(tokens.first(), Some((Token::Game, _))) {
        return Err(stop(offset_at(0)));
    }
    match tokens.get(1) {
        Some((Token::Whitespace, range)) if range.len() == 1 => {}
        _ => return Err(stop(offset_at(1))),
    }
    let id = match tokens.get(2) {
        Some((Token::Number(id), _)) if *id > 0 => *id,
        Some((Token::Number(_), range)) => return Err(stop(range.start)),
        _ => return Err(stop(offset_at(2))),
    };
    if !matches!(tokens.get(3), Some((Token::Colon, _))) {
        return Err(stop(offset_at(3)));
    }
    if !matches!(tokens.get(4), Some((Token::Whitespace, _))) {
        return Err(stop(offset_at(4)));
    }

    Ok((id, &tokens[5..]))
}

/// Isolate round bodies: scan forward splitting at semicolons, keeping the
/// byte position just past each delimiter so an empty body can still be
/// located in the line.
fn isolate_round_bodies(tokens: &[TokenSpan], end_of_line: usize) -> Vec<(&[TokenSpan], usize)> {
    let mut bodies = Vec::new();
    let mut begin = 0;
    let mut cursor = tokens
        .first()
        .map(|(_, range)| range.start)
        .unwrap_or(end_of_line);

    for (index, (token, range)) in tokens.iter().enumerate() {
        if matches!(token, Token::Semicolon) {
            bodies.push((&tokens[begin..index], cursor));
            begin = index + 1;
            cursor = range.end;
        }
    }
    bodies.push((&tokens[begin..], cursor));
    bodies
}

/// Parse one isolated round body; a round must contain at least one entry.
fn parse_round_body(
    source: &str,
    body: &[TokenSpan],
    fallback: usize,
) -> Result<Round, ParseError> {
    let content_start = body
        .iter()
        .find(|(token, _)| !token.is_whitespace())
        .map(|(_, range)| range.start);

    let start = match content_start {
        Some(start) => start,
        None => return Err(ParseError::new(ErrorKind::EmptyRound, fallback, "")),
    };

    round()
        .then_ignore(spaces().or_not())
        .then_ignore(end())
        .parse(body.to_vec())
        .map_err(|errors| classify_round_failure(source, start, errors))
}

/// Map a chumsky failure over one round body to the public taxonomy.
///
/// A pre-classified kind (unknown color) wins. Otherwise, nothing
/// recognizable from the start of the body is an empty round, while a
/// failure past a parsed prefix is trailing garbage.
fn classify_round_failure(
    source: &str,
    content_start: usize,
    errors: Vec<RecordError>,
) -> ParseError {
    let error = errors
        .iter()
        .find(|error| error.kind.is_some())
        .or_else(|| errors.first())
        .cloned();

    let error = match error {
        Some(error) => error,
        None => return ParseError::new(ErrorKind::EmptyRound, content_start, ""),
    };

    match (error.kind, error.span) {
        (Some(kind), Some(range)) => {
            ParseError::new(kind, range.start, slice(source, &range))
        }
        (Some(kind), None) => ParseError::new(kind, source.len(), ""),
        (None, Some(range)) if range.start <= content_start => ParseError::new(
            ErrorKind::EmptyRound,
            content_start,
            source.get(content_start..).unwrap_or(""),
        ),
        (None, Some(range)) => ParseError::new(
            ErrorKind::TrailingGarbage,
            range.start,
            source.get(range.start..).unwrap_or(""),
        ),
        (None, None) => ParseError::new(ErrorKind::EmptyRound, source.len(), ""),
    }
}

fn slice<'s>(source: &'s str, range: &Range<usize>) -> &'s str {
    source.get(range.start..range.end).unwrap_or("")
}
