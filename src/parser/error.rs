//! Error types for game record parsing
//!
//! The public surface is [`ParseError`]; [`RecordError`] is the carrier the
//! chumsky combinators produce internally before the failure is classified.

use std::fmt;
use std::ops::Range;

use crate::lexer::Token;
use crate::parser::ast::Color;

/// Type alias for token with source byte range
type TokenSpan = (Token, Range<usize>);

/// The reason a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The line does not begin with `Game <id>: `
    MalformedHeader,
    /// A round body contained no recognizable cube entries
    EmptyRound,
    /// A count was followed by a word that is not red, green or blue
    UnknownColor,
    /// Unexpected input remained after the parsed rounds
    TrailingGarbage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::MalformedHeader => "malformed header",
            ErrorKind::EmptyRound => "empty round",
            ErrorKind::UnknownColor => "unknown color",
            ErrorKind::TrailingGarbage => "trailing garbage",
        };
        f.write_str(text)
    }
}

/// A rejected line: the failure kind plus where matching stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Byte offset in the line where matching stopped
    pub offset: usize,
    /// The offending text, when any remains at the failure point
    pub fragment: String,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, offset: usize, fragment: impl Into<String>) -> Self {
        ParseError {
            kind,
            offset,
            fragment: fragment.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fragment.is_empty() {
            write!(f, "{} at offset {}", self.kind, self.offset)
        } else {
            write!(f, "{} at offset {}: {:?}", self.kind, self.offset, self.fragment)
        }
    }
}

impl std::error::Error for ParseError {}

/// Internal error carrier for the chumsky combinators
///
/// Records what was found and where. `kind` is set once a combinator has
/// enough context to classify the failure; classified errors win merges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordError {
    /// Byte range of the offending token, `None` at end of input
    pub(crate) span: Option<Range<usize>>,
    pub(crate) found: Option<Token>,
    pub(crate) kind: Option<ErrorKind>,
}

impl RecordError {
    /// Build an unclassified error from the token the parser stopped on
    pub(crate) fn found(found: Option<TokenSpan>) -> Self {
        let (found, span) = match found {
            Some((token, range)) => (Some(token), Some(range)),
            None => (None, None),
        };
        RecordError {
            span,
            found,
            kind: None,
        }
    }

    /// Classify an alternation failure at the color position: a word that
    /// reached it matched none of the recognized color literals
    pub(crate) fn promote_unknown_color(mut self) -> Self {
        if self.kind.is_none() {
            if let Some(Token::Word(word)) = &self.found {
                if !Color::ALL.iter().any(|color| color.word() == word.as_str()) {
                    self.kind = Some(ErrorKind::UnknownColor);
                }
            }
        }
        self
    }
}

impl chumsky::error::Error<TokenSpan> for RecordError {
    type Span = Range<usize>;
    type Label = ErrorKind;

    fn expected_input_found<Iter: IntoIterator<Item = Option<TokenSpan>>>(
        _span: Self::Span,
        _expected: Iter,
        found: Option<TokenSpan>,
    ) -> Self {
        RecordError::found(found)
    }

    fn with_label(mut self, label: Self::Label) -> Self {
        self.kind.get_or_insert(label);
        self
    }

    fn merge(self, other: Self) -> Self {
        if self.kind.is_some() || other.kind.is_none() {
            self
        } else {
            other
        }
    }
}
