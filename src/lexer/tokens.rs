//! Token definitions for the cube game record format
//!
//! All tokens that can appear in a game record line, defined with the logos
//! derive macro. `Number` and `Word` carry their source value as a payload
//! so the parser never has to re-read the input text.
use logos::Logos;

/// All possible tokens in a game record line
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// The keyword opening a record header
    #[token("Game")]
    Game,

    #[token(":")]
    Colon,

    /// Round delimiter
    #[token(";")]
    Semicolon,

    /// Cube entry delimiter within a round
    #[token(",")]
    Comma,

    /// A run of one or more spaces; the span keeps the run length
    #[regex(r" +")]
    Whitespace,

    /// An unsigned integer (maximal digit run)
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u32>().ok())]
    Number(u32),

    /// A bare word, e.g. a color name
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Word(String),

    /// Catch-all for any other character, so stray input surfaces as a
    /// parse failure instead of being silently dropped
    #[regex(r"[^\n]", priority = 0)]
    Unknown,
}

impl Token {
    /// Check if this token is a run of spaces
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}
