//! Parser module for the cube game record format
//!
//! Consumes the token stream produced by the lexer and assembles one
//! `GameRecord` per line, bottom-up: integers, color-tagged cube counts,
//! rounds, then the full record.

pub mod api;
pub mod ast;
pub mod combinators;
pub mod error;


pub use api::parse_line;
pub use ast::{Color, CubeCount, GameRecord, Round};
pub use error::{ErrorKind, ParseError};
