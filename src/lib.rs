//! # cubegame
//!
//! A parser for the cube game record format: line-oriented puzzle input
//! where each line records the cube draws revealed during one game, e.g.
//!
//!   Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
//!
//! One line in, one structured record or one typed error out. See the
//! [parser module](crate::parser) for the entry point and the
//! [processor module](crate::processor) for whole-input handling.

pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;
