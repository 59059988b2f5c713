//! Test support: fluent construction of expected game records.
//!
//! Tests describe the records they expect with the `game(id).round(...)`
//! builder instead of spelling out the nested vectors by hand.

use crate::parser::ast::{Color, CubeCount, GameRecord, Round};

/// Start building an expected record for the given game id
pub fn game(id: u32) -> GameBuilder {
    GameBuilder {
        id,
        rounds: Vec::new(),
    }
}

/// Builder for expected [`GameRecord`] values
pub struct GameBuilder {
    id: u32,
    rounds: Vec<Round>,
}

impl GameBuilder {
    /// Append one round given as `(count, color)` pairs, in order
    pub fn round(mut self, cubes: &[(u32, Color)]) -> Self {
        let cubes = cubes
            .iter()
            .map(|&(count, color)| CubeCount::new(color, count))
            .collect();
        self.rounds.push(Round::new(cubes));
        self
    }

    pub fn build(self) -> GameRecord {
        GameRecord::new(self.id, self.rounds)
    }
}
