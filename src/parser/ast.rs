//! Data model for parsed game records
//!
//! All types are immutable value records built in one pass from a source
//! line and never mutated afterwards. `Display` renders the canonical
//! record text, which re-parses to an equal value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three cube colors a record can mention (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Every recognized color, in the order the alternatives are tried
    pub const ALL: [Color; 3] = [Color::Red, Color::Blue, Color::Green];

    /// The literal word for this color in record text
    pub fn word(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A quantity of cubes of a single color shown in one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeCount {
    pub color: Color,
    pub count: u32,
}

impl CubeCount {
    pub fn new(color: Color, count: u32) -> Self {
        CubeCount { color, count }
    }
}

impl fmt::Display for CubeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.color)
    }
}

/// One semicolon-delimited group of cube counts within a game line
///
/// Duplicate colors are structurally permitted and kept as parsed; callers
/// that want merged quantities use [`Round::total_of`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub cubes: Vec<CubeCount>,
}

impl Round {
    pub fn new(cubes: Vec<CubeCount>) -> Self {
        Round { cubes }
    }

    /// Total cubes of one color in this round, summing duplicate entries
    pub fn total_of(&self, color: Color) -> u32 {
        self.cubes
            .iter()
            .filter(|cube| cube.color == color)
            .map(|cube| cube.count)
            .sum()
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cube) in self.cubes.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cube)?;
        }
        Ok(())
    }
}

/// The full parsed representation of one input line: an id plus its
/// ordered rounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: u32,
    pub rounds: Vec<Round>,
}

impl GameRecord {
    pub fn new(id: u32, rounds: Vec<Round>) -> Self {
        GameRecord { id, rounds }
    }

    /// Largest number of cubes of one color shown in any single round
    pub fn max_count(&self, color: Color) -> u32 {
        self.rounds
            .iter()
            .map(|round| round.total_of(color))
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game {}:", self.id)?;
        for (index, round) in self.rounds.iter().enumerate() {
            if index > 0 {
                f.write_str(";")?;
            }
            write!(f, " {}", round)?;
        }
        Ok(())
    }
}
