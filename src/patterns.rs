use std::str::FromStr;

use crate::{error::ConfigError, pos, Cell, LiveSet, Pos, World};

/// Hand-authored seed patterns, as `(x, y)` offsets from the placement point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Spaceship moving one cell down and right every 4 generations.
    Glider,
    /// Gosper glider gun, emits a glider every 30 generations.
    GliderGun,
    Blinker,
    Block,
}

const GLIDER: &[(i64, i64)] = &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];

#[rustfmt::skip]
const GLIDER_GUN: &[(i64, i64)] = &[
    (5, 1), (5, 2), (6, 1), (6, 2),
    (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
    (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17), (7, 17),
    (6, 18),
    (3, 21), (4, 21), (5, 21), (3, 22), (4, 22), (5, 22),
    (2, 23), (6, 23),
    (1, 25), (2, 25), (6, 25), (7, 25),
    (3, 35), (4, 35), (3, 36), (4, 36),
];

const BLINKER: &[(i64, i64)] = &[(0, 0), (0, 1), (0, 2)];

const BLOCK: &[(i64, i64)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

impl Pattern {
    pub fn all() -> [Pattern; 4] {
        [Pattern::Glider, Pattern::GliderGun, Pattern::Blinker, Pattern::Block]
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::GliderGun => "gun",
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
        }
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        let cells = match self {
            Pattern::Glider => GLIDER,
            Pattern::GliderGun => GLIDER_GUN,
            Pattern::Blinker => BLINKER,
            Pattern::Block => BLOCK,
        };
        cells.iter().map(|&(x, y)| pos!(x, y))
    }

    /// A fresh live set holding this pattern translated by `offset`.
    pub fn spawn(self, offset: Pos) -> LiveSet {
        self.cells().map(|pos| pos + offset).collect()
    }

    pub fn place_on<W>(self, world: &mut W, offset: Pos)
    where
        W: World,
    {
        for pos in self.cells() {
            world.set(pos + offset, Cell::Alive);
        }
    }

    /// `(padding, max_view)` that keeps the pattern's activity on screen.
    pub fn framing(self) -> (usize, usize) {
        match self {
            Pattern::GliderGun => (5, 40),
            _ => (2, 20),
        }
    }
}

impl FromStr for Pattern {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "glider-gun" | "gosper" => Ok(Pattern::GliderGun),
            _ => Pattern::all()
                .into_iter()
                .find(|pattern| pattern.name() == lower)
                .ok_or_else(|| ConfigError::UnknownPattern(name.to_string())),
        }
    }
}
