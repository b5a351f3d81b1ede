use crate::Pos;

pub const ALIVE_CHAR: char = 'O';
pub const DEAD_CHAR: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => ALIVE_CHAR,
            Cell::Dead => DEAD_CHAR,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Storage for the live cells of one generation.
///
/// A generation is never mutated once it has been handed to the engine, the
/// next one is built from `cleared` and filled with `set`.
pub trait World: Clone {
    fn get(&self, pos: Pos) -> Cell;
    /// Positions a world cannot hold are ignored.
    fn set(&mut self, pos: Pos, cell: Cell);
    fn actives(&self) -> Vec<Pos>;
    /// An empty world with the same bounds as this one.
    fn cleared(&self) -> Self;

    fn population(&self) -> usize {
        self.actives().len()
    }
}

pub use grid::Grid;
mod grid;

pub use live_set::LiveSet;
mod live_set;

#[test]
fn test_cell_glyph() {
    assert_eq!(Cell::from(true).glyph(), 'O');
    assert_eq!(Cell::default().glyph(), '.');
}
