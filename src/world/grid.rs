use crate::{pos, Cell, Pos, World};

/// Dense, bounded universe of `rows` by `cols` cells anchored at `(0, 0)`.
///
/// Everything beyond the border is permanently dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = vec![vec![Cell::Dead; cols]; rows];
        Self { rows, cols, cells }
    }

    #[cfg(test)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[cfg(test)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// gets the row and column of a position, if it lies inside the grid.
    fn get_local_pos(&self, Pos { x, y }: Pos) -> Option<(usize, usize)> {
        let row = usize::try_from(x).ok().filter(|&row| row < self.rows)?;
        let col = usize::try_from(y).ok().filter(|&col| col < self.cols)?;
        Some((row, col))
    }
}

impl World for Grid {
    fn get(&self, pos: Pos) -> Cell {
        match self.get_local_pos(pos) {
            Some((row, col)) => self.cells[row][col],
            None => Cell::Dead,
        }
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        if let Some((row, col)) = self.get_local_pos(pos) {
            self.cells[row][col] = cell;
        }
    }

    fn actives(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(x, row)| {
                row.iter()
                    .enumerate()
                    .filter_map(move |(y, cell)| cell.is_alive().then_some(pos!(x as i64, y as i64)))
            })
            .collect()
    }

    fn cleared(&self) -> Self {
        Self::new(self.rows, self.cols)
    }
}

#[test]
fn test_out_of_bounds_is_dropped() {
    let mut grid = Grid::new(4, 6);
    grid.set(pos!(3, 5), Cell::Alive);
    grid.set(pos!(4, 0), Cell::Alive);
    grid.set(pos!(0, 6), Cell::Alive);
    grid.set(pos!(-1, 2), Cell::Alive);
    assert_eq!(grid.actives(), vec![pos!(3, 5)]);
    assert_eq!(grid.get(pos!(4, 0)), Cell::Dead);
}

#[test]
fn test_actives_row_major() {
    let mut grid = Grid::new(3, 3);
    for pos in [pos!(2, 0), pos!(0, 2), pos!(1, 1)] {
        grid.set(pos, Cell::Alive);
    }
    assert_eq!(grid.actives(), vec![pos!(0, 2), pos!(1, 1), pos!(2, 0)]);
    assert_eq!(grid.population(), 3);
}

#[test]
fn test_cleared_keeps_bounds() {
    let mut grid = Grid::new(2, 5);
    grid.set(pos!(1, 1), Cell::Alive);
    let empty = grid.cleared();
    assert_eq!((empty.rows(), empty.cols()), (2, 5));
    assert_eq!(empty.population(), 0);
}
