use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{Cell, Pos, World};

/// Sparse, unbounded universe: only the coordinates of live cells are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Pos, MetroBuildHasher>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    /// returns false when the cell was already alive.
    pub fn insert(&mut self, pos: Pos) -> bool {
        self.cells.insert(pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().copied()
    }

    pub fn translated(&self, offset: Pos) -> Self {
        self.iter().map(|pos| pos + offset).collect()
    }

    /// live cells in ascending `(x, y)` order.
    pub fn sorted(&self) -> Vec<Pos> {
        let mut result: Vec<_> = self.iter().collect();
        result.sort_unstable();
        result
    }
}

impl FromIterator<Pos> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let cells = iter.into_iter().collect();
        Self { cells }
    }
}

impl Extend<Pos> for LiveSet {
    fn extend<I: IntoIterator<Item = Pos>>(&mut self, iter: I) {
        self.cells.extend(iter)
    }
}

impl World for LiveSet {
    fn get(&self, pos: Pos) -> Cell {
        self.contains(pos).into()
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        match cell {
            Cell::Alive => self.insert(pos),
            Cell::Dead => self.cells.remove(&pos),
        };
    }

    fn actives(&self) -> Vec<Pos> {
        self.iter().collect()
    }

    fn cleared(&self) -> Self {
        Self::new()
    }

    fn population(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    #[test]
    fn test_no_duplicates() {
        let mut set = LiveSet::new();
        assert!(set.insert(pos!(3, 4)));
        assert!(!set.insert(pos!(3, 4)));
        assert_eq!(set.len(), 1);

        let set: LiveSet = [pos!(0, 0), pos!(0, 0), pos!(1, 0)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_set_and_get() {
        let mut set = LiveSet::new();
        set.set(pos!(-7, 12), Cell::Alive);
        assert_eq!(set.get(pos!(-7, 12)), Cell::Alive);
        assert_eq!(set.get(pos!(12, -7)), Cell::Dead);
        set.set(pos!(-7, 12), Cell::Dead);
        assert!(set.is_empty());
    }

    #[test]
    fn test_value_equality_ignores_insertion_order() {
        let a: LiveSet = [pos!(0, 1), pos!(5, 5), pos!(-2, 3)].into_iter().collect();
        let b: LiveSet = [pos!(-2, 3), pos!(0, 1), pos!(5, 5)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_translated() {
        let set: LiveSet = [pos!(0, 0), pos!(1, 2)].into_iter().collect();
        let moved = set.translated(pos!(1 << 40, -(1 << 40)));
        assert!(moved.contains(pos!(1 << 40, -(1 << 40))));
        assert!(moved.contains(pos!((1 << 40) + 1, 2 - (1 << 40))));
        assert_eq!(set.len(), 2);
        assert!(set.contains(pos!(0, 0)));
    }

    #[test]
    fn test_sorted() {
        let set: LiveSet = [pos!(2, 0), pos!(0, 3), pos!(0, -1)].into_iter().collect();
        assert_eq!(set.sorted(), vec![pos!(0, -1), pos!(0, 3), pos!(2, 0)]);
    }
}
