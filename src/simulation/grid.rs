use std::collections::hash_set;
use std::collections::HashSet;

use crate::simulation::cell::Cell;

/// Sparse set of live cells.
///
/// Bounds are not enforced here: the session's pixel mapping and the
/// engine's neighbor enumeration decide which coordinates matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    live: HashSet<Cell>,
}

impl GridState {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// Mark a cell live. No-op if it already is.
    pub fn add(&mut self, cell: Cell) {
        self.live.insert(cell);
    }

    /// Mark a cell dead. No-op if it already is.
    #[allow(dead_code)]
    pub fn remove(&mut self, cell: Cell) {
        self.live.remove(&cell);
    }

    /// Flip a cell, returns whether it is live afterwards
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.live.remove(&cell) {
            false
        } else {
            self.live.insert(cell);
            true
        }
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterate over the live cells in no particular order
    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live.iter().copied()
    }
}

impl FromIterator<Cell> for GridState {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            live: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for GridState {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.live.extend(iter);
    }
}

impl<'a> IntoIterator for &'a GridState {
    type Item = Cell;
    type IntoIter = std::iter::Copied<hash_set::Iter<'a, Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.live.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut grid = GridState::new();
        grid.add(Cell::new(3, 4));
        grid.add(Cell::new(3, 4));
        assert!(grid.contains(Cell::new(3, 4)));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_remove_dead_cell_is_noop() {
        let mut grid = GridState::new();
        grid.remove(Cell::new(1, 1));
        assert!(grid.is_empty());

        grid.add(Cell::new(1, 1));
        grid.remove(Cell::new(1, 1));
        grid.remove(Cell::new(1, 1));
        assert!(!grid.contains(Cell::new(1, 1)));
    }

    #[test]
    fn test_toggle() {
        let mut grid = GridState::new();
        assert!(grid.toggle(Cell::new(5, 5)));
        assert!(grid.contains(Cell::new(5, 5)));
        assert!(!grid.toggle(Cell::new(5, 5)));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_out_of_range_coordinates_are_accepted() {
        let mut grid = GridState::new();
        grid.add(Cell::new(-7, 1000));
        assert!(grid.contains(Cell::new(-7, 1000)));
    }

    #[test]
    fn test_clear() {
        let mut grid: GridState = [(0, 0), (1, 0), (2, 0)].into_iter().map(Cell::from).collect();
        assert_eq!(grid.population(), 3);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_iteration_reflects_current_state() {
        let mut grid = GridState::new();
        grid.add(Cell::new(0, 0));
        assert_eq!(grid.iter().count(), 1);

        grid.extend([Cell::new(1, 0), Cell::new(2, 0)]);
        let mut cells: Vec<Cell> = (&grid).into_iter().collect();
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);
    }
}
