use std::fmt;
use std::hash::Hash;

use itertools::Itertools;

use crate::error::{Error, Result};

pub trait Cell: Copy + Eq + Hash {
    fn empty() -> Self;
}

/// A single cell of a 3x3 grid, addressed by row and column.
///
/// Only constructible for in-bounds coordinates, so every `Move` names a real cell.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= 3 || col >= 3 {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Self { row: row as u8, col: col as u8 })
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 9);
        Self { row: (index / 3) as u8, col: (index % 3) as u8 }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row-major index into the cell array.
    pub fn index(&self) -> usize {
        self.row() * 3 + self.col()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board3x3<C: Cell> {
    pub cells: [C; 9],
}

impl<C: Cell> Board3x3<C> {
    pub fn empty() -> Self {
        Self::new([C::empty(); 9])
    }

    pub fn new(cells: [C; 9]) -> Self {
        Self { cells }
    }

    pub fn get(&self, cell: Move) -> C {
        self.cells[cell.index()]
    }

    pub fn winning_indices(&self) -> Option<&[usize; 3]> {
        Self::WIN_INDICES.iter().find(|indices| {
            self.cells[indices[0]] == self.cells[indices[1]] && self.cells[indices[1]] == self.cells[indices[2]] && self.cells[indices[0]] != C::empty()
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c != &C::empty())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells.iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == C::empty())
            .map(|(index, _)| Move::from_index(index))
            .collect_vec()
    }

    const WIN_INDICES: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
}
