//! Square letter grid used while laying out words.
//!
//! Lookups take signed coordinates and treat anything outside the grid as a
//! black cell, so adjacency checks near the border never need special cases.
//! Growing the grid is a pure operation ([`Grid::resized`]) that hands back the
//! coordinate translation every tracked placement has to go through.

use crate::word_clue::{Direction, Placement};
use serde::Serialize;

/// Which word directions start at a numbered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellDirection {
    Across,
    Down,
    Both,
}

impl CellDirection {
    /// Combine with another word starting in the same cell.
    #[must_use]
    pub fn merge(current: Option<CellDirection>, direction: Direction) -> CellDirection {
        match (current, direction) {
            (None, Direction::Across) | (Some(CellDirection::Across), Direction::Across) => CellDirection::Across,
            (None, Direction::Down) | (Some(CellDirection::Down), Direction::Down) => CellDirection::Down,
            _ => CellDirection::Both,
        }
    }
}

/// One square of the grid.
///
/// Black cells never carry an answer, number or direction; the only way to
/// make a cell white is to give it a letter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Cell {
    white: bool,
    answer: Option<char>,
    number: Option<u32>,
    direction: Option<CellDirection>,
}

impl Cell {
    #[must_use]
    pub fn black() -> Cell {
        Cell::default()
    }

    #[must_use]
    pub fn is_white(&self) -> bool {
        self.white
    }

    #[must_use]
    pub fn answer(&self) -> Option<char> {
        self.answer
    }

    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    #[must_use]
    pub fn direction(&self) -> Option<CellDirection> {
        self.direction
    }

    fn clear_number(&mut self) {
        self.number = None;
        self.direction = None;
    }
}

/// Translation applied to coordinates when the grid grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shift(pub isize);

impl Shift {
    #[must_use]
    pub fn apply(self, placement: Placement) -> Placement {
        placement.shifted(self.0)
    }

    /// Shift equivalent to applying `self` then `next`.
    #[must_use]
    pub fn then(self, next: Shift) -> Shift {
        Shift(self.0 + next.0)
    }
}

/// Square matrix of cells, indexed `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// An all-black grid of side `dimension`.
    #[must_use]
    pub fn new(dimension: usize) -> Grid {
        Grid { cells: vec![vec![Cell::black(); dimension]; dimension] }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    fn index(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.dimension() && col < self.dimension()).then_some((row, col))
    }

    /// Whether `(row, col)` lies inside the grid.
    #[must_use]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        self.index(row, col).is_some()
    }

    #[must_use]
    pub fn get(&self, row: isize, col: isize) -> Option<&Cell> {
        self.index(row, col).map(|(r, c)| &self.cells[r][c])
    }

    fn get_mut(&mut self, row: isize, col: isize) -> Option<&mut Cell> {
        let (r, c) = self.index(row, col)?;
        Some(&mut self.cells[r][c])
    }

    /// Out-of-range coordinates are never white.
    #[must_use]
    pub fn is_white(&self, row: isize, col: isize) -> bool {
        self.get(row, col).is_some_and(Cell::is_white)
    }

    #[must_use]
    pub fn letter_at(&self, row: isize, col: isize) -> Option<char> {
        self.get(row, col).and_then(Cell::answer)
    }

    /// Whether `row` has no white cells. Rows outside the grid are clear.
    #[must_use]
    pub fn row_is_clear(&self, row: isize) -> bool {
        usize::try_from(row).ok()
            .and_then(|r| self.cells.get(r))
            .map_or(true, |cells| cells.iter().all(|cell| !cell.white))
    }

    /// Whether a word of `len` letters at `placement` lies fully inside the grid.
    #[must_use]
    pub fn fits(&self, placement: &Placement, len: usize) -> bool {
        len == 0 || (self.contains(placement.row, placement.col) && {
            let (end_row, end_col) = placement.cell_at(len - 1);
            self.contains(end_row, end_col)
        })
    }

    /// Write the letters of `word` starting at `placement`.
    ///
    /// Returns `false` (leaving the grid untouched) if the word does not fit.
    pub fn write_word(&mut self, word: &str, placement: &Placement) -> bool {
        if !self.fits(placement, word.chars().count()) {
            return false;
        }
        for (k, ch) in word.chars().enumerate() {
            let (row, col) = placement.cell_at(k);
            if let Some(cell) = self.get_mut(row, col) {
                cell.white = true;
                cell.answer = Some(ch);
            }
        }
        true
    }

    /// Give the cell at `(row, col)` a clue number and record a word starting there.
    ///
    /// Black or out-of-range cells are left alone.
    pub(crate) fn mark_start(&mut self, row: isize, col: isize, number: u32, direction: Direction) {
        if let Some(cell) = self.get_mut(row, col).filter(|cell| cell.white) {
            cell.number = Some(number);
            cell.direction = Some(CellDirection::merge(cell.direction, direction));
        }
    }

    pub(crate) fn clear_numbers(&mut self) {
        self.cells.iter_mut().flatten().for_each(Cell::clear_number);
    }

    /// A grid of twice the dimension with the current content moved `shift`
    /// cells down and right. New border cells are black.
    ///
    /// # Panics
    /// Debug builds assert that `shift` is non-negative and that the old content
    /// still fits after moving.
    #[must_use]
    pub fn resized(&self, shift: isize) -> (Grid, Shift) {
        let dim = self.dimension();
        let new_dim = (dim * 2).max(1);
        debug_assert!(shift >= 0, "shift must be non-negative");
        debug_assert!(
            shift.unsigned_abs() + dim <= new_dim,
            "shift {shift} pushes a {dim}-cell grid past {new_dim}"
        );

        let mut grown = Grid::new(new_dim);
        let offset = shift.unsigned_abs();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                grown.cells[r + offset][c + offset] = cell.clone();
            }
        }
        (grown, Shift(shift))
    }

    /// Keep doubling until a word of `len` letters at `placement` fits.
    ///
    /// The first resize moves content by the negative overhang of the candidate
    /// (zero if it only spills past the far edge). Returns the grown grid, the
    /// total shift to apply to every tracked placement (the candidate included)
    /// and the number of doublings performed.
    #[must_use]
    pub fn expanded_to_fit(&self, placement: &Placement, len: usize) -> (Grid, Shift, usize) {
        let mut grid = self.clone();
        let mut total = Shift::default();
        let mut candidate = *placement;
        let mut resizes = 0;

        while !grid.fits(&candidate, len) {
            let overhang = -(candidate.row.min(candidate.col).min(0));
            // a single doubling cannot absorb more overhang than the current side
            let step = overhang.min(grid.dimension() as isize);
            let (grown, shift) = grid.resized(step);
            grid = grown;
            candidate = shift.apply(candidate);
            total = total.then(shift);
            resizes += 1;
        }
        (grid, total, resizes)
    }
}
