//! Clue numbers.
//!
//! During the search a word's start cell is numbered the first time any word
//! starts there, from a running counter. Once the search is over the numbers
//! are reassigned in row-major order so the puzzle reads 1, 2, 3, ...

use crate::grid::Grid;
use crate::word_clue::Placement;
use std::collections::BTreeMap;

/// Number the start cell of `placement`, reusing an existing number if the cell
/// already has one. Returns the clue number now held by the placement.
pub(crate) fn assign_start_number(grid: &mut Grid, placement: &mut Placement, next_number: &mut u32) -> u32 {
    let number = match grid.get(placement.row, placement.col).and_then(|cell| cell.number()) {
        Some(existing) => existing,
        None => {
            let fresh = *next_number;
            *next_number += 1;
            fresh
        }
    };
    grid.mark_start(placement.row, placement.col, number, placement.direction);
    placement.clue_number = number;
    number
}

/// Renumber every start cell in row-major order, starting at 1.
///
/// Cell numbers and directions are rebuilt from `placements` alone, so running
/// this twice gives the same result. Returns the number of distinct clue numbers.
pub fn renumber(grid: &mut Grid, placements: &mut [Option<Placement>]) -> u32 {
    // (row, col) ordering of a BTreeMap is exactly row-major order
    let mut starts: BTreeMap<(isize, isize), u32> = placements.iter()
        .flatten()
        .map(|p| ((p.row, p.col), 0))
        .collect();
    for (number, slot) in (1..).zip(starts.values_mut()) {
        *slot = number;
    }

    grid.clear_numbers();
    for placement in placements.iter_mut().flatten() {
        let number = starts[&(placement.row, placement.col)];
        placement.clue_number = number;
        grid.mark_start(placement.row, placement.col, number, placement.direction);
    }

    starts.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellDirection;
    use crate::word_clue::Direction;

    fn sample() -> (Grid, Vec<Option<Placement>>) {
        let mut grid = Grid::new(5);
        let words = [
            ("TEA", Placement::new(0, 2, Direction::Down)),
            ("CAT", Placement::new(0, 0, Direction::Across)),
            ("AHA", Placement::new(2, 0, Direction::Across)),
            ("CRAB", Placement::new(0, 0, Direction::Down)),
        ];
        for (word, placement) in &words {
            grid.write_word(word, placement);
        }
        (grid, words.iter().map(|(_, p)| Some(*p)).collect())
    }

    #[test]
    fn test_assign_reuses_existing_number() {
        let (mut grid, _) = sample();
        let mut next = 1;
        let mut cat = Placement::new(0, 0, Direction::Across);
        let mut crab = Placement::new(0, 0, Direction::Down);
        let mut tea = Placement::new(0, 2, Direction::Down);

        assert_eq!(assign_start_number(&mut grid, &mut cat, &mut next), 1);
        assert_eq!(assign_start_number(&mut grid, &mut tea, &mut next), 2);
        assert_eq!(assign_start_number(&mut grid, &mut crab, &mut next), 1);
        assert_eq!(next, 3);
        assert_eq!(grid.get(0, 0).unwrap().direction(), Some(CellDirection::Both));
    }

    #[test]
    fn test_renumber_row_major() {
        let (mut grid, mut placements) = sample();
        let count = renumber(&mut grid, &mut placements);

        assert_eq!(count, 3);
        let numbers: Vec<u32> = placements.iter().flatten().map(|p| p.clue_number).collect();
        // TEA starts at (0, 2), CAT and CRAB share (0, 0), AHA starts at (2, 0)
        assert_eq!(numbers, vec![2, 1, 3, 1]);
        assert_eq!(grid.get(0, 0).unwrap().number(), Some(1));
        assert_eq!(grid.get(0, 2).unwrap().number(), Some(2));
        assert_eq!(grid.get(2, 0).unwrap().number(), Some(3));
        assert_eq!(grid.get(2, 0).unwrap().direction(), Some(CellDirection::Across));
        assert_eq!(grid.get(1, 0).unwrap().number(), None);
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let (mut grid, mut placements) = sample();
        renumber(&mut grid, &mut placements);
        let grid_once = grid.clone();
        let placements_once = placements.clone();

        renumber(&mut grid, &mut placements);
        assert_eq!(grid, grid_once);
        assert_eq!(placements, placements_once);
    }

    #[test]
    fn test_renumber_skips_unplaced() {
        let mut grid = Grid::new(3);
        let cat = Placement::new(1, 0, Direction::Across);
        grid.write_word("CAT", &cat);
        let mut placements = vec![None, Some(cat), None];
        assert_eq!(renumber(&mut grid, &mut placements), 1);
        assert_eq!(placements[1].map(|p| p.clue_number), Some(1));
        assert!(placements[0].is_none());
    }
}
