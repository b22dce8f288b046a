//! Candidate placements for the next word.
//!
//! A new word may only join the grid by crossing an already-placed word at a
//! shared letter, running perpendicular to it. Each candidate is accepted only
//! if it leaves the grid free of letter clashes and of accidental adjacencies
//! (two words running together end to end, or side by side).
//!
//! A non-crossing cell that already holds a letter is always rejected, even
//! when the letter matches. Such a letter belongs either to a perpendicular
//! word, whose neighbours would fail the side-contact check anyway, or to a
//! parallel word the candidate would run along. Rejecting it up front only
//! changes the reported reason, never which candidates survive.
//!
//! All checks read the grid through [`Grid::is_white`] and [`Grid::letter_at`],
//! so candidates hanging off the edge of the grid see black cells there and are
//! kept; the generator grows the grid before applying them.
//!
//! A word that shares no usable letter with the grid gets a
//! [`detached_placement`] instead: across, on a row of its own.

use crate::grid::Grid;
use crate::word_clue::{Direction, Placement};
use log::trace;
use std::fmt;

/// A word already on the grid.
#[derive(Debug, Clone, Copy)]
pub struct PlacedWord<'a> {
    pub word: &'a str,
    pub placement: Placement,
}

/// Why a candidate was thrown out. Only used for trace logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A cell already holds a different letter.
    Clash { row: isize, col: isize },
    /// A cell away from the crossing is already part of a parallel word.
    Overlap { row: isize, col: isize },
    /// The cell just before the start or just after the end is white.
    RunsInto { row: isize, col: isize },
    /// A white cell sits beside a non-crossing letter.
    Touches { row: isize, col: isize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Clash { row, col } => write!(f, "letter clash at ({row}, {col})"),
            Rejection::Overlap { row, col } => write!(f, "overlaps a parallel word at ({row}, {col})"),
            Rejection::RunsInto { row, col } => write!(f, "runs into a word at ({row}, {col})"),
            Rejection::Touches { row, col } => write!(f, "touches a word at ({row}, {col})"),
        }
    }
}

/// Placement of the very first word: across, centered on a `min_dim` grid.
///
/// `min_dim` is the length of the longest word in the whole input. The row is
/// `min_dim / 2 - 1`, clamped to zero so a one-letter input still fits its grid.
#[must_use]
pub fn first_word_placement(word_len: usize, min_dim: usize) -> Placement {
    let half = (min_dim / 2) as isize;
    let row = (half - 1).max(0);
    let col = half - (word_len / 2) as isize;
    Placement::new(row, col, Direction::Across)
}

/// Every valid placement of `word` against the words already on `grid`.
///
/// For the first word exactly one placement comes back and no crossing search
/// takes place. Otherwise the result may be empty and may contain duplicates.
#[must_use]
pub fn placements(
    grid: &Grid,
    placed: &[PlacedWord<'_>],
    word: &str,
    is_first_word: bool,
    min_dim: usize,
) -> Vec<Placement> {
    if is_first_word {
        return vec![first_word_placement(word.chars().count(), min_dim)];
    }
    crossing_placements(grid, placed, word)
}

/// Placement for a word that crosses nothing: across from the left edge, on
/// the first row that is clear along with the rows directly above and below.
///
/// When no row inside the grid qualifies, the word goes one blank row below the
/// bottom edge and the generator grows the grid to fit.
#[must_use]
pub fn detached_placement(grid: &Grid) -> Placement {
    let dim = grid.dimension() as isize;
    let row = (0..dim)
        .find(|&r| (r - 1..=r + 1).all(|n| grid.row_is_clear(n)))
        .unwrap_or(dim + 1);
    Placement::new(row, 0, Direction::Across)
}

/// Placements of `word` crossing any of `placed` at a shared letter.
#[must_use]
pub fn crossing_placements(grid: &Grid, placed: &[PlacedWord<'_>], word: &str) -> Vec<Placement> {
    let letters: Vec<char> = word.chars().collect();
    let mut found = Vec::new();

    for other in placed {
        let direction = other.placement.direction.opposite();
        for (j, other_letter) in other.word.chars().enumerate() {
            let (cross_row, cross_col) = other.placement.cell_at(j);
            for (i, _) in letters.iter().enumerate().filter(|&(_, &c)| c == other_letter) {
                // walk back `i` letters from the crossing cell to find the start
                let (dr, dc) = direction.step();
                let offset = i as isize;
                let candidate = Placement::new(cross_row - dr * offset, cross_col - dc * offset, direction);

                match check_candidate(grid, &letters, &candidate, i) {
                    Ok(()) => found.push(candidate),
                    Err(rejection) => trace!(
                        "{word} {direction} at ({}, {}) crossing {}: {rejection}",
                        candidate.row, candidate.col, other.word
                    ),
                }
            }
        }
    }

    found
}

/// Validate a candidate whose `crossing`-th letter lands on an existing word.
///
/// # Errors
/// Returns the first [`Rejection`] encountered.
pub fn check_candidate(
    grid: &Grid,
    letters: &[char],
    candidate: &Placement,
    crossing: usize,
) -> Result<(), Rejection> {
    if letters.is_empty() {
        return Ok(());
    }

    // nothing may touch either end of the word
    let (dr, dc) = candidate.direction.step();
    let before = (candidate.row - dr, candidate.col - dc);
    let after = candidate.cell_at(letters.len());
    for (row, col) in [before, after] {
        if grid.is_white(row, col) {
            return Err(Rejection::RunsInto { row, col });
        }
    }

    let (sr, sc) = candidate.direction.cross_step();
    for (k, &letter) in letters.iter().enumerate() {
        let (row, col) = candidate.cell_at(k);
        if k == crossing {
            if grid.letter_at(row, col) != Some(letter) {
                return Err(Rejection::Clash { row, col });
            }
            continue;
        }

        if let Some(existing) = grid.letter_at(row, col) {
            // A matching letter away from the crossing either belongs to a
            // perpendicular word (whose neighbours fail the side check below)
            // or to a parallel word we would overlap.
            return Err(if existing == letter {
                Rejection::Overlap { row, col }
            } else {
                Rejection::Clash { row, col }
            });
        }

        for (side_row, side_col) in [(row - sr, col - sc), (row + sr, col + sc)] {
            if grid.is_white(side_row, side_col) {
                return Err(Rejection::Touches { row: side_row, col: side_col });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(dim: usize, words: &[(&str, Placement)]) -> Grid {
        let mut grid = Grid::new(dim);
        for (word, placement) in words {
            assert!(grid.write_word(word, placement));
        }
        grid
    }

    fn placed<'a>(words: &[(&'a str, Placement)]) -> Vec<PlacedWord<'a>> {
        words.iter().map(|&(word, placement)| PlacedWord { word, placement }).collect()
    }

    #[test]
    fn test_first_word_is_centered_across() {
        assert_eq!(first_word_placement(3, 3), Placement::new(0, 0, Direction::Across));
        assert_eq!(first_word_placement(8, 8), Placement::new(3, 0, Direction::Across));
        assert_eq!(first_word_placement(3, 7), Placement::new(2, 2, Direction::Across));
    }

    #[test]
    fn test_first_word_single_letter_stays_in_grid() {
        assert_eq!(first_word_placement(1, 1), Placement::new(0, 0, Direction::Across));
    }

    #[test]
    fn test_first_word_skips_crossing_search() {
        let grid = Grid::new(5);
        let found = placements(&grid, &[], "HELLO", true, 5);
        assert_eq!(found, vec![Placement::new(1, 0, Direction::Across)]);
    }

    #[test]
    fn test_crossing_is_perpendicular_and_shares_letter() {
        let words = [("CAT", Placement::new(0, 0, Direction::Across))];
        let grid = grid_with(3, &words);
        let found = crossing_placements(&grid, &placed(&words), "ART");

        assert!(!found.is_empty());
        for p in &found {
            assert_eq!(p.direction, Direction::Down);
        }
        // A of ART on A of CAT: starts at the A, hangs down
        assert!(found.contains(&Placement::new(0, 1, Direction::Down)));
        // T of ART on T of CAT: starts two rows above the grid
        assert!(found.contains(&Placement::new(-2, 2, Direction::Down)));
    }

    #[test]
    fn test_no_shared_letters_no_candidates() {
        let words = [("CAT", Placement::new(0, 0, Direction::Across))];
        let grid = grid_with(3, &words);
        assert!(crossing_placements(&grid, &placed(&words), "DOG").is_empty());
    }

    #[test]
    fn test_down_word_gets_across_candidates() {
        let words = [("CAT", Placement::new(0, 2, Direction::Down))];
        let grid = grid_with(5, &words);
        let found = crossing_placements(&grid, &placed(&words), "TO");
        assert_eq!(found, vec![Placement::new(2, 2, Direction::Across)]);
    }

    #[test]
    fn test_rejects_running_into_end() {
        // a down word from the C of CAT would end right above the D of DOG
        let words = [
            ("CAT", Placement::new(0, 0, Direction::Across)),
            ("DOG", Placement::new(3, 0, Direction::Across)),
        ];
        let grid = grid_with(6, &words);
        // "CAB" down from C of CAT would end at (2, 0), right above D
        let letters: Vec<char> = "CAB".chars().collect();
        let result = check_candidate(&grid, &letters, &Placement::new(0, 0, Direction::Down), 0);
        assert_eq!(result, Err(Rejection::RunsInto { row: 3, col: 0 }));
    }

    #[test]
    fn test_rejects_side_contact() {
        let words = [
            ("CAT", Placement::new(0, 0, Direction::Across)),
            ("OX", Placement::new(2, 1, Direction::Across)),
        ];
        let grid = grid_with(5, &words);
        // "CUP" down from C: U at (1, 0) is clear but P at (2, 0) touches O at (2, 1)
        let letters: Vec<char> = "CUP".chars().collect();
        let result = check_candidate(&grid, &letters, &Placement::new(0, 0, Direction::Down), 0);
        assert_eq!(result, Err(Rejection::Touches { row: 2, col: 1 }));
    }

    #[test]
    fn test_rejects_clash() {
        let words = [
            ("CAT", Placement::new(0, 0, Direction::Across)),
            ("TOE", Placement::new(0, 2, Direction::Down)),
            ("HUE", Placement::new(2, 0, Direction::Across)),
        ];
        let grid = grid_with(5, &words);
        // "CAR" down from C would put R where H sits
        let letters: Vec<char> = "CAR".chars().collect();
        let result = check_candidate(&grid, &letters, &Placement::new(0, 0, Direction::Down), 0);
        assert_eq!(result, Err(Rejection::Clash { row: 2, col: 0 }));
    }

    #[test]
    fn test_rejects_parallel_overlap() {
        let words = [("AT", Placement::new(1, 0, Direction::Down))];
        let grid = grid_with(4, &words);
        let letters: Vec<char> = "CAT".chars().collect();
        // CAT down from (0, 0) would swallow AT; crossing on the A
        let result = check_candidate(&grid, &letters, &Placement::new(0, 0, Direction::Down), 1);
        assert_eq!(result, Err(Rejection::Overlap { row: 2, col: 0 }));
    }

    #[test]
    fn test_rejects_same_letter_off_the_crossing() {
        let words = [
            ("CAT", Placement::new(0, 0, Direction::Across)),
            ("BUS", Placement::new(2, 0, Direction::Across)),
        ];
        let grid = grid_with(5, &words);
        // COB down from C would also land its B on the B of BUS, right beside U
        let letters: Vec<char> = "COB".chars().collect();
        let result = check_candidate(&grid, &letters, &Placement::new(0, 0, Direction::Down), 0);
        assert_eq!(result, Err(Rejection::Overlap { row: 2, col: 0 }));
        assert!(grid.is_white(2, 1), "the side check would reject it as well");
    }

    #[test]
    fn test_detached_row_has_blank_rows_around_it() {
        let words = [("CAT", Placement::new(0, 0, Direction::Across))];
        let grid = grid_with(3, &words);
        assert_eq!(detached_placement(&grid), Placement::new(2, 0, Direction::Across));

        let words = [("DOG", Placement::new(1, 0, Direction::Across))];
        let grid = grid_with(3, &words);
        // rows 0 and 2 both touch DOG, so the word goes below the grid
        assert_eq!(detached_placement(&grid), Placement::new(4, 0, Direction::Across));
    }

    #[test]
    fn test_off_grid_neighbours_are_black() {
        let words = [("CAT", Placement::new(0, 0, Direction::Across))];
        let grid = grid_with(3, &words);
        let letters: Vec<char> = "TEA".chars().collect();
        // TEA down from the T at (0, 2): rows 1 and 2 plus the cell after the end are clear
        assert_eq!(check_candidate(&grid, &letters, &Placement::new(0, 2, Direction::Down), 0), Ok(()));
    }
}
