//! Word/clue entries and their placement on the grid.
//!
//! A [`WordClue`] owns an immutable word and an optional clue. Its placement is
//! either absent (the word has not been, or could not be, placed) or a full
//! [`Placement`]: there is no way to hold a row without a column, or a clue
//! number without a direction.

use serde::Serialize;
use std::fmt;

/// Orientation of a word on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The perpendicular orientation.
    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// `(row, col)` step taken when moving one letter along this direction.
    #[must_use]
    pub(crate) fn step(self) -> (isize, isize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// `(row, col)` step perpendicular to this direction.
    #[must_use]
    pub(crate) fn cross_step(self) -> (isize, isize) {
        self.opposite().step()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Where a word sits on the grid.
///
/// `row` is the `x` coordinate and `col` the `y` coordinate of the word's first
/// letter (`grid[row][col]`). Coordinates are signed because candidate
/// placements may start outside the current grid, which triggers a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    #[serde(rename = "x")]
    pub row: isize,
    #[serde(rename = "y")]
    pub col: isize,
    pub direction: Direction,
    /// Zero only on candidates fresh from the placement finder. The generator
    /// numbers a placement before recording it, so every placement reachable
    /// from a [`WordClue`] carries a number of 1 or more.
    pub clue_number: u32,
}

impl Placement {
    #[must_use]
    pub fn new(row: isize, col: isize, direction: Direction) -> Placement {
        Placement { row, col, direction, clue_number: 0 }
    }

    /// Coordinates of the `index`-th letter of a word placed here.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> (isize, isize) {
        let (dr, dc) = self.direction.step();
        let k = index as isize;
        (self.row + dr * k, self.col + dc * k)
    }

    /// Iterator over the coordinates of all `len` cells covered by a word placed here.
    pub fn cells(&self, len: usize) -> impl Iterator<Item = (isize, isize)> + '_ {
        (0..len).map(move |k| self.cell_at(k))
    }

    /// The same placement moved `shift` cells down and right.
    #[must_use]
    pub fn shifted(self, shift: isize) -> Placement {
        Placement { row: self.row + shift, col: self.col + shift, ..self }
    }
}

/// One entry of the puzzle: the answer word, its clue, and where it landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordClue {
    word: String,
    pub clue_text: Option<String>,
    pub placement: Option<Placement>,
}

// The host reads a flat record and expects every placement field to be
// present, holding null when the entry is unplaced.
impl Serialize for WordClue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("WordClue", 7)?;
        state.serialize_field("word", &self.word)?;
        state.serialize_field("clueText", &self.clue_text)?;
        state.serialize_field("x", &self.placement.map(|p| p.row))?;
        state.serialize_field("y", &self.placement.map(|p| p.col))?;
        state.serialize_field("across", &self.direction().map(|d| d == Direction::Across))?;
        state.serialize_field("direction", &self.direction())?;
        state.serialize_field("clueNumber", &self.clue_number())?;
        state.end()
    }
}

impl WordClue {
    pub fn new(word: impl Into<String>, clue_text: Option<String>) -> WordClue {
        WordClue { word: word.into(), clue_text, placement: None }
    }

    /// An entry with no clue text yet.
    pub fn bare(word: impl Into<String>) -> WordClue {
        WordClue::new(word, None)
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of letters (not bytes) in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    #[must_use]
    pub fn clue_number(&self) -> Option<u32> {
        self.placement.map(|p| p.clue_number)
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.placement.map(|p| p.direction)
    }
}
