//! The layout generator: places a list of words on the smallest square grid
//! where they all interlock.
//!
//! # Algorithm
//!
//! Words are ranked by how many other words they share letters with
//! ([`crate::ranker`]) and tried in that order by a depth-first backtracking
//! search. Each search node picks the first unplaced word in the attempt order,
//! asks [`crate::placement`] for every legal crossing, and recurses once per
//! candidate on a copy of the grid with that word written in. Candidates that
//! hang off the grid grow it first (doubling, shifting content and every
//! tracked placement). Once a word's candidates are exhausted it moves to the
//! back of the attempt order so sibling branches try something else first.
//!
//! A word with no legal crossing is placed apart from the rest instead, across
//! on a row with blank rows around it ([`crate::placement::detached_placement`]),
//! so every search path ends in a complete layout.
//!
//! The best layout seen so far is kept: more words placed wins, then a strictly
//! smaller grid. Once a complete layout is recorded, branches whose grid is
//! already as large are cut off.
//!
//! # Error Handling
//!
//! - G001: `InvalidInput` (A word failed validation (wraps [`InputError`]))
//! - G002: `BudgetExceeded` (The search ran out of attempts)
//! - G003: `InvalidOptions` (The options cannot be used)
//!
//! # Examples
//!
//! ```
//! use crossword_layout::generator;
//! use crossword_layout::word_clue::WordClue;
//!
//! let words = vec![
//!     WordClue::new("CAT", Some("Feline pet".to_string())),
//!     WordClue::bare("ART"),
//! ];
//! let layout = generator::generate(&words)?;
//!
//! assert!(layout.is_complete());
//! for wc in &layout.words_and_clues {
//!     println!("{:?} {:?}: {}", wc.clue_number(), wc.direction(), wc.word());
//! }
//! # Ok::<(), generator::GenerateError>(())
//! ```

use crate::errors::{format_error_with_code_and_help, validate_word, InputError};
use crate::grid::Grid;
use crate::numbering::{assign_start_number, renumber};
use crate::placement::{detached_placement, placements, PlacedWord};
use crate::ranker::rank_indices;
use crate::word_clue::{Placement, WordClue};
use instant::Instant;
use log::{debug, info};
use serde::Serialize;
use std::time::Duration;

/// Number of search nodes allowed before generation gives up.
pub const DEFAULT_ATTEMPT_BUDGET: usize = 500;
/// Clue text given to entries that arrive without one.
pub const DEFAULT_PLACEHOLDER_CLUE: &str = "(no clue)";

/// Tunables for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Maximum number of search nodes visited. Going over is fatal.
    pub attempt_budget: usize,
    pub placeholder_clue: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            placeholder_clue: DEFAULT_PLACEHOLDER_CLUE.to_string(),
        }
    }
}

/// Unified error type for the generator.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// An entry failed validation before the search started.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] Box<InputError>),

    /// The search visited more nodes than the budget allows.
    #[error("generation timed out after {attempts} attempts (budget {budget})")]
    BudgetExceeded { attempts: usize, budget: usize },

    #[error("invalid options: {reason}")]
    InvalidOptions { reason: String },
}

impl GenerateError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidInput(_) => "G001",
            GenerateError::BudgetExceeded { .. } => "G002",
            GenerateError::InvalidOptions { .. } => "G003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GenerateError::InvalidInput(_) => "A word failed validation",
            GenerateError::BudgetExceeded { .. } => "The search ran out of attempts",
            GenerateError::InvalidOptions { .. } => "The generation options cannot be used",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GenerateError::InvalidInput(_) => "One of the entries could not be laid out. This wraps an underlying InputError (see Input Errors section for specific error codes).",
            GenerateError::BudgetExceeded { .. } => "The backtracking search tried more partial layouts than its attempt budget allows. Large word lists, or lists where many words share letters in many positions, make the search tree grow very quickly.",
            GenerateError::InvalidOptions { .. } => "The options passed to the generator are out of range, for example an attempt budget of zero.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GenerateError::BudgetExceeded { .. } => Some("Raise the attempt budget (e.g. '--budget 5000') or generate with fewer words"),
            GenerateError::InvalidOptions { .. } => Some("Use an attempt budget of at least 1"),
            GenerateError::InvalidInput(_) => None, // InputError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            GenerateError::InvalidInput(ie) => {
                format!("{}\n  caused by: {}", self.code(), ie.display_detailed())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// A finished layout: the grid plus every input entry, placed or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub grid: Grid,
    /// Placed entries sorted by clue number (across before down), then the
    /// unplaced ones in input order.
    pub words_and_clues: Vec<WordClue>,
}

impl Layout {
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    pub fn placed(&self) -> impl Iterator<Item = &WordClue> {
        self.words_and_clues.iter().filter(|wc| wc.is_placed())
    }

    pub fn unplaced(&self) -> impl Iterator<Item = &WordClue> {
        self.words_and_clues.iter().filter(|wc| !wc.is_placed())
    }

    /// Whether every entry made it onto the grid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.words_and_clues.iter().all(WordClue::is_placed)
    }
}

/// Counters from a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateStats {
    /// Search nodes visited.
    pub attempts: usize,
    /// Grid doublings performed across all branches.
    pub resizes: usize,
    pub elapsed: Duration,
}

/// Successful generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub layout: Layout,
    pub stats: GenerateStats,
}

/// One node of the search: a grid and where each word sits on it.
///
/// Branches are never shared; every candidate is tried on its own copy, so
/// backtracking is simply dropping the copy.
#[derive(Debug, Clone)]
struct Branch {
    grid: Grid,
    placements: Vec<Option<Placement>>,
    next_number: u32,
}

impl Branch {
    fn empty(dimension: usize, word_count: usize) -> Branch {
        Branch {
            grid: Grid::new(dimension),
            placements: vec![None; word_count],
            next_number: 1,
        }
    }

    fn placed_count(&self) -> usize {
        self.placements.iter().flatten().count()
    }

    fn placed_words<'a>(&self, words: &'a [String]) -> Vec<PlacedWord<'a>> {
        words.iter().zip(&self.placements)
            .filter_map(|(word, placement)| placement.map(|placement| PlacedWord { word, placement }))
            .collect()
    }
}

/// Best branch recorded so far.
struct Best {
    branch: Branch,
    placed: usize,
}

impl Best {
    fn dimension(&self) -> usize {
        self.branch.grid.dimension()
    }
}

/// Everything the recursive search shares across branches.
struct SearchCtx<'a> {
    words: &'a [String],
    /// Indices into `words`; rearranged as words are exhausted.
    order: Vec<usize>,
    min_dim: usize,
    budget: usize,
    attempts: usize,
    resizes: usize,
    best: Option<Best>,
}

impl SearchCtx<'_> {
    fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Nothing can beat a complete layout on the smallest possible grid.
    fn finished(&self) -> bool {
        self.best.as_ref().is_some_and(|best| {
            best.placed == self.word_count() && best.dimension() <= self.min_dim
        })
    }

    /// Keep `branch` if it places more words than the best so far, or as many
    /// on a strictly smaller grid.
    fn consider(&mut self, branch: &Branch) {
        let placed = branch.placed_count();
        let dimension = branch.grid.dimension();
        let better = match &self.best {
            None => true,
            Some(best) => placed > best.placed || (placed == best.placed && dimension < best.dimension()),
        };
        if better {
            debug!("new best layout: {placed}/{} words on a {dimension}x{dimension} grid", self.word_count());
            self.best = Some(Best { branch: branch.clone(), placed });
        }
    }

    /// Whether `branch` can still produce something `consider` would keep.
    ///
    /// Every branch can go on to place all words and grids only grow, so after a
    /// complete layout only strictly smaller grids are worth exploring.
    fn can_improve(&self, branch: &Branch) -> bool {
        match &self.best {
            Some(best) if best.placed == self.word_count() => branch.grid.dimension() < best.dimension(),
            _ => true,
        }
    }

    fn move_to_back(&mut self, index: usize) {
        if let Some(pos) = self.order.iter().position(|&i| i == index) {
            let i = self.order.remove(pos);
            self.order.push(i);
        }
    }

    /// Copy of `branch` with word `index` written at `candidate`, growing the
    /// grid first if the candidate does not fit.
    fn apply(&mut self, branch: &Branch, index: usize, candidate: Placement) -> Branch {
        let word = &self.words[index];
        let len = word.chars().count();
        let mut next = branch.clone();
        let mut candidate = candidate;

        if !next.grid.fits(&candidate, len) {
            let (grid, shift, resizes) = next.grid.expanded_to_fit(&candidate, len);
            debug!(
                "growing grid {} -> {} (shift {}) to fit {word} at ({}, {})",
                next.grid.dimension(), grid.dimension(), shift.0, candidate.row, candidate.col
            );
            next.grid = grid;
            for placement in next.placements.iter_mut().flatten() {
                *placement = shift.apply(*placement);
            }
            candidate = shift.apply(candidate);
            self.resizes += resizes;
        }

        let written = next.grid.write_word(word, &candidate);
        debug_assert!(written, "candidate must fit after growing the grid");
        assign_start_number(&mut next.grid, &mut candidate, &mut next.next_number);
        debug_assert!(candidate.clue_number > 0, "recorded placements are always numbered");
        next.placements[index] = Some(candidate);
        next
    }

    /// One search node.
    ///
    /// # Errors
    /// Returns [`GenerateError::BudgetExceeded`] once more than `budget` nodes
    /// have been visited.
    fn search(&mut self, branch: &Branch) -> Result<(), GenerateError> {
        self.attempts += 1;
        if self.attempts > self.budget {
            return Err(GenerateError::BudgetExceeded { attempts: self.attempts, budget: self.budget });
        }

        self.consider(branch);
        if self.finished() || !self.can_improve(branch) {
            return Ok(());
        }

        let Some(index) = self.order.iter().copied().find(|&i| branch.placements[i].is_none()) else {
            return Ok(());
        };

        let word = &self.words[index];
        let is_first_word = branch.placed_count() == 0;
        let mut candidates = placements(
            &branch.grid,
            &branch.placed_words(self.words),
            word,
            is_first_word,
            self.min_dim,
        );

        if candidates.is_empty() {
            debug!("{word} crosses nothing on the grid, placing it apart");
            candidates.push(detached_placement(&branch.grid));
        }

        for candidate in candidates {
            let next = self.apply(branch, index, candidate);
            self.search(&next)?;
            if self.finished() {
                return Ok(());
            }
        }

        self.move_to_back(index);
        Ok(())
    }
}

/// Lay out `words` with the default options.
///
/// # Errors
/// See [`generate_with`].
pub fn generate(words: &[WordClue]) -> Result<Layout, GenerateError> {
    generate_with(words, &GenerateOptions::default()).map(|result| result.layout)
}

/// Lay out `words` on the smallest grid the search can find.
///
/// Entries are returned in clue order with their placement filled in. Words
/// that share no letter with the rest are placed on rows of their own. Empty
/// and single-word inputs are valid; duplicates are laid out independently.
///
/// # Errors
/// - [`GenerateError::InvalidInput`] if a word is empty or contains non-letters.
/// - [`GenerateError::InvalidOptions`] if the attempt budget is zero.
/// - [`GenerateError::BudgetExceeded`] if the search visits more nodes than the
///   budget allows. No partial layout is returned in that case.
pub fn generate_with(words: &[WordClue], options: &GenerateOptions) -> Result<GenerateResult, GenerateError> {
    if options.attempt_budget == 0 {
        return Err(GenerateError::InvalidOptions { reason: "attempt budget must be positive".to_string() });
    }
    for (index, wc) in words.iter().enumerate() {
        validate_word(index, wc.word())?;
    }

    let started = Instant::now();
    let word_list: Vec<String> = words.iter().map(|wc| wc.word().to_string()).collect();
    let min_dim = word_list.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    info!("Generating layout for {} words (min dimension {min_dim})", word_list.len());

    let mut ctx = SearchCtx {
        words: &word_list,
        order: rank_indices(&word_list),
        min_dim,
        budget: options.attempt_budget,
        attempts: 0,
        resizes: 0,
        best: None,
    };

    if !word_list.is_empty() {
        ctx.search(&Branch::empty(min_dim, word_list.len()))?;
    }

    let stats = GenerateStats { attempts: ctx.attempts, resizes: ctx.resizes, elapsed: started.elapsed() };
    let (mut grid, mut placements) = match ctx.best {
        Some(best) => (best.branch.grid, best.branch.placements),
        None => (Grid::new(min_dim), vec![None; words.len()]),
    };
    renumber(&mut grid, &mut placements);
    let layout = finalize(words, grid, placements, &options.placeholder_clue);

    info!(
        "Placed {}/{} words on a {}x{} grid in {} attempts ({:.3}s)",
        layout.placed().count(), words.len(), layout.dimension(), layout.dimension(),
        stats.attempts, stats.elapsed.as_secs_f64()
    );

    Ok(GenerateResult { layout, stats })
}

/// Copy placements back onto the input entries, fill in missing clues and sort.
fn finalize(words: &[WordClue], grid: Grid, placements: Vec<Option<Placement>>, placeholder_clue: &str) -> Layout {
    let mut words_and_clues: Vec<WordClue> = words.iter().zip(placements)
        .map(|(wc, placement)| {
            let mut out = wc.clone();
            out.placement = placement;
            if out.clue_text.is_none() {
                out.clue_text = Some(placeholder_clue.to_string());
            }
            out
        })
        .collect();

    // stable: unplaced entries stay in input order at the end
    words_and_clues.sort_by_key(|wc| (!wc.is_placed(), wc.clue_number(), wc.direction()));

    Layout { grid, words_and_clues }
}
