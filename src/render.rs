//! Plain-text rendering of a finished layout, for the CLI and for logs.

use crate::generator::Layout;
use crate::word_clue::{Direction, WordClue};
use std::fmt::Write;

const BLACK_CELL: char = '#';

/// The grid, one row per line: letters for white cells, `#` for black ones.
#[must_use]
pub fn render_grid(layout: &Layout) -> String {
    layout.grid.rows().iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.answer().unwrap_or(BLACK_CELL))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn clue_line(out: &mut String, wc: &WordClue) {
    let clue = wc.clue_text.as_deref().unwrap_or("");
    let len = wc.len();
    // NB: writing to a String never fails
    let _ = match wc.clue_number() {
        Some(number) => writeln!(out, "{number}. {clue} ({len})"),
        None => writeln!(out, "{} - {clue} ({len})", wc.word()),
    };
}

/// Clues grouped under "Across" and "Down", plus any unplaced words.
#[must_use]
pub fn render_clues(layout: &Layout) -> String {
    let mut out = String::new();
    for (heading, direction) in [("Across", Direction::Across), ("Down", Direction::Down)] {
        let mut clues = layout.placed().filter(|wc| wc.direction() == Some(direction)).peekable();
        if clues.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "{heading}");
        clues.for_each(|wc| clue_line(&mut out, wc));
        out.push('\n');
    }

    let mut unplaced = layout.unplaced().peekable();
    if unplaced.peek().is_some() {
        let _ = writeln!(out, "Unplaced");
        unplaced.for_each(|wc| clue_line(&mut out, wc));
    }

    out.trim_end().to_string()
}

/// Grid followed by the clue list.
#[must_use]
pub fn render_layout(layout: &Layout) -> String {
    format!("{}\n\n{}", render_grid(layout), render_clues(layout))
}
