//! Reading the word/clue list handed to the generator.
//!
//! The host widget collects entries from an editable table; the CLI reads them
//! from a file. Either way they arrive as text, one entry per line:
//!
//! ```text
//! # comment
//! CAT;Feline pet
//! ART;Painting, sculpture and the like
//! OAT
//! ```
//!
//! The parsing logic:
//! - Blank lines and lines starting with `#` are skipped.
//! - The word is everything before the first `;`, the clue everything after it.
//! - Words are trimmed, stripped of inner spaces and upper-cased, so `ice cream`
//!   becomes `ICECREAM`.
//! - Clues are trimmed; an empty clue counts as no clue.
//! - Duplicates are kept, in input order.
//!
//! Nothing here validates the words beyond normalizing them; the generator
//! rejects anything it cannot lay out.
//!
//! `parse_from_str(...)` works everywhere, including WASM. `load_from_path(...)`
//! is a native-only convenience that reads a file first.

use crate::word_clue::WordClue;

/// Struct representing a parsed entry list, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    pub entries: Vec<WordClue>,
}

impl EntryList {
    /// Parse an entry list from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> EntryList {
        let entries = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }

                let (word_raw, clue_raw) = line.split_once(';').unwrap_or((line, ""));
                let word = normalize_word(word_raw);
                if word.is_empty() {
                    // a clue with no word is nothing we can lay out
                    return None;
                }
                let clue = clue_raw.trim();
                let clue_text = (!clue.is_empty()).then(|| clue.to_string());
                Some(WordClue::new(word, clue_text))
            })
            .collect();

        EntryList { entries }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<EntryList> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read entry list from '{}': {}", path_ref.display(), e)
            )
        })?;
        Ok(Self::parse_from_str(&data))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Upper-case `raw` and drop all whitespace.
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &EntryList) -> Vec<&str> {
        list.entries.iter().map(WordClue::word).collect()
    }

    #[test]
    fn test_parse_basic() {
        let list = EntryList::parse_from_str("cat;Feline pet\nart;Gallery fare");
        assert_eq!(words(&list), vec!["CAT", "ART"]);
        assert_eq!(list.entries[0].clue_text.as_deref(), Some("Feline pet"));
        assert_eq!(list.entries[1].clue_text.as_deref(), Some("Gallery fare"));
    }

    #[test]
    fn test_parse_without_clue() {
        let list = EntryList::parse_from_str("oat\nrye;");
        assert_eq!(words(&list), vec!["OAT", "RYE"]);
        assert!(list.entries.iter().all(|wc| wc.clue_text.is_none()));
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let list = EntryList::parse_from_str("# grains\n\noat\n   \n#rye\nbarley");
        assert_eq!(words(&list), vec!["OAT", "BARLEY"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let list = EntryList::parse_from_str("cat;one\ndog\ncat;two");
        assert_eq!(words(&list), vec!["CAT", "DOG", "CAT"]);
        assert_eq!(list.entries[2].clue_text.as_deref(), Some("two"));
    }

    #[test]
    fn test_parse_clue_may_contain_semicolons() {
        let list = EntryList::parse_from_str("tea;Drink; often iced");
        assert_eq!(list.entries[0].clue_text.as_deref(), Some("Drink; often iced"));
    }

    #[test]
    fn test_parse_skips_clue_without_word() {
        let list = EntryList::parse_from_str(" ;orphan clue\ncat");
        assert_eq!(words(&list), vec!["CAT"]);
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word(" ice cream "), "ICECREAM");
        assert_eq!(normalize_word("école"), "ÉCOLE");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(EntryList::parse_from_str("").is_empty());
    }
}
