//! Attempt order for the layout search.
//!
//! Each word is scored by how many *other* words share at least one letter with
//! it. Words are attempted in ascending score order; ties keep input order.

use std::collections::HashSet;

/// Number of other words sharing at least one letter with each word, by index.
///
/// A word contributes at most 1 to another word's score no matter how many
/// letters they have in common. Duplicated words count as "other" words.
#[must_use]
pub fn overlap_scores<S: AsRef<str>>(words: &[S]) -> Vec<usize> {
    let letter_sets: Vec<HashSet<char>> = words.iter()
        .map(|w| w.as_ref().chars().collect())
        .collect();

    letter_sets.iter().enumerate()
        .map(|(i, letters)| {
            letter_sets.iter().enumerate()
                .filter(|&(j, other)| j != i && !letters.is_disjoint(other))
                .count()
        })
        .collect()
}

/// Indices of `words` ordered by ascending overlap score (stable).
#[must_use]
pub fn rank_indices<S: AsRef<str>>(words: &[S]) -> Vec<usize> {
    let scores = overlap_scores(words);
    let mut order: Vec<usize> = (0..words.len()).collect();
    // `sort_by_key` is stable, so equal scores keep their input order
    order.sort_by_key(|&i| scores[i]);
    order
}

/// `words` reordered by ascending overlap score.
#[must_use]
pub fn rank<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    rank_indices(words).into_iter()
        .map(|i| words[i].as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_count_words_not_letters() {
        // CAT shares A and T with ART, but ART still only adds 1
        let scores = overlap_scores(&["CAT", "ART", "DOG"]);
        assert_eq!(scores, vec![1, 1, 0]);
    }

    #[test]
    fn test_rank_ascending_and_stable() {
        let ranked = rank(&["CAT", "ART", "DOG", "TAR"]);
        // DOG shares nothing; the rest tie at 2 and keep input order
        assert_eq!(ranked, vec!["DOG", "CAT", "ART", "TAR"]);
    }

    #[test]
    fn test_duplicates_count_as_others() {
        assert_eq!(overlap_scores(&["CAT", "CAT"]), vec![1, 1]);
    }

    #[test]
    fn test_rank_empty() {
        let empty: [&str; 0] = [];
        assert!(rank(&empty).is_empty());
        assert!(rank_indices(&empty).is_empty());
    }
}
