//! Error types for validating generator input, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - E001: `EmptyWord` (An entry has an empty word)
//! - E002: `InvalidCharacter` (A word contains something other than letters)
//!
//! Generation itself fails with [`crate::generator::GenerateError`] (codes `G001`..),
//! which wraps these when the input is rejected.
//!
//! # Examples
//!
//! ```
//! use crossword_layout::errors::InputError;
//!
//! fn check(word: &str) -> Result<(), Box<InputError>> {
//!     if let Some(c) = word.chars().find(|c| !c.is_alphabetic()) {
//!         return Err(Box::new(InputError::InvalidCharacter {
//!             word: word.to_string(),
//!             invalid_char: c,
//!         }));
//!     }
//!     Ok(())
//! }
//!
//! match check("NO-GO") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(()) => println!("Success"),
//! }
//! ```

use std::io;

/// Problems with the word list handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Entry {index} has an empty word")]
    EmptyWord { index: usize },

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only letters allowed)")]
    InvalidCharacter { word: String, invalid_char: char },
}

impl From<InputError> for io::Error {
    fn from(e: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    }
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::EmptyWord { .. } => "E001",
            InputError::InvalidCharacter { .. } => "E002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::EmptyWord { .. } => "An entry has an empty word",
            InputError::InvalidCharacter { .. } => "A word contains something other than letters",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::EmptyWord { .. } => "Every entry handed to the generator needs a word of at least one letter. Entries are numbered from 0 in input order.",
            InputError::InvalidCharacter { .. } => "Words are laid out letter by letter on the grid, so spaces, digits and punctuation cannot be placed. Normalize words (strip spaces and hyphens, fix the case) before generating.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::EmptyWord { .. } => Some("Remove the empty entry or give it a word, e.g. 'CAT;Feline pet'"),
            InputError::InvalidCharacter { .. } => Some("Write multi-word answers run together, e.g. 'ICECREAM' instead of 'ICE CREAM'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Check that `word` (entry number `index`) is a non-empty run of letters.
///
/// # Errors
/// Returns the matching [`InputError`] otherwise.
pub fn validate_word(index: usize, word: &str) -> Result<(), Box<InputError>> {
    if word.is_empty() {
        return Err(Box::new(InputError::EmptyWord { index }));
    }
    match word.chars().find(|c| !c.is_alphabetic()) {
        Some(invalid_char) => Err(Box::new(InputError::InvalidCharacter { word: word.to_string(), invalid_char })),
        None => Ok(()),
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<InputError> {
        vec![
            InputError::EmptyWord { index: 3 },
            InputError::InvalidCharacter { word: "ICE CREAM".to_string(), invalid_char: ' ' },
        ]
    }

    #[test]
    fn test_validate_word() {
        assert!(validate_word(0, "CAT").is_ok());
        assert!(validate_word(0, "ÉCOLE").is_ok());
        assert_eq!(*validate_word(2, "").unwrap_err(), InputError::EmptyWord { index: 2 });
        assert_eq!(
            *validate_word(0, "R2D2").unwrap_err(),
            InputError::InvalidCharacter { word: "R2D2".to_string(), invalid_char: '2' }
        );
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = InputError::EmptyWord { index: 0 };
        assert_eq!(err.code(), "E001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E001"));
        assert!(detailed.contains("Remove the empty entry"));
    }

    /// Test that all `InputError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(code.starts_with('E'), "Error code '{code}' should start with 'E'");
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }
    }

    /// Test that all error codes follow the format E0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters (E0XX)");
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{code}' should end with a number");
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in all_variants() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()));
            assert!(detailed.contains(&err.to_string()));
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
                assert_ne!(help, err.to_string());
            }
        }
    }

    #[test]
    fn test_invalid_character_names_the_offender() {
        let err = InputError::InvalidCharacter { word: "NO-GO".to_string(), invalid_char: '-' };
        let msg = err.to_string();
        assert!(msg.contains("NO-GO") && msg.contains('-'));
    }
}
