//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `InputError` and `GenerateError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use crossword_layout::errors::InputError;
use crossword_layout::generator::GenerateError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::EmptyWord { index: 2 },
        InputError::InvalidCharacter { word: "ICE CREAM".to_string(), invalid_char: ' ' },
    ]
}

fn all_generate_error_variants() -> Vec<GenerateError> {
    vec![
        GenerateError::InvalidInput(Box::new(InputError::EmptyWord { index: 0 })),
        GenerateError::BudgetExceeded { attempts: 501, budget: 500 },
        GenerateError::InvalidOptions { reason: "attempt budget must be positive".to_string() },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Generator Errors (G001–G003)](#generator-errors)");
    println!("- [Input Errors (E001–E002)](#input-errors)\n");

    println!("## Generator Errors\n");
    println!("Top-level errors from layout generation. These wrap input errors or report a search that ran out of attempts.\n");
    generate_error_docs!(all_generate_error_variants());

    println!("## Input Errors\n");
    println!("Errors raised while validating the word list, before any search starts.\n");
    generate_error_docs!(all_input_error_variants());
}
