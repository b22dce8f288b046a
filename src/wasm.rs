use crate::entry_list::EntryList;
use crate::generator::{generate_with, GenerateError, GenerateOptions, DEFAULT_ATTEMPT_BUDGET};
use crate::log::init_logger;
use crate::word_clue::WordClue;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "G002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GenerateError> for WasmError {
    fn from(e: GenerateError) -> Self {
        // surface the underlying input problem rather than the wrapper
        match &e {
            GenerateError::InvalidInput(ie) => WasmError {
                code: ie.code().to_string(),
                message: ie.to_string(),
                description: ie.description().to_string(),
                details: ie.details().to_string(),
                help: ie.help().map(str::to_string),
            },
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Entry as sent by the host widget: `{ word: string, clueText?: string }`.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WasmEntry {
    word: String,
    #[serde(default)]
    clue_text: Option<String>,
}

/// Convert to a JS value, writing `None` as `null` rather than `undefined`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value.serialize(&serializer)
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// JS entry: (entries: {word, clueText?}[], attempt_budget?: number)
/// returns `{ grid: Cell[][], wordsAndClues: WordClue[] }`
///
/// Words are used as given; normalize them (e.g. with `parse_entry_list`) first.
#[wasm_bindgen]
pub fn generate_layout_wasm(entries: JsValue, attempt_budget: Option<usize>) -> Result<JsValue, JsValue> {
    let entries: Vec<WasmEntry> = serde_wasm_bindgen::from_value(entries).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("entries must be {{word, clueText?}}[]: {e}"),
        description: "Invalid entries format".to_string(),
        details: "The entries parameter must be a JavaScript array of objects with a string `word` and an optional string `clueText`.".to_string(),
        help: Some("Pass e.g. [{word: 'CAT', clueText: 'Feline pet'}, {word: 'ART'}]".to_string()),
    })?;

    let words: Vec<WordClue> = entries.into_iter()
        .map(|entry| WordClue::new(entry.word, entry.clue_text))
        .collect();
    let options = GenerateOptions {
        attempt_budget: attempt_budget.unwrap_or(DEFAULT_ATTEMPT_BUDGET),
        ..GenerateOptions::default()
    };

    let result = generate_with(&words, &options).map_err(WasmError::from)?;

    to_js(&result.layout).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize layout".to_string(),
            details: "The generated layout could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }.into()
    })
}

/// Parse newline-separated `WORD;clue` text into `{word, clueText}` objects with
/// normalized words, ready for `generate_layout_wasm`.
///
/// # Errors
/// Returns a `JsValue` error if the result cannot be serialized.
#[wasm_bindgen]
pub fn parse_entry_list(text: &str) -> Result<JsValue, JsValue> {
    let entry_list = EntryList::parse_from_str(text);
    to_js(&entry_list.entries).map_err(|e| {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize entry list".to_string(),
            details: "The entry list could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }.into()
    })
}

/// Generate a debug report users can paste into a bug report.
#[wasm_bindgen]
pub fn get_debug_info(error_message: &str, entry_count: usize, attempt_budget: usize) -> String {
    build_debug_report(
        error_message,
        entry_count,
        attempt_budget,
        &js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()),
    )
}

fn build_debug_report(error_message: &str, entry_count: usize, attempt_budget: usize, generated: &str) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== CROSSWORD LAYOUT DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {generated}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Entries: {entry_count}");
    let _ = writeln!(&mut report, "Attempt Budget: {attempt_budget}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_report_structure() {
        let report = build_debug_report("generation timed out", 12, 500, "2026-01-01T00:00:00Z");
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== CROSSWORD LAYOUT DEBUG REPORT ===");
        assert!(lines[1].starts_with(&format!("Version: {}", env!("CARGO_PKG_VERSION"))));
        assert_eq!(lines[2], "Generated: 2026-01-01T00:00:00Z");
        assert_eq!(lines[4], "## Error");
        assert_eq!(lines[5], "generation timed out");
        assert_eq!(lines[7], "## Input");
        assert_eq!(lines[8], "Entries: 12");
        assert_eq!(lines[9], "Attempt Budget: 500");
        assert_eq!(lines.last(), Some(&"=== END DEBUG REPORT ==="));
    }

    #[test]
    fn test_wasm_error_unwraps_input_error() {
        let err = GenerateError::InvalidInput(Box::new(crate::errors::InputError::EmptyWord { index: 1 }));
        let wasm_err = WasmError::from(err);
        assert_eq!(wasm_err.code, "E001");
        assert!(wasm_err.help.is_some());
    }
}
