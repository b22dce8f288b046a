#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that turns on debug logging for the CLI.
pub const DEBUG_ENV_VAR: &str = "CROSSWORD_LAYOUT_DEBUG";

/// Initialize logging for the layout generator.
///
/// # Behavior
/// - **Native (CLI):** Debug level if `debug_enabled`, else Info; `RUST_LOG`
///   overrides both. Calling this twice is harmless (the second call is ignored).
/// - **WASM:** logs to the browser console at Debug or Info level.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        if let Err(e) = console_log::init_with_level(level) {
            // keep the module usable without logs rather than aborting
            let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
            web_sys::console::error_1(&msg.into());
            return;
        }
        log::info!("WASM logger initialized at {level:?} level");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}

/// Whether [`DEBUG_ENV_VAR`] is set.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}
