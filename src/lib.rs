// Reusable library API, shared by the CLI and the WASM build
pub mod entry_list;
pub mod errors;
pub mod generator;
pub mod grid;
pub mod log;
pub mod numbering;
pub mod placement;
pub mod ranker;
pub mod render;
pub mod word_clue;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use generator::{generate, generate_with, GenerateError, GenerateOptions, Layout};
pub use word_clue::{Direction, Placement, WordClue};
