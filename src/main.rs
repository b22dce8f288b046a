use clap::Parser;
use std::io::Read;
use std::process::ExitCode;

use crossword_layout::entry_list::EntryList;
use crossword_layout::generator::{self, GenerateOptions, DEFAULT_ATTEMPT_BUDGET, DEFAULT_PLACEHOLDER_CLUE};
use crossword_layout::render;

/// Lay out a list of words as an interlocking crossword grid
#[derive(Parser, Debug)]
#[command(author, version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Entry list file, one `WORD;clue` per line ("-" reads stdin)
    entry_list: String,

    /// Maximum number of search attempts before giving up
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPT_BUDGET)]
    budget: usize,

    /// Clue text for entries without one
    #[arg(long, default_value = DEFAULT_PLACEHOLDER_CLUE)]
    placeholder: String,

    /// Print the layout as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging (also enabled by CROSSWORD_LAYOUT_DEBUG)
    #[arg(short, long)]
    debug: bool,
}

/// Entry point of the layout CLI.
///
/// Delegates to [`try_main`], printing any error in detail before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || crossword_layout::log::debug_requested();
    crossword_layout::log::init_logger(debug_enabled);

    if let Err(e) = try_main(&cli) {
        if let Some(gen_err) = e.downcast_ref::<generator::GenerateError>() {
            eprintln!("Error: {}", gen_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_entry_list(source: &str) -> std::io::Result<EntryList> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(EntryList::parse_from_str(&text))
    } else {
        EntryList::load_from_path(source)
    }
}

/// Core application logic:
/// 1. Read and normalize the entry list.
/// 2. Generate the layout.
/// 3. Print it (text or JSON) on stdout and the run statistics on stderr.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let entry_list = read_entry_list(&cli.entry_list)?;
    log::info!("Read {} entries from {}", entry_list.len(), cli.entry_list);

    let options = GenerateOptions { attempt_budget: cli.budget, placeholder_clue: cli.placeholder.clone() };
    let result = generator::generate_with(&entry_list.entries, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.layout)?);
    } else {
        println!("{}", render::render_layout(&result.layout));
    }

    eprintln!(
        "Placed {}/{} words on a {}x{} grid in {} attempts ({} resizes, {:.3}s).",
        result.layout.placed().count(),
        result.layout.words_and_clues.len(),
        result.layout.dimension(),
        result.layout.dimension(),
        result.stats.attempts,
        result.stats.resizes,
        result.stats.elapsed.as_secs_f64()
    );

    Ok(())
}
