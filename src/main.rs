mod config;
mod controller;
mod error;
mod tracing_setup;
mod view;
mod word_model;

use clap::{Parser, Subcommand};
use config::RcLoader;
use controller::App;
use std::path::PathBuf;
use tracing::info;
use tracing_setup::{LogTarget, TracingConfig};
use word_model::WordLists;

/// Browse palindromes and emordnilaps as rows of letter tiles.
///
/// Left/Right cycle through words, Space turns the row around, Tab switches
/// lists and q quits.
#[derive(Parser, Debug)]
#[command(name = "palindrome-tiles", version, about)]
struct Cli {
    /// JSON word list to use instead of the built-in palindromes
    #[arg(long, value_name = "PATH")]
    palindromes: Option<PathBuf>,

    /// JSON word list to use instead of the built-in emordnilaps
    #[arg(long, value_name = "PATH")]
    emordnilaps: Option<PathBuf>,

    /// Only keep words matching this regular expression
    #[arg(long, value_name = "REGEX")]
    filter: Option<String>,

    /// Word shown first in the palindrome list (empty to disable)
    #[arg(long, value_name = "WORD")]
    featured: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,

    /// Print a sample .palindromerc and exit
    #[arg(long)]
    sample_rc: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive both word lists from a dictionary file
    Build {
        /// JSON array of words, or one word per line
        #[arg(long, value_name = "PATH")]
        input: PathBuf,

        /// Directory receiving palindrome_words.json and emordnilap_words.json
        #[arg(long, value_name = "DIR", default_value = "db")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.sample_rc {
        print!("{}", RcLoader::generate_sample_rc());
        return Ok(());
    }

    if let Some(Command::Build { input, out_dir }) = &cli.command {
        tracing_setup::init_tracing(&TracingConfig {
            debug: cli.debug,
            target: LogTarget::Stderr,
        })?;
        word_model::build_lists(input, out_dir)?;
        return Ok(());
    }

    // Load RC configuration, then let the command line override it
    let mut config = RcLoader::load_config();
    if let Some(path) = cli.palindromes {
        config.palindromes = Some(path);
    }
    if let Some(path) = cli.emordnilaps {
        config.emordnilaps = Some(path);
    }
    if let Some(word) = cli.featured {
        config.featured = Some(word).filter(|w| !w.trim().is_empty());
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }

    tracing_setup::init_tracing(&TracingConfig {
        debug: cli.debug,
        target: match &config.log_file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Discard,
        },
    })?;

    let lists = WordLists::load(&config.load_options(cli.filter))?;
    info!("starting viewer");
    App::new(lists, config.view_options()).run()?;

    Ok(())
}
