use crate::word_model::ListKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading word lists or attaching to the terminal.
///
/// Navigation itself never fails; everything here happens at startup or
/// teardown.
#[derive(Error, Debug)]
pub enum TilesError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON word list in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A word list had no usable entries after loading and filtering
    #[error("Configuration error: the {kind} list is empty")]
    EmptyWordList { kind: ListKind },

    #[error("Invalid filter pattern: {0}")]
    InvalidFilter(#[from] regex::Error),

    #[error("No interactive terminal available (stdin and stdout must be a TTY)")]
    NoTerminal,

    #[error("A terminal session is already attached")]
    AlreadyAttached,

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TilesError>;
