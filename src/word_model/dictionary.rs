use super::classify::{Classification, classify};
use super::word_list::ListKind;
use crate::error::{Result, TilesError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a raw dictionary: either a JSON array of strings or one word per line.
pub fn read_dictionary(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| TilesError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim_start().starts_with('[') {
        return serde_json::from_str(&content).map_err(|source| TilesError::Json {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Classify `input` and write both lists into `out_dir`.
pub fn build_lists(input: &Path, out_dir: &Path) -> Result<Classification> {
    let words = read_dictionary(input)?;
    info!("read {} words from {}", words.len(), input.display());

    let valid = words.iter().filter(|w| super::is_valid_word(w)).count();
    info!("{} valid words (len > 1, letters only)", valid);

    let result = classify(words.as_slice());
    info!("found {} palindromes", result.palindromes.len());
    info!("found {} emordnilaps", result.emordnilaps.len());

    fs::create_dir_all(out_dir).map_err(|source| TilesError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    for (kind, list) in [
        (ListKind::Palindromes, &result.palindromes),
        (ListKind::Emordnilaps, &result.emordnilaps),
    ] {
        let path = out_dir.join(kind.file_name());
        write_list(&path, list)?;
        info!("{} saved to {}", kind, path.display());
    }

    Ok(result)
}

fn write_list(path: &Path, words: &[String]) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    words
        .serialize(&mut serializer)
        .map_err(|source| TilesError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    buffer.push(b'\n');

    fs::write(path, buffer).map_err(|source| TilesError::Io {
        path: path.to_path_buf(),
        source,
    })
}
