use crate::error::{Result, TilesError};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const EMBEDDED_PALINDROMES: &str = include_str!("../../data/palindrome_words.json");
const EMBEDDED_EMORDNILAPS: &str = include_str!("../../data/emordnilap_words.json");

/// Which of the two fixed lists is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Palindromes,
    Emordnilaps,
}

impl ListKind {
    /// Tab order, left to right
    pub const ALL: [ListKind; 2] = [ListKind::Palindromes, ListKind::Emordnilaps];

    pub fn label(self) -> &'static str {
        match self {
            ListKind::Palindromes => "Palindromes",
            ListKind::Emordnilaps => "Emordnilaps",
        }
    }

    pub fn other(self) -> Self {
        match self {
            ListKind::Palindromes => ListKind::Emordnilaps,
            ListKind::Emordnilaps => ListKind::Palindromes,
        }
    }

    /// File name used by the build tool and by the embedded data
    pub fn file_name(self) -> &'static str {
        match self {
            ListKind::Palindromes => "palindrome_words.json",
            ListKind::Emordnilaps => "emordnilap_words.json",
        }
    }

    fn embedded_json(self) -> &'static str {
        match self {
            ListKind::Palindromes => EMBEDDED_PALINDROMES,
            ListKind::Emordnilaps => EMBEDDED_EMORDNILAPS,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered, immutable, non-empty list of lowercase words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    kind: ListKind,
    words: Vec<String>,
}

impl WordList {
    /// Normalize and validate a list. Entries are trimmed and lowercased,
    /// blank entries are dropped, and an empty result is rejected.
    pub fn new<I, S>(kind: ListKind, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(TilesError::EmptyWordList { kind });
        }

        Ok(Self { kind, words })
    }

    /// Parse a JSON array of strings. `origin` is only used for error reporting.
    pub fn from_json_str(kind: ListKind, json: &str, origin: &Path) -> Result<Self> {
        let words: Vec<String> =
            serde_json::from_str(json).map_err(|source| TilesError::Json {
                path: origin.to_path_buf(),
                source,
            })?;
        Self::new(kind, words)
    }

    pub fn from_file(kind: ListKind, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TilesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(kind, &content, path)
    }

    /// The list compiled into the binary
    pub fn embedded(kind: ListKind) -> Result<Self> {
        let origin = PathBuf::from(format!("<embedded>/{}", kind.file_name()));
        Self::from_json_str(kind, kind.embedded_json(), &origin)
    }

    /// Put `word` at the front unless it already leads the list.
    pub fn with_featured(mut self, word: &str) -> Self {
        let word = word.trim().to_lowercase();
        if word.is_empty() || self.words.first() == Some(&word) {
            return self;
        }
        self.words.insert(0, word);
        self
    }

    /// Keep only the words matching `pattern`; fails if nothing survives.
    pub fn filtered(self, pattern: &Regex) -> Result<Self> {
        let kind = self.kind;
        Self::new(kind, self.words.iter().filter(|w| pattern.is_match(w)))
    }

    #[cfg(test)]
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    /// Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    #[cfg(test)]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Where the lists come from and how they are post-processed
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub palindromes: Option<PathBuf>,
    pub emordnilaps: Option<PathBuf>,
    pub featured: Option<String>,
    pub filter: Option<String>,
}

/// Both lists, loaded once at startup
#[derive(Debug, Clone)]
pub struct WordLists {
    palindromes: WordList,
    emordnilaps: WordList,
}

impl WordLists {
    pub fn new(palindromes: WordList, emordnilaps: WordList) -> Self {
        Self {
            palindromes,
            emordnilaps,
        }
    }

    pub fn load(options: &LoadOptions) -> Result<Self> {
        let filter = match options.filter.as_deref() {
            Some(pattern) => Some(Regex::new(pattern)?),
            None => None,
        };

        let mut palindromes =
            Self::load_one(ListKind::Palindromes, options.palindromes.as_deref())?;
        if let Some(featured) = options.featured.as_deref() {
            palindromes = palindromes.with_featured(featured);
        }
        let mut emordnilaps =
            Self::load_one(ListKind::Emordnilaps, options.emordnilaps.as_deref())?;

        if let Some(pattern) = &filter {
            palindromes = palindromes.filtered(pattern)?;
            emordnilaps = emordnilaps.filtered(pattern)?;
            debug!(
                "filter {:?} kept {} palindromes, {} emordnilaps",
                pattern.as_str(),
                palindromes.len(),
                emordnilaps.len()
            );
        }

        Ok(Self::new(palindromes, emordnilaps))
    }

    fn load_one(kind: ListKind, path: Option<&Path>) -> Result<WordList> {
        let list = match path {
            Some(path) => WordList::from_file(kind, path)?,
            None => WordList::embedded(kind)?,
        };
        info!(
            "loaded {} {} from {}",
            list.len(),
            kind,
            path.map(|p| p.display().to_string())
                .unwrap_or_else(|| "embedded data".to_string())
        );
        Ok(list)
    }

    pub fn get(&self, kind: ListKind) -> &WordList {
        match kind {
            ListKind::Palindromes => &self.palindromes,
            ListKind::Emordnilaps => &self.emordnilaps,
        }
    }
}
