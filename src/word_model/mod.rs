/// Word model - The immutable word lists and the rules that classify words
///
/// Lists are loaded once at startup and never mutated afterwards; the
/// controller only ever indexes into them.

pub mod classify;
pub mod dictionary;
pub mod word_list;

// Re-export public interface
pub use classify::is_valid_word;
pub use dictionary::build_lists;
pub use word_list::{ListKind, LoadOptions, WordList, WordLists};
