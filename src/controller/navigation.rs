use crate::word_model::ListKind;

/// Everything the page needs to know about where the user is.
///
/// Transitions are pure: each takes the current value plus the length of the
/// active list and returns the next value, so the index stays in range by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub active: ListKind,
    pub word_index: usize,
    pub rotated: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: ListKind::Palindromes,
            word_index: 0,
            rotated: false,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_list(self, kind: ListKind) -> Self {
        Self {
            active: kind,
            word_index: 0,
            ..self
        }
    }

    /// `len` must be the length of the active list and at least 1.
    pub fn next(self, len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            word_index: (self.word_index + 1) % len,
            ..self
        }
    }

    pub fn previous(self, len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            word_index: (self.word_index + len - 1) % len,
            ..self
        }
    }

    pub fn toggle_rotation(self) -> Self {
        Self {
            rotated: !self.rotated,
            ..self
        }
    }
}
