use super::navigation::NavigationState;
use crate::word_model::{ListKind, WordList, WordLists};
use tracing::debug;

/// Owns the navigation state and the lists it indexes into.
pub struct ViewController {
    lists: WordLists,
    state: NavigationState,
}

impl ViewController {
    pub fn new(lists: WordLists) -> Self {
        Self {
            lists,
            state: NavigationState::new(),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn active_list(&self) -> &WordList {
        self.lists.get(self.state.active)
    }

    pub fn select_list(&mut self, kind: ListKind) {
        self.state = self.state.select_list(kind);
        debug!("selected {} list", kind);
    }

    pub fn next(&mut self) {
        self.state = self.state.next(self.active_list().len());
        debug!("next word -> {}", self.state.word_index);
    }

    pub fn previous(&mut self) {
        self.state = self.state.previous(self.active_list().len());
        debug!("previous word -> {}", self.state.word_index);
    }

    pub fn toggle_rotation(&mut self) {
        self.state = self.state.toggle_rotation();
        debug!("rotated = {}", self.state.rotated);
    }

    pub fn current_word(&self) -> &str {
        // word_index < len always holds, and lists are never empty
        self.active_list()
            .get(self.state.word_index)
            .unwrap_or_default()
    }

    /// 1-based position and total, for the status line
    pub fn position(&self) -> (usize, usize) {
        (self.state.word_index + 1, self.active_list().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(palindromes: &[&str], emordnilaps: &[&str]) -> ViewController {
        ViewController::new(WordLists::new(
            WordList::new(ListKind::Palindromes, palindromes).unwrap(),
            WordList::new(ListKind::Emordnilaps, emordnilaps).unwrap(),
        ))
    }

    #[test]
    fn test_wraparound_scenario() {
        let mut vc = controller(&["level", "radar"], &["stressed"]);
        assert_eq!(vc.current_word(), "level");
        vc.next();
        assert_eq!(vc.state().word_index, 1);
        assert_eq!(vc.current_word(), "radar");
        vc.next();
        assert_eq!(vc.state().word_index, 0);
        assert_eq!(vc.current_word(), "level");
    }

    #[test]
    fn test_previous_from_start_wraps() {
        let mut vc = controller(&["level", "radar", "civic"], &["stressed"]);
        vc.previous();
        assert_eq!(vc.current_word(), "civic");
        assert_eq!(vc.position(), (3, 3));
    }

    #[test]
    fn test_toggle_rotation_scenario() {
        let mut vc = controller(&["level"], &["stressed"]);
        vc.toggle_rotation();
        assert!(vc.state().rotated);
        vc.toggle_rotation();
        assert!(!vc.state().rotated);
    }

    #[test]
    fn test_select_list_switches_words() {
        let mut vc = controller(&["level", "radar"], &["stressed", "desserts", "live"]);
        vc.next();
        vc.select_list(ListKind::Emordnilaps);
        assert_eq!(vc.state().word_index, 0);
        assert_eq!(vc.current_word(), "stressed");
        assert_eq!(vc.position(), (1, 3));

        vc.previous();
        assert_eq!(vc.current_word(), "live");
    }

    #[test]
    fn test_index_stays_in_range_under_mixed_operations() {
        let mut vc = controller(&["level", "radar", "civic", "kayak"], &["stressed", "desserts"]);
        // Deterministic pseudo-random operation sequence
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            match (seed >> 16) % 5 {
                0 => vc.next(),
                1 => vc.previous(),
                2 => vc.toggle_rotation(),
                3 => vc.select_list(ListKind::Palindromes),
                _ => vc.select_list(ListKind::Emordnilaps),
            }
            assert!(vc.state().word_index < vc.active_list().len());
            assert!(!vc.current_word().is_empty());
        }
    }
}
