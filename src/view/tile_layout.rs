use crate::controller::ViewController;
use crate::word_model::ListKind;

/// Display columns taken by one tile, brackets included: `( A )`
pub const TILE_WIDTH: usize = 5;

const HELP_TEXT: &str = concat!(
    "Use arrow keys (\u{2190} \u{2192}) to navigate words, ",
    "Space to rotate, Tab to switch lists, q to quit."
);
const TAB_SEPARATOR: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub tile_gap: usize,
    pub show_help: bool,
    pub color: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            tile_gap: 2,
            show_help: true,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub kind: ListKind,
    pub text: String,
    pub active: bool,
    /// First column of the label
    pub column: u16,
    pub width: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub glyph: String,
    pub highlighted: bool,
}

/// What a screen position corresponds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tab(ListKind),
    Tiles,
}

/// A fully laid out screen for one navigation state.
///
/// Composing a frame is pure; only the renderer touches the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub tab_row: u16,
    pub tabs: Vec<TabLabel>,
    pub tile_row: u16,
    pub tile_column: u16,
    pub tile_gap: usize,
    /// Tiles in screen order, left to right
    pub tiles: Vec<Tile>,
    /// Logical index of the highlighted letter
    pub center_index: usize,
    pub total_width: usize,
    pub help: Option<(u16, String)>,
    pub status: String,
    pub color: bool,
}

impl Frame {
    pub fn compose(controller: &ViewController, options: &ViewOptions, size: (u16, u16)) -> Self {
        let (width, height) = size;
        let state = controller.state();
        let word = controller.current_word();

        let letters: Vec<char> = word.chars().collect();
        let count = letters.len();
        let center_index = count / 2;
        let total_width = total_width(count, options.tile_gap);

        let mut tiles: Vec<Tile> = letters
            .iter()
            .enumerate()
            .map(|(i, &c)| Tile {
                glyph: display_glyph(c),
                highlighted: i == center_index,
            })
            .collect();
        if state.rotated {
            // The row turns half way round but each tile turns back upright,
            // so the letters read in reverse order
            tiles.reverse();
        }

        let middle = height / 2;
        let tab_row = middle.saturating_sub(3);
        let tabs = layout_tabs(state.active, width);

        let tile_column = (width as usize).saturating_sub(total_width) / 2;

        let help = if options.show_help && height > middle + 3 {
            Some((middle + 2, HELP_TEXT.to_string()))
        } else {
            None
        };

        let (position, total) = controller.position();
        let status = format!(
            "{}  {}/{}{}",
            state.active.label(),
            position,
            total,
            if state.rotated { "  (rotated)" } else { "" }
        );

        Self {
            width,
            height,
            tab_row,
            tabs,
            tile_row: middle,
            tile_column: tile_column as u16,
            tile_gap: options.tile_gap,
            tiles,
            center_index,
            total_width,
            help,
            status,
            color: options.color,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if row == self.tab_row {
            return self
                .tabs
                .iter()
                .find(|tab| column >= tab.column && column < tab.column + tab.width)
                .map(|tab| Hit::Tab(tab.kind));
        }

        let start = self.tile_column as usize;
        let column = column as usize;
        if row == self.tile_row && column >= start && column < start + self.total_width {
            return Some(Hit::Tiles);
        }

        None
    }
}

pub fn total_width(tile_count: usize, gap: usize) -> usize {
    if tile_count == 0 {
        return 0;
    }
    TILE_WIDTH * tile_count + gap * (tile_count - 1)
}

fn layout_tabs(active: ListKind, width: u16) -> Vec<TabLabel> {
    let labels: Vec<(ListKind, String)> = ListKind::ALL
        .iter()
        .map(|&kind| {
            let text = if kind == active {
                format!("[{}]", kind.label())
            } else {
                format!(" {} ", kind.label())
            };
            (kind, text)
        })
        .collect();

    let row_width: usize = labels.iter().map(|(_, text)| text.chars().count()).sum::<usize>()
        + TAB_SEPARATOR * (labels.len() - 1);
    let mut column = (width as usize).saturating_sub(row_width) / 2;

    labels
        .into_iter()
        .map(|(kind, text)| {
            let label_width = text.chars().count();
            let tab = TabLabel {
                kind,
                active: kind == active,
                column: column as u16,
                width: label_width as u16,
                text,
            };
            column += label_width + TAB_SEPARATOR;
            tab
        })
        .collect()
}

/// Tiles show letters uppercased
fn display_glyph(c: char) -> String {
    c.to_uppercase().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_model::{WordList, WordLists};

    fn controller(palindromes: &[&str], emordnilaps: &[&str]) -> ViewController {
        ViewController::new(WordLists::new(
            WordList::new(ListKind::Palindromes, palindromes).unwrap(),
            WordList::new(ListKind::Emordnilaps, emordnilaps).unwrap(),
        ))
    }

    fn glyphs(frame: &Frame) -> Vec<&str> {
        frame.tiles.iter().map(|t| t.glyph.as_str()).collect()
    }

    #[test]
    fn test_tiles_and_geometry() {
        let vc = controller(&["level"], &["stressed"]);
        let frame = Frame::compose(&vc, &ViewOptions::default(), (80, 24));

        assert_eq!(glyphs(&frame), vec!["L", "E", "V", "E", "L"]);
        assert_eq!(frame.center_index, 2);
        assert!(frame.tiles[2].highlighted);
        assert_eq!(frame.tiles.iter().filter(|t| t.highlighted).count(), 1);
        // 5 tiles * 5 columns + 4 gaps * 2 columns
        assert_eq!(frame.total_width, 33);
        assert_eq!(frame.tile_column, (80 - 33) / 2);
        assert_eq!(frame.tile_row, 12);
        assert_eq!(frame.status, "Palindromes  1/1");
    }

    #[test]
    fn test_rotation_reverses_row_with_upright_letters() {
        let mut vc = controller(&["noon"], &["stressed", "desserts"]);
        vc.select_list(ListKind::Emordnilaps);
        vc.toggle_rotation();
        let frame = Frame::compose(&vc, &ViewOptions::default(), (80, 24));

        // Turning "stressed" around reads as its mirror word
        let shown: String = glyphs(&frame).concat();
        assert_eq!(shown, "DESSERTS");
        // Center letter index 4 lands at screen position 8 - 1 - 4
        assert!(frame.tiles[3].highlighted);
        assert_eq!(frame.tiles.iter().filter(|t| t.highlighted).count(), 1);
        assert!(frame.status.ends_with("(rotated)"));

        // Rotating does not move the row
        vc.toggle_rotation();
        let upright = Frame::compose(&vc, &ViewOptions::default(), (80, 24));
        assert_eq!(glyphs(&upright).concat(), "STRESSED");
        assert_eq!(upright.tile_column, frame.tile_column);
        assert_eq!(upright.total_width, frame.total_width);
    }

    #[test]
    fn test_even_length_center() {
        let vc = controller(&["noon"], &["stressed"]);
        let frame = Frame::compose(&vc, &ViewOptions::default(), (80, 24));
        assert_eq!(frame.center_index, 2);
        assert!(frame.tiles[2].highlighted);
    }

    #[test]
    fn test_hit_testing() {
        let vc = controller(&["level"], &["stressed"]);
        let frame = Frame::compose(&vc, &ViewOptions::default(), (80, 24));

        let palindromes = &frame.tabs[0];
        let emordnilaps = &frame.tabs[1];
        assert!(palindromes.active);
        assert_eq!(palindromes.text, "[Palindromes]");
        assert_eq!(emordnilaps.text, " Emordnilaps ");

        assert_eq!(
            frame.hit(emordnilaps.column, frame.tab_row),
            Some(Hit::Tab(ListKind::Emordnilaps))
        );
        assert_eq!(
            frame.hit(palindromes.column + palindromes.width - 1, frame.tab_row),
            Some(Hit::Tab(ListKind::Palindromes))
        );
        // The gap between the labels is not a tab
        assert_eq!(frame.hit(palindromes.column + palindromes.width, frame.tab_row), None);

        assert_eq!(frame.hit(frame.tile_column, frame.tile_row), Some(Hit::Tiles));
        assert_eq!(
            frame.hit(frame.tile_column + frame.total_width as u16, frame.tile_row),
            None
        );
        assert_eq!(frame.hit(0, 0), None);
    }

    #[test]
    fn test_help_line_respects_options_and_height() {
        let vc = controller(&["level"], &["stressed"]);
        let frame = Frame::compose(&vc, &ViewOptions::default(), (80, 24));
        assert_eq!(frame.help.as_ref().map(|(row, _)| *row), Some(14));

        let options = ViewOptions {
            show_help: false,
            ..ViewOptions::default()
        };
        assert!(Frame::compose(&vc, &options, (80, 24)).help.is_none());
        assert!(Frame::compose(&vc, &ViewOptions::default(), (80, 2)).help.is_none());
    }

    #[test]
    fn test_total_width() {
        assert_eq!(total_width(0, 2), 0);
        assert_eq!(total_width(1, 2), TILE_WIDTH);
        assert_eq!(total_width(3, 1), 17);
    }
}
