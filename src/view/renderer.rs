use super::tile_layout::{Frame, TILE_WIDTH, Tile};
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write, stdout};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PRIMARY: Color = Color::Magenta;
const SECONDARY: Color = Color::Cyan;

/// Draws frames, touching only the rows that changed since the last one.
pub struct View {
    last_lines: Vec<String>,
    last_terminal_size: (u16, u16),
    needs_full_redraw: bool,
}

impl View {
    pub fn new() -> Self {
        Self {
            last_lines: Vec::new(),
            last_terminal_size: (0, 0),
            needs_full_redraw: true,
        }
    }

    fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))
    }

    fn move_cursor(&self, line: usize, column: usize) -> io::Result<()> {
        execute!(stdout(), cursor::MoveTo(column as u16, line as u16))
    }

    pub fn render(&mut self, frame: &Frame) -> io::Result<()> {
        let current_size = (frame.width, frame.height);
        if self.last_terminal_size != current_size {
            self.needs_full_redraw = true;
            self.last_terminal_size = current_size;
        }

        if self.needs_full_redraw {
            self.clear_screen()?;
            self.needs_full_redraw = false;
            self.last_lines.clear();
        }

        let lines = compose_lines(frame);
        for (i, line) in lines.iter().enumerate() {
            if i >= self.last_lines.len() || self.last_lines[i] != *line {
                self.move_cursor(i, 0)?;
                execute!(stdout(), Clear(ClearType::CurrentLine))?;
                print!("{line}");
            }
        }
        self.last_lines = lines;

        // Park the cursor on the status line, out of the way
        self.move_cursor(frame.height.saturating_sub(1) as usize, 0)?;
        stdout().flush()
    }

    pub fn force_redraw(&mut self) {
        self.needs_full_redraw = true;
    }
}

/// One string per screen row, styling included.
pub fn compose_lines(frame: &Frame) -> Vec<String> {
    let mut lines = vec![String::new(); frame.height as usize];
    let width = frame.width as usize;

    if let Some(line) = lines.get_mut(frame.tab_row as usize) {
        *line = tab_line(frame);
    }
    if let Some(line) = lines.get_mut(frame.tile_row as usize) {
        *line = tile_line(frame);
    }
    if let Some((row, text)) = &frame.help {
        if let Some(line) = lines.get_mut(*row as usize) {
            *line = centered(&clip(text, width), width);
        }
    }
    if let Some(line) = lines.last_mut() {
        *line = clip(&frame.status, width);
    }

    lines
}

fn tab_line(frame: &Frame) -> String {
    let mut line = String::new();
    let mut column = 0usize;

    for tab in &frame.tabs {
        let start = tab.column as usize;
        if start + tab.width as usize > frame.width as usize {
            break;
        }
        line.push_str(&" ".repeat(start.saturating_sub(column)));
        if frame.color && tab.active {
            line.push_str(&format!(
                "{}{}{}{}",
                SetAttribute(Attribute::Bold),
                SetForegroundColor(PRIMARY),
                tab.text,
                SetAttribute(Attribute::Reset)
            ));
        } else {
            line.push_str(&tab.text);
        }
        column = start + tab.width as usize;
    }

    line
}

fn tile_line(frame: &Frame) -> String {
    let mut line = " ".repeat(frame.tile_column as usize);
    let mut column = frame.tile_column as usize;
    let gap = " ".repeat(frame.tile_gap);

    for (i, tile) in frame.tiles.iter().enumerate() {
        let lead = if i == 0 { 0 } else { frame.tile_gap };
        // Drop whatever does not fit rather than letting the terminal wrap
        if column + lead + TILE_WIDTH > frame.width as usize {
            break;
        }
        if lead > 0 {
            line.push_str(&gap);
        }
        line.push_str(&render_tile(tile, frame.color));
        column += lead + TILE_WIDTH;
    }

    line
}

fn render_tile(tile: &Tile, color: bool) -> String {
    let body = tile_body(&tile.glyph);
    if !color {
        return body;
    }
    let fg = if tile.highlighted { PRIMARY } else { SECONDARY };
    format!(
        "{}{}{}{}{}",
        SetAttribute(Attribute::Bold),
        SetForegroundColor(fg),
        body,
        ResetColor,
        SetAttribute(Attribute::Reset)
    )
}

/// `( A )`, padded so every tile is exactly `TILE_WIDTH` columns wide
fn tile_body(glyph: &str) -> String {
    let inner = TILE_WIDTH - 2;
    let glyph_width = glyph.width().clamp(1, inner);
    let left = (inner - glyph_width).div_ceil(2);
    let right = inner - glyph_width - left;
    format!("({}{}{})", " ".repeat(left), glyph, " ".repeat(right))
}

/// Cut `text` to at most `width` display columns.
fn clip(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut clipped = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        clipped.push(c);
    }
    clipped
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
