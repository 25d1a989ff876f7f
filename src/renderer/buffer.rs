//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells holding what should be displayed.
//! Flat storage, row-major: `index = y * width + x`. Wide characters occupy
//! two cells; the second holds [`Cell::CONTINUATION`].

use crate::layout::{char_width, truncate_to_width};
use crate::types::{Cell, Rect, Style};

const BORDER_TOP_LEFT: char = '╭';
const BORDER_TOP_RIGHT: char = '╮';
const BORDER_BOTTOM_LEFT: char = '╰';
const BORDER_BOTTOM_RIGHT: char = '╯';
const BORDER_HORIZONTAL: char = '─';
const BORDER_VERTICAL: char = '│';

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a single cell, honoring the clip rect. Returns true if set.
    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell, clip: Option<&Rect>) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if clip.is_some_and(|c| !c.contains(x, y)) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Draw text at a position.
    ///
    /// Returns the number of cells advanced (wide characters count two).
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style, clip: Option<&Rect>) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            // A wide glyph must fit whole inside the clip
            if w == 2 && clip.is_some_and(|c| !c.contains(col + 1, y)) {
                break;
            }

            if self.set_cell(col, y, Cell::styled(ch, style), clip) && w == 2 {
                let mut tail = Cell::styled(' ', style);
                tail.char = Cell::CONTINUATION;
                self.set_cell(col + 1, y, tail, clip);
            }
            col = col.saturating_add(w);
        }

        col.saturating_sub(x)
    }

    /// Draw a rounded border around `rect` with `title` set into the top edge.
    pub fn draw_border(&mut self, rect: Rect, style: Style, title: &str) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        for x in rect.x + 1..right {
            self.set_cell(x, rect.y, Cell::styled(BORDER_HORIZONTAL, style), None);
            self.set_cell(x, bottom, Cell::styled(BORDER_HORIZONTAL, style), None);
        }
        for y in rect.y + 1..bottom {
            self.set_cell(rect.x, y, Cell::styled(BORDER_VERTICAL, style), None);
            self.set_cell(right, y, Cell::styled(BORDER_VERTICAL, style), None);
        }
        self.set_cell(rect.x, rect.y, Cell::styled(BORDER_TOP_LEFT, style), None);
        self.set_cell(right, rect.y, Cell::styled(BORDER_TOP_RIGHT, style), None);
        self.set_cell(rect.x, bottom, Cell::styled(BORDER_BOTTOM_LEFT, style), None);
        self.set_cell(right, bottom, Cell::styled(BORDER_BOTTOM_RIGHT, style), None);

        if !title.is_empty() && rect.width > 4 {
            let label = format!(" {title} ");
            let fitted = truncate_to_width(&label, rect.width - 4);
            let edge = Rect::new(rect.x + 2, rect.y, rect.width - 4, 1);
            self.draw_text(rect.x + 2, rect.y, fitted, style.bold(), Some(&edge));
        }
    }

    /// Copy rows `top..top + height` into a new buffer of the same width.
    /// Rows past the end are left blank.
    pub fn crop_rows(&self, top: u16, height: u16) -> FrameBuffer {
        let mut out = FrameBuffer::new(self.width, height);
        for row in 0..height {
            let src_y = top.saturating_add(row);
            if src_y >= self.height {
                break;
            }
            let src = self.index(0, src_y);
            let dst = out.index(0, row);
            let len = self.width as usize;
            out.cells[dst..dst + len].copy_from_slice(&self.cells[src..src + len]);
        }
        out
    }

    /// Text content of each row, trailing spaces removed. No styling.
    pub fn to_plain_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let mut line = String::with_capacity(self.width as usize);
                for x in 0..self.width {
                    let cell = &self.cells[self.index(x, y)];
                    if cell.char == Cell::CONTINUATION {
                        continue;
                    }
                    line.push(char::from_u32(cell.char).unwrap_or(' '));
                }
                line.truncate(line.trim_end().len());
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{palette, Rgba};

    #[test]
    fn test_new_is_blank() {
        let buffer = FrameBuffer::new(4, 2);
        assert_eq!(buffer.get(3, 1), Some(&Cell::default()));
        assert_eq!(buffer.get(4, 1), None);
        assert_eq!(buffer.to_plain_lines(), vec!["", ""]);
    }

    #[test]
    fn test_draw_text_clipped() {
        let mut buffer = FrameBuffer::new(10, 1);
        let clip = Rect::new(0, 0, 3, 1);
        buffer.draw_text(0, 0, "hello", Style::default(), Some(&clip));
        assert_eq!(buffer.to_plain_lines(), vec!["hel"]);
    }

    #[test]
    fn test_draw_text_style() {
        let mut buffer = FrameBuffer::new(5, 1);
        buffer.draw_text(1, 0, "ab", Style::fg(palette::ODD), None);
        let cell = buffer.get(1, 0).unwrap();
        assert_eq!(cell.char, 'a' as u32);
        assert_eq!(cell.fg, palette::ODD);
        assert_eq!(buffer.get(0, 0).unwrap().fg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_wide_chars_use_continuation() {
        let mut buffer = FrameBuffer::new(6, 1);
        let advanced = buffer.draw_text(0, 0, "日本", Style::default(), None);
        assert_eq!(advanced, 4);
        assert_eq!(buffer.get(1, 0).unwrap().char, Cell::CONTINUATION);
        assert_eq!(buffer.to_plain_lines(), vec!["日本"]);
    }

    #[test]
    fn test_border_and_title() {
        let mut buffer = FrameBuffer::new(12, 3);
        buffer.draw_border(Rect::new(0, 0, 12, 3), Style::default(), "Menu");
        assert_eq!(
            buffer.to_plain_lines(),
            vec!["╭─ Menu ───╮", "│          │", "╰──────────╯"]
        );
    }

    #[test]
    fn test_crop_rows() {
        let mut buffer = FrameBuffer::new(3, 3);
        buffer.draw_text(0, 0, "aaa", Style::default(), None);
        buffer.draw_text(0, 1, "bbb", Style::default(), None);
        buffer.draw_text(0, 2, "ccc", Style::default(), None);

        let view = buffer.crop_rows(1, 3);
        assert_eq!(view.height(), 3);
        assert_eq!(view.to_plain_lines(), vec!["bbb", "ccc", ""]);
    }
}
