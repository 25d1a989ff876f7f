//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized update
//! 2. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: render cell with StatefulCellRenderer
//! 3. Flush output buffer (single write)
//! 4. Store current frame as previous for next comparison

use std::io;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};
use crate::types::Cell;

pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were changed.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let changed = self.queue_frame(buffer)?;
        self.output.flush_stdout()?;
        self.previous = Some(buffer.clone());
        Ok(changed)
    }

    /// Queue the changed cells without flushing. Returns true if any changed.
    fn queue_frame(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;
        queue!(self.output, BeginSynchronizedUpdate)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();
        let previous = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == width && prev.height() == height);

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                let changed = previous
                    .and_then(|prev| prev.get(x, y))
                    .is_none_or(|prev_cell| !cells_equal(cell, prev_cell));

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell)?;
                }
            }
        }

        queue!(self.output, SetAttribute(Attribute::Reset), EndSynchronizedUpdate)?;
        Ok(has_changes)
    }

    /// Force a full redraw (no diffing). Used after a resize.
    pub fn render_full(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        self.invalidate();
        queue!(self.output, MoveTo(0, 0), Clear(ClearType::All))?;
        self.render(buffer)?;
        Ok(())
    }

    /// Next render will be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Raw mode plus the alternate screen, cursor hidden.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        queue!(self.output, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.output.flush_stdout()?;
        self.invalidate();
        Ok(())
    }

    /// Restore the terminal to the state before [`enter_fullscreen`](Self::enter_fullscreen).
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        queue!(self.output, SetAttribute(Attribute::Reset), Show, LeaveAlternateScreen)?;
        self.output.flush_stdout()?;
        terminal::disable_raw_mode()
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn cells_equal(a: &Cell, b: &Cell) -> bool {
    a.char == b.char && a.attrs == b.attrs && a.fg == b.fg && a.bg == b.bg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Rgba, Style};

    #[test]
    fn test_cells_equal() {
        let a = Cell {
            char: 'X' as u32,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::BOLD,
        };
        assert!(cells_equal(&a, &a.clone()));

        let c = Cell {
            char: 'Y' as u32,
            ..a
        };
        assert!(!cells_equal(&a, &c));
    }

    #[test]
    fn test_unchanged_frame_queues_no_cells() {
        let mut renderer = DiffRenderer::new();
        let mut buffer = FrameBuffer::new(8, 2);
        buffer.draw_text(0, 0, "hello", Style::default(), None);

        assert!(renderer.queue_frame(&buffer).unwrap());
        renderer.previous = Some(buffer.clone());
        renderer.output = OutputBuffer::new();

        assert!(!renderer.queue_frame(&buffer).unwrap());
        assert!(!renderer.output.as_str().contains("hello"));
    }

    #[test]
    fn test_size_change_redraws_everything() {
        let mut renderer = DiffRenderer::new();
        renderer.previous = Some(FrameBuffer::new(4, 1));

        let buffer = FrameBuffer::new(5, 1);
        assert!(renderer.queue_frame(&buffer).unwrap());
    }

    #[test]
    fn test_invalidate() {
        let mut renderer = DiffRenderer::new();
        renderer.previous = Some(FrameBuffer::new(10, 10));
        renderer.invalidate();
        assert!(renderer.previous.is_none());
    }
}
