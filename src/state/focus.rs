//! Focus, button cursor and scroll offset.
//!
//! UI-local state, kept apart from the shared [`Store`](super::Store). Which
//! control has the keyboard, where the button cursor sits and how far the
//! dashboard is scrolled never affect the derived panel values.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

/// The control that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    Buttons,
    Input,
}

impl Focus {
    /// Index used for focused-handler registration.
    pub fn index(self) -> usize {
        match self {
            Self::Buttons => 0,
            Self::Input => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Buttons => Self::Input,
            Self::Input => Self::Buttons,
        }
    }
}

/// Plain copy of the UI state for frame composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiSnapshot {
    pub focus: Focus,
    pub cursor: usize,
    /// First content row shown on screen
    pub scroll: u16,
}

/// Focus, cursor and scroll signals. Cloning shares the same signals.
#[derive(Clone)]
pub struct UiState {
    focus: Signal<Focus>,
    cursor: Signal<usize>,
    scroll: Signal<u16>,
    /// Largest useful scroll offset, written by the render effect. Not a
    /// signal: the effect must not subscribe to its own output.
    max_scroll: Rc<Cell<u16>>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: signal(Focus::default()),
            cursor: signal(0),
            scroll: signal(0),
            max_scroll: Rc::new(Cell::new(0)),
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus.get()
    }

    pub fn set_focus(&self, focus: Focus) {
        self.focus.set(focus);
    }

    /// Switch to the other control.
    pub fn cycle_focus(&self) {
        self.focus.set(self.focus.get().next());
    }

    pub fn cursor(&self) -> usize {
        self.cursor.get()
    }

    /// Move the cursor by `delta`, wrapping within `len` buttons.
    pub fn move_cursor(&self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let len = len as isize;
        let next = (self.cursor.get() as isize + delta).rem_euclid(len);
        self.cursor.set(next as usize);
    }

    pub fn set_cursor(&self, index: usize) {
        self.cursor.set(index);
    }

    /// Scroll offset, clamped to the last known content height.
    pub fn scroll(&self) -> u16 {
        self.scroll.get().min(self.max_scroll.get())
    }

    /// Scroll by `delta` rows, stopping at the top and at the last page.
    pub fn scroll_by(&self, delta: i32) {
        let max = self.max_scroll.get();
        let next = (i32::from(self.scroll()) + delta).clamp(0, i32::from(max));
        self.scroll.set(next as u16);
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll.get()
    }

    /// Record how far the current frame can scroll.
    pub fn set_max_scroll(&self, max: u16) {
        self.max_scroll.set(max);
    }

    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            focus: self.focus.get(),
            cursor: self.cursor.get(),
            scroll: self.scroll.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        let ui = UiState::new();
        assert_eq!(ui.focus(), Focus::Buttons);
        ui.cycle_focus();
        assert_eq!(ui.focus(), Focus::Input);
        ui.cycle_focus();
        assert_eq!(ui.focus(), Focus::Buttons);
    }

    #[test]
    fn test_cursor_wraps() {
        let ui = UiState::new();
        ui.move_cursor(-1, 4);
        assert_eq!(ui.cursor(), 3);
        ui.move_cursor(2, 4);
        assert_eq!(ui.cursor(), 1);
        ui.move_cursor(1, 0);
        assert_eq!(ui.cursor(), 1);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let ui = UiState::new();
        ui.scroll_by(5);
        assert_eq!(ui.scroll(), 0);

        ui.set_max_scroll(8);
        ui.scroll_by(5);
        ui.scroll_by(5);
        assert_eq!(ui.scroll(), 8);
        ui.scroll_by(-20);
        assert_eq!(ui.scroll(), 0);
    }

    #[test]
    fn test_scroll_follows_shrinking_content() {
        let ui = UiState::new();
        ui.set_max_scroll(10);
        ui.scroll_by(10);
        ui.set_max_scroll(4);
        assert_eq!(ui.scroll(), 4);
        ui.scroll_by(-1);
        assert_eq!(ui.scroll(), 3);
    }
}
