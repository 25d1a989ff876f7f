//! Terminal size signals.
//!
//! The root signals of the rendering pipeline, next to the store: a resize
//! re-runs the frame derivation the same way a state write does.

use spark_signals::{signal, Signal};

thread_local! {
    static TERMINAL_WIDTH: Signal<u16> = signal(80);
    static TERMINAL_HEIGHT: Signal<u16> = signal(24);
}

pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|w| w.get())
}

pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|h| h.get())
}

/// Set the terminal size (called on resize events).
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_WIDTH.with(|w| w.set(width));
    TERMINAL_HEIGHT.with(|h| h.set(height));
}

/// Detect and set the actual terminal size via crossterm.
pub fn detect_terminal_size() {
    match crossterm::terminal::size() {
        Ok((width, height)) => set_terminal_size(width, height),
        Err(err) => tracing::warn!(%err, "could not query terminal size, keeping 80x24"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_size() {
        set_terminal_size(120, 40);
        assert_eq!(terminal_width(), 120);
        assert_eq!(terminal_height(), 40);
    }
}
