//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the keyboard and mouse modules.
//!
//! - `convert_key_event` - crossterm KeyEvent to [`KeyboardEvent`]
//! - `convert_mouse_event` - crossterm MouseEvent to [`MouseEvent`]
//! - `poll_event` / `read_event` - event reads
//! - `enable_mouse` / `disable_mouse` - mouse capture

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers, MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent, MouseEventKind,
};
use crossterm::execute;

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};
use super::mouse::{MouseAction, MouseButton, MouseEvent, ScrollDirection};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyboardEvent),
    Mouse(MouseEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Anything we do not handle (focus changes, paste)
    None,
}

// =============================================================================
// CONVERSION
// =============================================================================

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

/// Key names follow the DOM convention: "a", "Enter", "ArrowUp", "F1".
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let mut modifiers = convert_modifiers(event.modifiers);
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            modifiers.shift = true;
            "Tab".to_string()
        }
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers,
        state,
    }
}

fn convert_mouse_button(btn: CrosstermMouseButton) -> MouseButton {
    match btn {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}

pub fn convert_mouse_event(event: CrosstermMouseEvent) -> MouseEvent {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(btn) => MouseEvent::new(MouseAction::Down, convert_mouse_button(btn), x, y),
        MouseEventKind::Up(btn) => MouseEvent::new(MouseAction::Up, convert_mouse_button(btn), x, y),
        MouseEventKind::Drag(btn) => MouseEvent::new(MouseAction::Drag, convert_mouse_button(btn), x, y),
        MouseEventKind::Moved => MouseEvent::new(MouseAction::Move, MouseButton::None, x, y),
        MouseEventKind::ScrollUp => MouseEvent::scroll(x, y, ScrollDirection::Up),
        MouseEventKind::ScrollDown => MouseEvent::scroll(x, y, ScrollDirection::Down),
        MouseEventKind::ScrollLeft => MouseEvent::scroll(x, y, ScrollDirection::Left),
        MouseEventKind::ScrollRight => MouseEvent::scroll(x, y, ScrollDirection::Right),
    }
}

pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Key(key) => InputEvent::Key(convert_key_event(key)),
        CrosstermEvent::Mouse(mouse) => InputEvent::Mouse(convert_mouse_event(mouse)),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

pub fn enable_mouse() -> io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

pub fn disable_mouse() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}
