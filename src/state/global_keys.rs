//! Key bindings - the dashboard's keyboard map.
//!
//! Global keys work regardless of focus:
//! - Ctrl+C / Escape: quit
//! - Tab / Shift+Tab: switch focus
//! - F1..F9: quick-fill
//! - Ctrl+L: clear the text
//! - PageUp / PageDown: scroll
//!
//! Focused keys:
//! - Buttons: arrows move the cursor, Enter or Space selects
//! - Input: printable characters append, Backspace deletes

use std::rc::Rc;

use super::focus::Focus;
use super::keyboard;
use crate::app::App;

/// Number of function keys bound to quick-fills.
pub const QUICK_FILL_KEYS: usize = 9;

/// Holds the cleanup functions of every registered handler.
pub struct GlobalKeysHandle {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl GlobalKeysHandle {
    /// Unregister every handler.
    pub fn cleanup(self) {
        for cleanup in self.cleanups {
            cleanup();
        }
    }
}

/// Register the global and focused handlers for `app`.
pub fn setup_global_keys(app: &Rc<App>) -> GlobalKeysHandle {
    let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();

    let a = app.clone();
    cleanups.push(Box::new(keyboard::on(move |event| {
        if event.modifiers.ctrl && event.key == "c" {
            a.quit();
            true
        } else {
            false
        }
    })));

    let a = app.clone();
    cleanups.push(Box::new(keyboard::on_key("Escape", move || {
        a.quit();
        true
    })));

    // Two focus targets, so forward and backward land on the same one
    let a = app.clone();
    cleanups.push(Box::new(keyboard::on_key("Tab", move || {
        a.ui().cycle_focus();
        true
    })));

    for n in 0..QUICK_FILL_KEYS {
        let a = app.clone();
        let key = format!("F{}", n + 1);
        cleanups.push(Box::new(keyboard::on_key(&key, move || a.input().quick_fill(n))));
    }

    let a = app.clone();
    cleanups.push(Box::new(keyboard::on(move |event| {
        if event.modifiers.ctrl && event.key == "l" {
            a.input().clear();
            true
        } else {
            false
        }
    })));

    let a = app.clone();
    cleanups.push(Box::new(keyboard::on_key("PageUp", move || {
        a.scroll_pages(-1);
        true
    })));
    let a = app.clone();
    cleanups.push(Box::new(keyboard::on_key("PageDown", move || {
        a.scroll_pages(1);
        true
    })));

    cleanups.push(Box::new(setup_button_keys(app.clone())));
    cleanups.push(Box::new(setup_input_keys(app.clone())));

    GlobalKeysHandle { cleanups }
}

fn setup_button_keys(app: Rc<App>) -> impl FnOnce() {
    keyboard::on_focused(Focus::Buttons.index(), move |event| {
        if event.modifiers.ctrl || event.modifiers.alt {
            return false;
        }
        let len = app.selector().buttons().len();
        match event.key.as_str() {
            "ArrowLeft" | "ArrowUp" => app.ui().move_cursor(-1, len),
            "ArrowRight" | "ArrowDown" => app.ui().move_cursor(1, len),
            "Home" => app.ui().set_cursor(0),
            "End" => app.ui().set_cursor(len.saturating_sub(1)),
            "Enter" | " " => return app.select_cursor(),
            _ => return false,
        }
        true
    })
}

fn setup_input_keys(app: Rc<App>) -> impl FnOnce() {
    keyboard::on_focused(Focus::Input.index(), move |event| {
        if event.key == "Backspace" {
            app.input().backspace();
            return true;
        }
        match event.printable() {
            Some(c) => {
                app.input().type_char(c);
                true
            }
            None => false,
        }
    })
}
