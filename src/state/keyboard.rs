//! Keyboard Module - keyboard events and handler registry.
//!
//! Handlers are registered per thread and dispatched in priority order:
//! 1. Handlers for the focused control (`on_focused`)
//! 2. Key-specific handlers (`on_key`)
//! 3. Global handlers (`on`)
//!
//! The first handler that returns `true` consumes the event.
//!
//! # Example
//!
//! ```ignore
//! use syncboard::state::keyboard;
//!
//! let cleanup = keyboard::on_key("Tab", || {
//!     ui.cycle_focus();
//!     true
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key name ("a", "Enter", "ArrowUp", "F1", ...)
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Press or repeat. Releases are never dispatched.
    pub fn is_actionable(&self) -> bool {
        self.state != KeyState::Release
    }

    /// The typed character, for single-character keys without ctrl/alt.
    pub fn printable(&self) -> Option<char> {
        if self.modifiers.ctrl || self.modifiers.alt {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// Handler for keyboard events. Return true to consume the event.
pub type KeyHandler = Rc<dyn Fn(&KeyboardEvent) -> bool>;

/// Handler for a specific key. Return true to consume the event.
pub type KeySpecificHandler = Rc<dyn Fn() -> bool>;

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    global_handlers: Vec<(usize, KeyHandler)>,
    key_handlers: HashMap<String, Vec<(usize, KeySpecificHandler)>>,
    focused_handlers: HashMap<usize, Vec<(usize, KeyHandler)>>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            global_handlers: Vec::new(),
            key_handlers: HashMap::new(),
            focused_handlers: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Route an event through focused, key-specific and global handlers.
/// Returns true if any handler consumed the event.
pub fn route(focused_index: usize, event: KeyboardEvent) -> bool {
    if !event.is_actionable() {
        return false;
    }

    dispatch_focused(focused_index, &event) || dispatch_to_handlers(&event)
}

fn dispatch_to_handlers(event: &KeyboardEvent) -> bool {
    // Handlers may register or remove handlers, so they run with the
    // registry released.
    let key_handlers: Vec<KeySpecificHandler> = REGISTRY.with(|reg| {
        reg.borrow()
            .key_handlers
            .get(&event.key)
            .map(|handlers| handlers.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default()
    });
    if key_handlers.iter().any(|handler| handler()) {
        return true;
    }

    let global_handlers: Vec<KeyHandler> = REGISTRY.with(|reg| {
        reg.borrow()
            .global_handlers
            .iter()
            .map(|(_, h)| h.clone())
            .collect()
    });
    global_handlers.iter().any(|handler| handler(event))
}

fn dispatch_focused(focused_index: usize, event: &KeyboardEvent) -> bool {
    let handlers: Vec<KeyHandler> = REGISTRY.with(|reg| {
        reg.borrow()
            .focused_handlers
            .get(&focused_index)
            .map(|handlers| handlers.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default()
    });
    handlers.iter().any(|handler| handler(event))
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to all keyboard events.
/// Return true from handler to consume the event.
/// Returns cleanup function.
pub fn on<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.global_handlers.push((id, Rc::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.global_handlers.retain(|(handler_id, _)| *handler_id != id);
        });
    }
}

/// Subscribe to a specific key.
/// Return true to consume the event.
/// Returns cleanup function.
pub fn on_key<F>(key: &str, handler: F) -> impl FnOnce() + use<F>
where
    F: Fn() -> bool + 'static,
{
    let key = key.to_string();
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.key_handlers
            .entry(key.clone())
            .or_default()
            .push((id, Rc::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.key_handlers.get_mut(&key) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.key_handlers.remove(&key);
                }
            }
        });
    }
}

/// Subscribe to events while the control at `index` has focus.
/// Return true from handler to consume the event.
/// Returns cleanup function.
pub fn on_focused<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.focused_handlers
            .entry(index)
            .or_default()
            .push((id, Rc::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.focused_handlers.get_mut(&index) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.focused_handlers.remove(&index);
                }
            }
        });
    }
}

/// Reset keyboard state (for testing)
pub fn reset_keyboard_state() {
    REGISTRY.with(|reg| {
        *reg.borrow_mut() = HandlerRegistry::new();
    });
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // No control registers focused handlers under this index
    const UNFOCUSED: usize = usize::MAX;

    fn setup() {
        reset_keyboard_state();
    }

    fn dispatch(event: KeyboardEvent) -> bool {
        route(UNFOCUSED, event)
    }

    #[test]
    fn test_global_handler_cleanup() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let cleanup = on(move |_event| {
            count_clone.set(count_clone.get() + 1);
            false
        });

        dispatch(KeyboardEvent::new("a"));
        dispatch(KeyboardEvent::new("b"));
        assert_eq!(count.get(), 2);

        cleanup();

        dispatch(KeyboardEvent::new("c"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_key_handler_consumes_before_global() {
        setup();

        let reached = Rc::new(Cell::new(false));
        let reached_clone = reached.clone();
        let _c1 = on_key("Enter", || true);
        let _c2 = on(move |_| {
            reached_clone.set(true);
            false
        });

        assert!(dispatch(KeyboardEvent::new("Enter")));
        assert!(!reached.get());

        assert!(!dispatch(KeyboardEvent::new("x")));
        assert!(reached.get());
    }

    #[test]
    fn test_focused_handlers_run_first() {
        setup();

        let order = Rc::new(RefCell::new(Vec::new()));
        let o1 = order.clone();
        let _c1 = on_focused(1, move |_| {
            o1.borrow_mut().push("focused");
            false
        });
        let o2 = order.clone();
        let _c2 = on(move |_| {
            o2.borrow_mut().push("global");
            false
        });

        route(1, KeyboardEvent::new("a"));
        assert_eq!(*order.borrow(), vec!["focused", "global"]);

        order.borrow_mut().clear();
        route(0, KeyboardEvent::new("a"));
        assert_eq!(*order.borrow(), vec!["global"]);
    }

    #[test]
    fn test_focused_consumption_stops_routing() {
        setup();

        let reached = Rc::new(Cell::new(false));
        let reached_clone = reached.clone();
        let _c1 = on_focused(0, |_| true);
        let _c2 = on(move |_| {
            reached_clone.set(true);
            false
        });

        assert!(route(0, KeyboardEvent::new("Enter")));
        assert!(!reached.get());
    }

    #[test]
    fn test_release_not_dispatched() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let _cleanup = on(move |_| {
            count_clone.set(count_clone.get() + 1);
            false
        });

        let mut event = KeyboardEvent::new("a");
        event.state = KeyState::Release;
        assert!(!route(0, event));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_handler_can_register_handlers() {
        setup();

        let inner_calls = Rc::new(Cell::new(0));
        let inner = inner_calls.clone();
        let _c = on_key("r", move || {
            let inner = inner.clone();
            // Leaked cleanup is fine in a test
            let _ = on_key("s", move || {
                inner.set(inner.get() + 1);
                true
            });
            true
        });

        dispatch(KeyboardEvent::new("r"));
        dispatch(KeyboardEvent::new("s"));
        assert_eq!(inner_calls.get(), 1);
    }

    #[test]
    fn test_printable() {
        assert_eq!(KeyboardEvent::new("a").printable(), Some('a'));
        assert_eq!(KeyboardEvent::new(" ").printable(), Some(' '));
        assert_eq!(KeyboardEvent::new("é").printable(), Some('é'));
        assert_eq!(KeyboardEvent::new("Enter").printable(), None);
        assert_eq!(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()).printable(), None);
        assert_eq!(KeyboardEvent::with_modifiers("A", Modifiers::shift()).printable(), Some('A'));
    }
}
