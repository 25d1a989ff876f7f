//! Store - the single source of truth.
//!
//! Holds the two shared values as signals:
//! - `selected_button` - the active [`ButtonDescriptor`] (placeholder at start)
//! - `input_text` - the typed string (empty at start)
//!
//! Both setters replace their value wholesale and bump a revision counter
//! inside one `batch`, so dependents re-run once per write and never see the
//! new value paired with the old revision. The revision makes every
//! assignment observable, even when the new value equals the old one.
//!
//! Display code never holds a `Store`. It receives a [`Snapshot`].
//!
//! # Example
//!
//! ```ignore
//! let store = Store::new();
//! store.set_input_text("abc".to_string());
//! assert_eq!(store.snapshot().input_text, "abc");
//! ```

use spark_signals::{batch, peek, signal, Signal};
use tracing::debug;

use crate::derive::{classify, ButtonClass, TextStats};
use crate::types::ButtonDescriptor;

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only copy of the shared state at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub selected_button: ButtonDescriptor,
    pub input_text: String,
    /// Number of setter calls that produced this snapshot.
    pub revision: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            selected_button: ButtonDescriptor::placeholder(),
            input_text: String::new(),
            revision: 0,
        }
    }
}

impl Snapshot {
    pub fn new(selected_button: ButtonDescriptor, input_text: impl Into<String>) -> Self {
        Self {
            selected_button,
            input_text: input_text.into(),
            revision: 0,
        }
    }

    /// Classification of the selected button's display text.
    pub fn class(&self) -> ButtonClass {
        classify(&self.selected_button.display_text)
    }

    /// Word and letter statistics of the input text.
    pub fn stats(&self) -> TextStats {
        TextStats::of(&self.input_text)
    }
}

// =============================================================================
// Store
// =============================================================================

/// Container for the shared state. Cloning shares the same signals.
#[derive(Clone)]
pub struct Store {
    selected_button: Signal<ButtonDescriptor>,
    input_text: Signal<String>,
    revision: Signal<u64>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store holding the placeholder selection and empty text.
    pub fn new() -> Self {
        Self {
            selected_button: signal(ButtonDescriptor::placeholder()),
            input_text: signal(String::new()),
            revision: signal(0),
        }
    }

    /// Current selection (tracked).
    pub fn selected_button(&self) -> ButtonDescriptor {
        self.selected_button.get()
    }

    /// Current text (tracked).
    pub fn input_text(&self) -> String {
        self.input_text.get()
    }

    /// Current revision (tracked).
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Read both values at once (tracked).
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            selected_button: self.selected_button.get(),
            input_text: self.input_text.get(),
            revision: self.revision.get(),
        }
    }

    /// Replace the selection. Accepts any descriptor.
    pub fn set_selected_button(&self, button: ButtonDescriptor) {
        debug!(display_text = %button.display_text, label_text = %button.label_text, "selected_button set");
        batch(|| {
            self.selected_button.set(button);
            self.bump();
        });
    }

    /// Replace the text. Accepts any string.
    pub fn set_input_text(&self, text: String) {
        debug!(chars = text.chars().count(), "input_text set");
        batch(|| {
            self.input_text.set(text);
            self.bump();
        });
    }

    // Untracked read: a setter called from an effect must not subscribe it.
    fn bump(&self) {
        let next = peek(|| self.revision.get()) + 1;
        self.revision.set(next);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::effect;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state() {
        let store = Store::new();
        let snap = store.snapshot();
        assert!(snap.selected_button.is_placeholder());
        assert_eq!(snap.input_text, "");
        assert_eq!(snap.revision, 0);
        assert_eq!(snap, Snapshot::default());
    }

    #[test]
    fn test_setters_replace_values() {
        let store = Store::new();
        store.set_selected_button(ButtonDescriptor::new("Button 2", "two"));
        store.set_input_text("hello".to_string());

        assert_eq!(store.selected_button(), ButtonDescriptor::new("Button 2", "two"));
        assert_eq!(store.input_text(), "hello");
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        other.set_input_text("shared".to_string());
        assert_eq!(store.input_text(), "shared");
    }

    #[test]
    fn test_dependents_rerun_on_write() {
        let store = Store::new();
        let runs = Rc::new(Cell::new(0));
        let seen = Rc::new(std::cell::RefCell::new(String::new()));

        let reader = store.clone();
        let count = runs.clone();
        let seen_in = seen.clone();
        let _e = effect(move || {
            *seen_in.borrow_mut() = reader.input_text();
            count.set(count.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        store.set_input_text("abc".to_string());
        assert_eq!(*seen.borrow(), "abc");
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_one_rerun_per_write_with_fresh_revision() {
        let store = Store::new();
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));

        let reader = store.clone();
        let seen_in = seen.clone();
        let _e = effect(move || {
            let snap = reader.snapshot();
            seen_in.borrow_mut().push((snap.input_text, snap.revision));
        });

        store.set_input_text("a".to_string());
        store.set_selected_button(ButtonDescriptor::new("Button 4", "four"));
        store.set_input_text("b".to_string());

        assert_eq!(
            *seen.borrow(),
            vec![
                (String::new(), 0),
                ("a".to_string(), 1),
                ("a".to_string(), 2),
                ("b".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_repeated_assignment_still_notifies() {
        let store = Store::new();
        let button = ButtonDescriptor::new("Button 1", "one");
        store.set_selected_button(button.clone());

        let runs = Rc::new(Cell::new(0));
        let reader = store.clone();
        let count = runs.clone();
        let _e = effect(move || {
            let _ = reader.snapshot();
            count.set(count.get() + 1);
        });
        let before = runs.get();

        store.set_selected_button(button);
        assert_eq!(runs.get(), before + 1);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_snapshot_derivations() {
        let snap = Snapshot::new(ButtonDescriptor::new("Run 42 Now", "x"), "Hello FileMaker");
        assert_eq!(snap.class().number, 42);
        assert!(snap.class().is_even);
        assert_eq!(snap.stats().word_count(), 2);
    }
}
