//! Text input: the only writer of `input_text`.
//!
//! Every edit computes the complete new string and replaces the stored value.
//! There is no incremental edit model.

use super::{flow, Action, Line, Panel, Span};
use crate::config::QuickFill;
use crate::state::focus::{Focus, UiSnapshot};
use crate::state::{Snapshot, Store};
use crate::types::{palette, Style};

pub const INPUT_PLACEHOLDER: &str = "Start typing to see every panel update...";

// =============================================================================
// Writer
// =============================================================================

pub struct TextInputControl {
    store: Store,
    quick_fills: Vec<QuickFill>,
}

impl TextInputControl {
    pub fn new(store: Store, quick_fills: Vec<QuickFill>) -> Self {
        Self { store, quick_fills }
    }

    pub fn quick_fills(&self) -> &[QuickFill] {
        &self.quick_fills
    }

    /// Replace the text with `value`.
    pub fn set_text(&self, value: impl Into<String>) {
        self.store.set_input_text(value.into());
    }

    /// Replace the text with the empty string.
    pub fn clear(&self) {
        self.set_text(String::new());
    }

    /// Append one typed character.
    pub fn type_char(&self, c: char) {
        let mut text = self.store.input_text();
        text.push(c);
        self.set_text(text);
    }

    /// Drop the last character. A no-op write on empty text.
    pub fn backspace(&self) {
        let mut text = self.store.input_text();
        text.pop();
        self.set_text(text);
    }

    /// Apply the quick-fill at `index`. Returns false when there is none.
    pub fn quick_fill(&self, index: usize) -> bool {
        match self.quick_fills.get(index) {
            Some(fill) => {
                self.set_text(fill.text.clone());
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// View
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub text: String,
    pub focused: bool,
    pub quick_fill_labels: Vec<String>,
}

pub fn view(snapshot: &Snapshot, quick_fills: &[QuickFill], ui: UiSnapshot) -> InputView {
    InputView {
        text: snapshot.input_text.clone(),
        focused: ui.focus == Focus::Input,
        quick_fill_labels: quick_fills.iter().map(|q| q.label.clone()).collect(),
    }
}

impl Panel for InputView {
    fn title(&self) -> &str {
        "Text Input"
    }

    fn lines(&self, width: u16) -> Vec<Line> {
        let focus = Action::Focus(Focus::Input);
        let mut field = vec![Span::muted("> ").on_click(focus)];
        if self.text.is_empty() {
            field.push(Span::muted(INPUT_PLACEHOLDER).on_click(focus));
        } else {
            field.push(Span::raw(self.text.clone()).on_click(focus));
        }
        if self.focused {
            field.push(Span::styled("_", Style::fg(palette::FOCUS)));
        }

        let mut chips: Vec<Span> = self
            .quick_fill_labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                Span::styled(format!("[F{} {label}]", i + 1), Style::fg(palette::EVEN))
                    .on_click(Action::QuickFill(i))
            })
            .collect();
        chips.push(Span::styled("[^L Clear]", Style::fg(palette::ODD)).on_click(Action::Clear));

        let mut lines = vec![field];
        lines.extend(flow(chips, width, 1));
        lines
    }

    fn border_style(&self) -> Style {
        if self.focused {
            Style::fg(palette::FOCUS)
        } else {
            Style::fg(palette::BORDER)
        }
    }
}
