//! Components - the dashboard panels.
//!
//! Every display panel is a pure `view(&Snapshot) -> View`. The returned view
//! implements [`Panel`] and knows how to lay itself out as styled lines. Views
//! carry no state handles, so a display panel cannot write to the store.
//!
//! The two writers are the exception: [`button_grid::ButtonSelector`] owns
//! `selected_button` writes, and [`text_input::TextInputControl`] owns
//! `input_text` writes.
//!
//! # Panels
//!
//! - [`button_grid`] - button faces (writer of the selection)
//! - [`text_input`] - text field and quick-fill shortcuts (writer of the text)
//! - [`status`] - five numbered slots
//! - [`category`] - special/even/odd/idle badge
//! - [`menu`] - five-item menu highlighter
//! - [`transforms`] - raw, upper-cased, counted and reversed text
//! - [`analysis`] - word, vowel and consonant counts
//! - [`inspector`] - raw state values
//! - [`current`] - selected label and text as plain values

pub mod analysis;
pub mod button_grid;
pub mod category;
pub mod current;
pub mod inspector;
pub mod menu;
pub mod status;
pub mod text_input;
pub mod transforms;

use crate::layout::string_width;
use crate::state::focus::Focus;
use crate::types::{palette, Style};

// =============================================================================
// Action
// =============================================================================

/// What a click target does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Select the configured button at this index.
    Select(usize),
    /// Apply the quick-fill text at this index.
    QuickFill(usize),
    /// Clear the input text.
    Clear,
    /// Move keyboard focus.
    Focus(Focus),
}

// =============================================================================
// Span / Line
// =============================================================================

/// A run of text drawn with one style, optionally clickable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
    pub action: Option<Action>,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self::styled(text, Style::default())
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            action: None,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::styled(text, Style::fg(palette::MUTED))
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> u16 {
        string_width(&self.text)
    }
}

/// One row of spans.
pub type Line = Vec<Span>;

/// Concatenated text of a line, without styling.
pub fn line_text(line: &[Span]) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

/// Lay out `items` left to right, starting a new line when the next item
/// would overflow `width`. Items are separated by `gap` spaces.
pub fn flow(items: Vec<Span>, width: u16, gap: u16) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current: Line = Vec::new();
    let mut used = 0u16;

    for item in items {
        let w = item.width();
        if !current.is_empty() && used.saturating_add(gap).saturating_add(w) > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" ".repeat(gap as usize)));
            used = used.saturating_add(gap);
        }
        used = used.saturating_add(w);
        current.push(item);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// =============================================================================
// Panel
// =============================================================================

/// A bordered, titled box of styled lines.
pub trait Panel {
    fn title(&self) -> &str;

    /// Content lines for an inner width of `width` cells.
    fn lines(&self, width: u16) -> Vec<Line>;

    fn border_style(&self) -> Style {
        Style::fg(palette::BORDER)
    }

    /// Total height including the border.
    fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        (self.lines(inner).len() as u16).saturating_add(2)
    }
}
