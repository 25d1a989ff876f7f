//! Button grid: the only writer of `selected_button`.
//!
//! [`ButtonSelector`] owns the configured descriptors and the select hook.
//! [`view`] renders one face per descriptor, colored by its category.

use tracing::debug;

use super::category::category_color;
use super::{flow, Action, Line, Panel, Span};
use crate::derive::{classify, Category};
use crate::hook::SelectHook;
use crate::state::focus::{Focus, UiSnapshot};
use crate::state::{Snapshot, Store};
use crate::types::{palette, Attr, ButtonDescriptor, Style};

// =============================================================================
// Writer
// =============================================================================

pub struct ButtonSelector {
    store: Store,
    buttons: Vec<ButtonDescriptor>,
    hook: Box<dyn SelectHook>,
}

impl ButtonSelector {
    pub fn new(store: Store, buttons: Vec<ButtonDescriptor>, hook: Box<dyn SelectHook>) -> Self {
        Self {
            store,
            buttons,
            hook,
        }
    }

    pub fn buttons(&self) -> &[ButtonDescriptor] {
        &self.buttons
    }

    /// Select the configured button at `index`.
    /// Returns false, changing nothing, when the index is out of range.
    pub fn select(&self, index: usize) -> bool {
        let Some(button) = self.buttons.get(index) else {
            debug!(index, "select ignored: no such button");
            return false;
        };
        self.select_descriptor(button.clone());
        true
    }

    /// Store `button` as the selection, then fire the hook.
    pub fn select_descriptor(&self, button: ButtonDescriptor) {
        self.store.set_selected_button(button.clone());
        self.hook.on_select(&button);
    }
}

// =============================================================================
// View
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonFace {
    pub display_text: String,
    pub category: Category,
    /// This face's descriptor is the current selection.
    pub selected: bool,
    /// The keyboard cursor rests on this face.
    pub cursor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub faces: Vec<ButtonFace>,
    pub focused: bool,
}

/// Faces come in three colors only: a digitless button wears the odd color.
fn face_category(display_text: &str) -> Category {
    match classify(display_text).category() {
        Category::Idle => Category::Odd,
        category => category,
    }
}

pub fn view(snapshot: &Snapshot, buttons: &[ButtonDescriptor], ui: UiSnapshot) -> GridView {
    let focused = ui.focus == Focus::Buttons;
    let faces = buttons
        .iter()
        .enumerate()
        .map(|(i, button)| ButtonFace {
            display_text: button.display_text.clone(),
            category: face_category(&button.display_text),
            selected: *button == snapshot.selected_button,
            cursor: focused && i == ui.cursor,
        })
        .collect();

    GridView { faces, focused }
}

impl Panel for GridView {
    fn title(&self) -> &str {
        "Buttons"
    }

    fn lines(&self, width: u16) -> Vec<Line> {
        if self.faces.is_empty() {
            return vec![vec![Span::muted("No buttons configured")]];
        }

        let faces = self
            .faces
            .iter()
            .enumerate()
            .map(|(i, face)| {
                let mut style = Style::filled(category_color(face.category));
                if face.cursor {
                    style = style.with_attrs(Attr::BOLD | Attr::UNDERLINE);
                }
                let marker = if face.selected { '*' } else { ' ' };
                Span::styled(format!("{marker}{} ", face.display_text), style)
                    .on_click(Action::Select(i))
            })
            .collect();

        let mut lines = flow(faces, width, 1);
        lines.push(vec![Span::muted(
            "Arrows move, Enter selects, Tab switches focus, Esc quits",
        )]);
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
