//! Current values panel: the selected label and the typed text.

use super::{Line, Panel, Span};
use crate::state::Snapshot;
use crate::types::{palette, Style};

pub const TEXT_PLACEHOLDER: &str = "Type something above...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentView {
    pub label: String,
    pub text: String,
}

pub fn view(snapshot: &Snapshot) -> CurrentView {
    let text = if snapshot.input_text.is_empty() {
        TEXT_PLACEHOLDER.to_string()
    } else {
        snapshot.input_text.clone()
    };

    CurrentView {
        label: snapshot.selected_button.label_text.clone(),
        text,
    }
}

impl Panel for CurrentView {
    fn title(&self) -> &str {
        "Current Values"
    }

    fn lines(&self, _width: u16) -> Vec<Line> {
        vec![
            vec![
                Span::muted("Button state: "),
                Span::styled(self.label.clone(), Style::fg(palette::SPECIAL).bold()),
            ],
            vec![
                Span::muted("Input state:  "),
                Span::styled(self.text.clone(), Style::fg(palette::EVEN).bold()),
            ],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonDescriptor;

    #[test]
    fn test_initial() {
        let view = view(&Snapshot::default());
        assert_eq!(view.label, "<no selection>");
        assert_eq!(view.text, TEXT_PLACEHOLDER);
    }

    #[test]
    fn test_follows_state() {
        let view = view(&Snapshot::new(ButtonDescriptor::new("Button 2", "two"), "typed"));
        assert_eq!(view.label, "two");
        assert_eq!(view.text, "typed");
    }
}
