//! State inspector: the raw shared values, as a data viewer would print them.
//!
//! `is_even` prints "false" both for odd numbers and for no number at all.
//! The two cases are not told apart.

use super::{Line, Panel, Span};
use crate::derive::{char_count, digit_run};
use crate::state::Snapshot;
use crate::types::{palette, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorView {
    pub display_text: String,
    pub label_text: String,
    pub input_text: String,
    pub input_length: usize,
    /// The raw digit run, or "null".
    pub button_number: String,
    /// "true" or "false".
    pub is_even: String,
}

impl InspectorView {
    /// Field name and printed value, in display order.
    pub fn rows(&self) -> [(&'static str, String); 6] {
        [
            ("selected_button.display_text", format!("\"{}\"", self.display_text)),
            ("selected_button.label_text", format!("\"{}\"", self.label_text)),
            ("input_text", format!("\"{}\"", self.input_text)),
            ("input_text.length", self.input_length.to_string()),
            ("button_number", self.button_number.clone()),
            ("is_even", self.is_even.clone()),
        ]
    }
}

pub fn view(snapshot: &Snapshot) -> InspectorView {
    let button = &snapshot.selected_button;
    let class = snapshot.class();

    InspectorView {
        display_text: button.display_text.clone(),
        label_text: button.label_text.clone(),
        input_text: snapshot.input_text.clone(),
        input_length: char_count(&snapshot.input_text),
        button_number: digit_run(&button.display_text)
            .unwrap_or("null")
            .to_string(),
        is_even: class.is_even.to_string(),
    }
}

impl Panel for InspectorView {
    fn title(&self) -> &str {
        "State Inspector"
    }

    fn lines(&self, _width: u16) -> Vec<Line> {
        self.rows()
            .into_iter()
            .map(|(name, value)| {
                vec![
                    Span::muted(format!("{name}: ")),
                    Span::styled(value, Style::fg(palette::INSPECTOR)),
                ]
            })
            .collect()
    }

    fn border_style(&self) -> Style {
        Style::fg(palette::INSPECTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonDescriptor;

    fn snap(display: &str, text: &str) -> Snapshot {
        Snapshot::new(ButtonDescriptor::new(display, "label"), text)
    }

    #[test]
    fn test_initial_values() {
        let view = view(&Snapshot::default());
        assert_eq!(view.display_text, "");
        assert_eq!(view.label_text, "<no selection>");
        assert_eq!(view.input_length, 0);
        assert_eq!(view.button_number, "null");
        assert_eq!(view.is_even, "false");
    }

    #[test]
    fn test_even_number() {
        let view = view(&snap("Button 4", "hey"));
        assert_eq!(view.button_number, "4");
        assert_eq!(view.is_even, "true");
        assert_eq!(view.input_length, 3);
    }

    #[test]
    fn test_odd_and_absent_both_false() {
        assert_eq!(view(&snap("Button 7", "")).is_even, "false");
        assert_eq!(view(&snap("Nothing", "")).is_even, "false");
        assert_eq!(view(&snap("Button 0", "")).is_even, "false");
    }

    #[test]
    fn test_digit_run_verbatim() {
        assert_eq!(view(&snap("Agent 007", "")).button_number, "007");
    }

    #[test]
    fn test_rows_quote_strings() {
        let rows = view(&snap("Button 7", "abc")).rows();
        assert_eq!(rows[0], ("selected_button.display_text", "\"Button 7\"".to_string()));
        assert_eq!(rows[2], ("input_text", "\"abc\"".to_string()));
        assert_eq!(rows[3], ("input_text.length", "3".to_string()));
        assert_eq!(rows[4], ("button_number", "7".to_string()));
    }
}
