//! Text transforms panel: raw, upper-cased, counted and (for odd numbers)
//! reversed text.

use super::{Line, Panel, Span};
use crate::derive::{char_count, reversed};
use crate::state::Snapshot;
use crate::types::{palette, Style};

pub const RAW_PLACEHOLDER: &str = "Type something in the input above...";
pub const UPPER_PLACEHOLDER: &str = "TYPE SOMETHING...";
pub const REVERSED_PLACEHOLDER: &str = "...gnihtemos epyT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformsView {
    pub raw: String,
    pub upper: String,
    pub char_count: usize,
    /// Present only while an odd-numbered button is selected.
    pub reversed: Option<String>,
}

pub fn view(snapshot: &Snapshot) -> TransformsView {
    let text = snapshot.input_text.as_str();
    let class = snapshot.class();

    let or_placeholder = |value: String, placeholder: &str| {
        if value.is_empty() {
            placeholder.to_string()
        } else {
            value
        }
    };

    TransformsView {
        raw: or_placeholder(text.to_string(), RAW_PLACEHOLDER),
        upper: or_placeholder(text.to_uppercase(), UPPER_PLACEHOLDER),
        char_count: char_count(text),
        reversed: (class.has_number() && class.is_odd)
            .then(|| or_placeholder(reversed(text), REVERSED_PLACEHOLDER)),
    }
}

impl Panel for TransformsView {
    fn title(&self) -> &str {
        "Text Transforms"
    }

    fn lines(&self, _width: u16) -> Vec<Line> {
        let label = |text: &str| Span::muted(format!("{text:<10}"));
        let mut lines = vec![
            vec![label("Normal:"), Span::raw(self.raw.clone())],
            vec![
                label("Upper:"),
                Span::styled(self.upper.clone(), Style::fg(palette::EVEN).bold()),
            ],
            vec![
                label("Count:"),
                Span::styled(format!("{} characters", self.char_count), Style::fg(palette::ACTIVE)),
            ],
        ];
        if let Some(rev) = &self.reversed {
            lines.push(vec![
                label("Reversed:"),
                Span::styled(rev.clone(), Style::fg(palette::ODD)),
            ]);
        }
        lines
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
    fn test_placeholders_when_empty() {
        let view = view(&Snapshot::default());
        assert_eq!(view.raw, RAW_PLACEHOLDER);
        assert_eq!(view.upper, UPPER_PLACEHOLDER);
        assert_eq!(view.char_count, 0);
        assert_eq!(view.reversed, None);
    }

    #[test]
    fn test_transforms() {
        let view = view(&snap("Button 2", "Hello"));
        assert_eq!(view.raw, "Hello");
        assert_eq!(view.upper, "HELLO");
        assert_eq!(view.char_count, 5);
    }

    #[test]
    fn test_reversed_only_for_odd() {
        assert_eq!(view(&snap("Button 7", "abc")).reversed.as_deref(), Some("cba"));
        assert_eq!(view(&snap("Button 1", "")).reversed.as_deref(), Some(REVERSED_PLACEHOLDER));
        assert_eq!(view(&snap("Button 2", "abc")).reversed, None);
        assert_eq!(view(&snap("Button 1000", "abc")).reversed, None);
        assert_eq!(view(&snap("Nothing", "abc")).reversed, None);
    }

    #[test]
    fn test_reversed_line_present() {
        assert_eq!(view(&snap("Button 3", "x")).lines(30).len(), 4);
        assert_eq!(view(&snap("Button 4", "x")).lines(30).len(), 3);
    }

    #[test]
    fn test_counts_scalar_values() {
        assert_eq!(view(&snap("", "naïve")).char_count, 5);
    }
}
