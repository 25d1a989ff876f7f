//! Text analysis panel: word, vowel, consonant and character counts.

use super::{flow, Line, Panel, Span};
use crate::derive::TextStats;
use crate::state::Snapshot;
use crate::types::{palette, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView {
    pub stats: TextStats,
}

pub fn view(snapshot: &Snapshot) -> AnalysisView {
    AnalysisView {
        stats: snapshot.stats(),
    }
}

impl Panel for AnalysisView {
    fn title(&self) -> &str {
        "Text Analysis"
    }

    fn lines(&self, width: u16) -> Vec<Line> {
        let stat = |value: usize, name: &str| {
            vec![
                Span::styled(value.to_string(), Style::fg(palette::HIGHLIGHT).bold()),
                Span::muted(format!(" {name}")),
            ]
        };

        let mut counts: Line = Vec::new();
        for (i, part) in [
            stat(self.stats.word_count(), "words"),
            stat(self.stats.vowels, "vowels"),
            stat(self.stats.consonants, "consonants"),
            stat(self.stats.chars, "chars"),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                counts.push(Span::raw("  "));
            }
            counts.extend(part);
        }

        let mut lines = vec![counts];
        if !self.stats.words.is_empty() {
            lines.push(vec![Span::muted("Words found:")]);
            let chips = self
                .stats
                .words
                .iter()
                .map(|w| Span::styled(format!("[{w}]"), Style::fg(palette::IDLE)))
                .collect();
            lines.extend(flow(chips, width, 1));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::line_text;
    use crate::types::ButtonDescriptor;

    fn snap(text: &str) -> Snapshot {
        Snapshot::new(ButtonDescriptor::placeholder(), text)
    }

    #[test]
    fn test_counts_line() {
        let lines = view(&snap("Hello FileMaker")).lines(60);
        assert_eq!(
            line_text(&lines[0]),
            "2 words  6 vowels  8 consonants  15 chars"
        );
        assert_eq!(line_text(&lines[2]), "[Hello] [FileMaker]");
    }

    #[test]
    fn test_empty_has_no_word_list() {
        let view = view(&snap(""));
        assert_eq!(view.stats.word_count(), 0);
        assert_eq!(view.lines(60).len(), 1);
    }

    #[test]
    fn test_huge_word_wraps_alone() {
        let text = format!("{} b", "a".repeat(70_000));
        let lines = view(&snap(&text)).lines(40);
        assert_eq!(lines.len(), 4);
        assert_eq!(line_text(&lines[3]), "[b]");
    }
}
