//! Menu panel: highlights item k when the selected number is k, for 1..=5.

use super::{Line, Panel, Span};
use crate::state::Snapshot;
use crate::types::{palette, Style};

pub const MENU_ITEMS: [&str; 5] = ["Home", "Profile", "Settings", "Messages", "Help"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    /// 1-based index of the highlighted item.
    pub highlighted: Option<usize>,
    pub caption: String,
}

pub fn view(snapshot: &Snapshot) -> MenuView {
    let highlighted = snapshot.class().slot(MENU_ITEMS.len() as u64);
    let caption = match highlighted {
        Some(k) => format!("{} is highlighted", MENU_ITEMS[k - 1]),
        None => "Click buttons 1-5 to highlight menu items".to_string(),
    };

    MenuView { highlighted, caption }
}

impl Panel for MenuView {
    fn title(&self) -> &str {
        "Menu"
    }

    fn lines(&self, width: u16) -> Vec<Line> {
        let mut lines: Vec<Line> = MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if self.highlighted == Some(i + 1) {
                    let text = format!(" {name} <");
                    let fill = (width as usize).saturating_sub(text.len());
                    vec![Span::styled(
                        format!("{text}{}", " ".repeat(fill)),
                        Style::filled(palette::HIGHLIGHT),
                    )]
                } else {
                    vec![Span::raw(format!(" {name}"))]
                }
            })
            .collect();
        lines.push(vec![Span::muted(self.caption.clone())]);
        lines
    }
}
