//! Category panel: special > even > odd > idle.

use super::{Line, Panel, Span};
use crate::derive::Category;
use crate::state::Snapshot;
use crate::types::{palette, Rgba, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub category: Category,
    pub caption: String,
}

pub fn view(snapshot: &Snapshot) -> CategoryView {
    let class = snapshot.class();
    let category = class.category();
    let caption = match category {
        Category::Special => "Button 1000 triggers special styling!".to_string(),
        Category::Even => format!("Button {} is even", class.number),
        Category::Odd => format!("Button {} is odd", class.number),
        Category::Idle => "Click a button to see the update!".to_string(),
    };

    CategoryView { category, caption }
}

/// Color for a category, shared with the button faces.
pub fn category_color(category: Category) -> Rgba {
    match category {
        Category::Special => palette::SPECIAL,
        Category::Even => palette::EVEN,
        Category::Odd => palette::ODD,
        Category::Idle => palette::IDLE,
    }
}

impl Panel for CategoryView {
    fn title(&self) -> &str {
        "Category"
    }

    fn lines(&self, width: u16) -> Vec<Line> {
        // Badge spans the full inner width, centered
        let badge = self.category.badge();
        let pad = (width as usize).saturating_sub(badge.len());
        let left = pad / 2;
        let text = format!("{}{}{}", " ".repeat(left), badge, " ".repeat(pad - left));

        vec![
            vec![Span::styled(text, Style::filled(category_color(self.category)))],
            vec![Span::muted(self.caption.clone())],
        ]
    }
}
