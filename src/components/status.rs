//! Status panel: five numbered slots, one lit per selected number.

use super::{Line, Panel, Span};
use crate::state::Snapshot;
use crate::types::{palette, Style};

pub const SLOTS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Active flag for slots 1..=5.
    pub slots: [bool; SLOTS as usize],
    pub caption: String,
}

impl StatusView {
    pub fn active_slot(&self) -> Option<usize> {
        self.slots.iter().position(|&on| on).map(|i| i + 1)
    }
}

pub fn view(snapshot: &Snapshot) -> StatusView {
    let class = snapshot.class();
    let mut slots = [false; SLOTS as usize];
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = class.number == i as u64 + 1;
    }

    let caption = if class.has_number() {
        format!("Button {} is active", class.number)
    } else {
        "No button selected".to_string()
    };

    StatusView { slots, caption }
}

impl Panel for StatusView {
    fn title(&self) -> &str {
        "Status"
    }

    fn lines(&self, _width: u16) -> Vec<Line> {
        let mut slots = Vec::new();
        for (i, &on) in self.slots.iter().enumerate() {
            if i > 0 {
                slots.push(Span::raw(" "));
            }
            let style = if on {
                Style::filled(palette::ACTIVE)
            } else {
                Style::fg(palette::MUTED)
            };
            slots.push(Span::styled(format!("({})", i + 1), style));
        }

        vec![slots, vec![Span::muted(self.caption.clone())]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonDescriptor;

    fn with_button(display: &str) -> Snapshot {
        Snapshot::new(ButtonDescriptor::new(display, "label"), "")
    }

    #[test]
    fn test_slot_lit_for_number() {
        let view = view(&with_button("Button 3"));
        assert_eq!(view.slots, [false, false, true, false, false]);
        assert_eq!(view.active_slot(), Some(3));
        assert_eq!(view.caption, "Button 3 is active");
    }

    #[test]
    fn test_out_of_range_lights_nothing() {
        let view = view(&with_button("Button 7"));
        assert_eq!(view.active_slot(), None);
        assert_eq!(view.caption, "Button 7 is active");
    }

    #[test]
    fn test_no_selection() {
        let view = view(&Snapshot::default());
        assert_eq!(view.active_slot(), None);
        assert_eq!(view.caption, "No button selected");
        assert_eq!(view.height(40), 4);
    }
}
