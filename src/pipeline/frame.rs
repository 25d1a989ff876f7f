//! Frame composition - every panel drawn into one buffer.
//!
//! [`compose`] is a pure function of the shared snapshot, the UI snapshot,
//! the configuration and the terminal size. [`create_frame_derived`] wraps it
//! in a Derived that re-composes whenever any of those signals change.
//!
//! The composed buffer covers the whole dashboard, which may be taller than
//! the terminal. [`FrameResult::viewport`] cuts out the visible rows.

use std::rc::Rc;

use spark_signals::{derived, Derived};
use tracing::warn;

use super::terminal::{terminal_height, terminal_width};
use crate::components::{
    analysis, button_grid, category, current, inspector, menu, status, text_input, transforms,
    Action, Panel,
};
use crate::config::Config;
use crate::layout::{layout_panels, stack_panels, Placement};
use crate::renderer::FrameBuffer;
use crate::state::{Snapshot, Store, UiSnapshot, UiState};
use crate::types::Rect;

// =============================================================================
// Types
// =============================================================================

/// A clickable area, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub action: Action,
}

/// Result of frame composition.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    /// The whole dashboard, `terminal_size.0` wide.
    pub buffer: FrameBuffer,
    /// Click targets, collected as data rather than applied as side effects.
    pub hit_regions: Vec<HitRegion>,
    /// Terminal size at time of composition.
    pub terminal_size: (u16, u16),
    /// Store revision the frame was composed from.
    pub revision: u64,
}

impl FrameResult {
    pub fn content_height(&self) -> u16 {
        self.buffer.height()
    }

    /// Largest scroll offset that still fills the terminal.
    pub fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.terminal_size.1)
    }

    /// The terminal-sized window starting at content row `scroll`.
    pub fn viewport(&self, scroll: u16) -> FrameBuffer {
        self.buffer
            .crop_rows(scroll.min(self.max_scroll()), self.terminal_size.1)
    }

    /// The whole dashboard as plain text, one line per row.
    pub fn plain_text(&self) -> String {
        self.buffer.to_plain_lines().join("\n")
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Build every panel's view, in dashboard order.
fn panels(snapshot: &Snapshot, ui: UiSnapshot, config: &Config) -> Vec<(Placement, Box<dyn Panel>)> {
    let mut panels: Vec<(Placement, Box<dyn Panel>)> = Vec::with_capacity(9);
    panels.push((
        Placement::FullWidth,
        Box::new(button_grid::view(snapshot, &config.buttons, ui)),
    ));
    panels.push((
        Placement::FullWidth,
        Box::new(text_input::view(snapshot, &config.quick_fills, ui)),
    ));
    panels.push((Placement::Tile, Box::new(status::view(snapshot))));
    panels.push((Placement::Tile, Box::new(category::view(snapshot))));
    panels.push((Placement::Tile, Box::new(menu::view(snapshot))));
    panels.push((Placement::Tile, Box::new(transforms::view(snapshot))));
    panels.push((Placement::Tile, Box::new(analysis::view(snapshot))));
    panels.push((Placement::FullWidth, Box::new(inspector::view(snapshot))));
    panels.push((Placement::FullWidth, Box::new(current::view(snapshot))));
    panels
}

/// Draw one bordered panel and record its click targets.
fn draw_panel(buffer: &mut FrameBuffer, rect: Rect, panel: &dyn Panel, hits: &mut Vec<HitRegion>) {
    buffer.draw_border(rect, panel.border_style(), panel.title());

    let inner = rect.inner();
    for (row, line) in panel.lines(inner.width).iter().enumerate() {
        let y = inner.y.saturating_add(row as u16);
        if y >= inner.bottom() {
            break;
        }

        let mut x = inner.x;
        for span in line {
            if x >= inner.right() {
                break;
            }
            let advanced = buffer.draw_text(x, y, &span.text, span.style, Some(&inner));
            let visible = advanced.min(inner.right() - x);
            if let Some(action) = span.action {
                if visible > 0 {
                    hits.push(HitRegion {
                        x,
                        y,
                        width: visible,
                        height: 1,
                        action,
                    });
                }
            }
            x = x.saturating_add(advanced);
        }
    }
}

/// Compose the dashboard for a terminal of `terminal_size` (width, height).
pub fn compose(snapshot: &Snapshot, ui: UiSnapshot, config: &Config, terminal_size: (u16, u16)) -> FrameResult {
    let width = terminal_size.0;
    let panels = panels(snapshot, ui, config);
    let placements: Vec<Placement> = panels.iter().map(|(placement, _)| *placement).collect();
    let measure = |index: usize, w: u16| panels[index].1.height(w);

    let rects = layout_panels(&placements, width, measure).unwrap_or_else(|err| {
        warn!(%err, "flex layout failed, stacking panels");
        stack_panels(panels.len(), width, measure)
    });

    let content_height = rects.iter().map(Rect::bottom).max().unwrap_or(0);
    let mut buffer = FrameBuffer::new(width, content_height);
    let mut hit_regions = Vec::new();

    for ((_, panel), rect) in panels.iter().zip(rects) {
        draw_panel(&mut buffer, rect, panel.as_ref(), &mut hit_regions);
    }

    FrameResult {
        buffer,
        hit_regions,
        terminal_size,
        revision: snapshot.revision,
    }
}

// =============================================================================
// Frame Derived Factory
// =============================================================================

/// Create the frame derived.
///
/// Depends on both store values, the revision, the UI state and the terminal
/// size signals.
pub fn create_frame_derived(
    store: Store,
    ui: UiState,
    config: Rc<Config>,
) -> Derived<FrameResult> {
    derived(move || {
        let size = (terminal_width(), terminal_height());
        let snapshot = store.snapshot();
        compose(&snapshot, ui.snapshot(), &config, size)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::terminal::set_terminal_size;
    use crate::types::ButtonDescriptor;

    fn frame_for(button: ButtonDescriptor, text: &str, width: u16) -> FrameResult {
        let snapshot = Snapshot::new(button, text);
        compose(&snapshot, UiSnapshot::default(), &Config::default(), (width, 20))
    }

    #[test]
    fn test_every_panel_is_drawn() {
        let frame = frame_for(ButtonDescriptor::placeholder(), "", 100);
        let text = frame.plain_text();
        for title in [
            "Buttons",
            "Text Input",
            "Status",
            "Category",
            "Menu",
            "Text Transforms",
            "Text Analysis",
            "State Inspector",
            "Current Values",
        ] {
            assert!(text.contains(title), "missing panel {title}");
        }
    }

    #[test]
    fn test_frame_reflects_state() {
        let frame = frame_for(ButtonDescriptor::new("Button 7", "seven"), "abc", 100);
        let text = frame.plain_text();

        assert!(text.contains("Button 7 is active"));
        assert!(text.contains("ODD"));
        assert!(text.contains("cba"));
        assert!(text.contains("seven"));
    }

    #[test]
    fn test_hit_regions_cover_buttons() {
        let frame = frame_for(ButtonDescriptor::placeholder(), "", 100);
        let selects = frame
            .hit_regions
            .iter()
            .filter(|r| matches!(r.action, Action::Select(_)))
            .count();
        assert_eq!(selects, Config::default().buttons.len());

        let first = frame
            .hit_regions
            .iter()
            .find(|r| r.action == Action::Select(0))
            .unwrap();
        let lines = frame.buffer.to_plain_lines();
        let row: String = lines[first.y as usize].chars().skip(first.x as usize).collect();
        assert!(row.contains("Button 1"));
    }

    #[test]
    fn test_narrow_terminal_stacks_tiles() {
        let wide = frame_for(ButtonDescriptor::placeholder(), "", 120);
        let narrow = frame_for(ButtonDescriptor::placeholder(), "", 40);
        assert!(narrow.content_height() > wide.content_height());
    }

    #[test]
    fn test_viewport_crops_to_terminal() {
        let frame = frame_for(ButtonDescriptor::placeholder(), "", 40);
        assert!(frame.max_scroll() > 0);

        let top = frame.viewport(0);
        assert_eq!(top.height(), 20);
        let bottom = frame.viewport(u16::MAX);
        let last = frame.buffer.to_plain_lines().pop().unwrap();
        assert_eq!(bottom.to_plain_lines().pop().unwrap(), last);
    }

    #[test]
    fn test_derived_recomputes_on_write() {
        set_terminal_size(100, 30);
        let store = Store::new();
        let frame = create_frame_derived(store.clone(), UiState::new(), Rc::new(Config::default()));
        assert_eq!(frame.get().revision, 0);

        store.set_input_text("hello world".to_string());
        let result = frame.get();
        assert_eq!(result.revision, 1);
        assert!(result.plain_text().contains("hello world"));
        assert_eq!(result.terminal_size, (100, 30));
    }
}
