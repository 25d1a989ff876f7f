//! Mouse Module - Mouse events and click targets
//!
//! HitGrid maps screen cells to click [`Action`]s. The render effect rebuilds
//! the global grid from each frame's hit regions; a left-button press is then
//! resolved with [`hit_test`].
//!
//! # API
//!
//! - `install_hit_regions` - rebuild the global grid for the visible viewport
//! - `hit_test(x, y)` - the action under a cell

use std::cell::RefCell;

use crate::components::Action;
use crate::pipeline::frame::HitRegion;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub button: MouseButton,
    /// Column (0-indexed)
    pub x: u16,
    /// Row (0-indexed)
    pub y: u16,
    /// Wheel direction, for scroll events only
    pub scroll: Option<ScrollDirection>,
}

impl MouseEvent {
    pub fn new(action: MouseAction, button: MouseButton, x: u16, y: u16) -> Self {
        Self {
            action,
            button,
            x,
            y,
            scroll: None,
        }
    }

    pub fn scroll(x: u16, y: u16, direction: ScrollDirection) -> Self {
        Self {
            action: MouseAction::Scroll,
            button: MouseButton::None,
            x,
            y,
            scroll: Some(direction),
        }
    }

    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }

    /// A left-button press, the only event that activates click targets.
    pub fn is_left_click(&self) -> bool {
        self.action == MouseAction::Down && self.button == MouseButton::Left
    }
}

// =============================================================================
// HIT GRID - O(1) Coordinate to Target Lookup
// =============================================================================

const EMPTY: usize = usize::MAX;

/// Each cell holds an index into `targets`, or `EMPTY`.
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<usize>,
    targets: Vec<Action>,
}

impl HitGrid {
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![EMPTY; size],
            targets: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the grid, clearing all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.resize(width as usize * height as usize, EMPTY);
        self.clear();
    }

    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
        self.targets.clear();
    }

    /// Fill a rectangle with an action. Later fills win on overlap.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, action: Action) {
        let target = self.targets.len();
        self.targets.push(action);

        for cy in y..y.saturating_add(height).min(self.height) {
            for cx in x..x.saturating_add(width).min(self.width) {
                let idx = cy as usize * self.width as usize + cx as usize;
                self.cells[idx] = target;
            }
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Action> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        match self.cells.get(idx).copied() {
            Some(EMPTY) | None => None,
            Some(target) => self.targets.get(target).copied(),
        }
    }
}

// =============================================================================
// GLOBAL HIT GRID
// =============================================================================

thread_local! {
    static HIT_GRID: RefCell<HitGrid> = RefCell::new(HitGrid::new(80, 24));
}

/// The action under a screen cell, if any.
pub fn hit_test(x: u16, y: u16) -> Option<Action> {
    HIT_GRID.with(|g| g.borrow().get(x, y))
}

/// Rebuild the global grid from content-space regions.
///
/// The screen shows content rows `scroll..scroll + height`; regions outside
/// that window are dropped and partially visible ones are cut.
pub fn install_hit_regions(regions: &[HitRegion], scroll: u16, width: u16, height: u16) {
    HIT_GRID.with(|g| {
        let mut grid = g.borrow_mut();
        grid.resize(width, height);

        let bottom = scroll.saturating_add(height);
        for region in regions {
            let top = region.y.max(scroll);
            let end = region.y.saturating_add(region.height).min(bottom);
            if top >= end {
                continue;
            }
            grid.fill_rect(region.x, top - scroll, region.width, end - top, region.action);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_grid_fill_and_get() {
        let mut grid = HitGrid::new(10, 5);
        grid.fill_rect(2, 1, 3, 2, Action::Select(4));

        assert_eq!(grid.get(2, 1), Some(Action::Select(4)));
        assert_eq!(grid.get(4, 2), Some(Action::Select(4)));
        assert_eq!(grid.get(5, 2), None);
        assert_eq!(grid.get(100, 100), None);
    }

    #[test]
    fn test_later_fill_wins() {
        let mut grid = HitGrid::new(10, 1);
        grid.fill_rect(0, 0, 10, 1, Action::Clear);
        grid.fill_rect(3, 0, 2, 1, Action::QuickFill(1));

        assert_eq!(grid.get(2, 0), Some(Action::Clear));
        assert_eq!(grid.get(3, 0), Some(Action::QuickFill(1)));
    }

    #[test]
    fn test_fill_clamps_to_bounds() {
        let mut grid = HitGrid::new(4, 2);
        grid.fill_rect(2, 1, 10, 10, Action::Clear);
        assert_eq!(grid.get(3, 1), Some(Action::Clear));
    }

    #[test]
    fn test_install_applies_scroll() {
        let regions = [
            HitRegion {
                x: 0,
                y: 1,
                width: 5,
                height: 1,
                action: Action::Select(0),
            },
            HitRegion {
                x: 0,
                y: 12,
                width: 5,
                height: 1,
                action: Action::Select(1),
            },
        ];
        install_hit_regions(&regions, 10, 20, 5);

        // First region scrolled off the top, second now on row 2
        assert_eq!(hit_test(0, 2), Some(Action::Select(1)));
        assert!((0..5).all(|y| hit_test(0, y) != Some(Action::Select(0))));
    }

    #[test]
    fn test_left_click() {
        assert!(MouseEvent::down(MouseButton::Left, 1, 1).is_left_click());
        assert!(!MouseEvent::down(MouseButton::Right, 1, 1).is_left_click());
        assert!(!MouseEvent::scroll(1, 1, ScrollDirection::Up).is_left_click());
    }
}
