//! Core types for syncboard.
//!
//! These are the values that flow through the reactive pipeline: the
//! configured button descriptors on the input side, and terminal cells,
//! colors and rectangles on the output side.

use serde::Deserialize;

// =============================================================================
// Button descriptor
// =============================================================================

/// Label shown as the current value before any button has been selected.
pub const NO_SELECTION_LABEL: &str = "<no selection>";

/// An immutable button record supplied by configuration at startup.
///
/// `display_text` is what the button face shows and what gets scanned for an
/// embedded number. `label_text` is what the dashboard reports as the
/// "current value" once the button is selected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonDescriptor {
    pub display_text: String,
    pub label_text: String,
}

impl ButtonDescriptor {
    pub fn new(display_text: impl Into<String>, label_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            label_text: label_text.into(),
        }
    }

    /// The sentinel selection held before the first click.
    pub fn placeholder() -> Self {
        Self::new("", NO_SELECTION_LABEL)
    }

    /// True for the sentinel selection.
    pub fn is_placeholder(&self) -> bool {
        self.display_text.is_empty() && self.label_text == NO_SELECTION_LABEL
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels.
///
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: 255,
        }
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }
}

// =============================================================================
// Palette
// =============================================================================

/// The fixed palette every panel draws with.
pub mod palette {
    use super::Rgba;

    pub const SPECIAL: Rgba = Rgba::rgb(168, 85, 247);
    pub const EVEN: Rgba = Rgba::rgb(59, 130, 246);
    pub const ODD: Rgba = Rgba::rgb(249, 115, 22);
    pub const IDLE: Rgba = Rgba::rgb(156, 163, 175);
    pub const ACTIVE: Rgba = Rgba::rgb(34, 197, 94);
    pub const HIGHLIGHT: Rgba = Rgba::rgb(139, 92, 246);
    pub const MUTED: Rgba = Rgba::rgb(107, 114, 128);
    pub const BORDER: Rgba = Rgba::rgb(75, 85, 99);
    pub const FOCUS: Rgba = Rgba::rgb(250, 204, 21);
    pub const INSPECTOR: Rgba = Rgba::rgb(74, 222, 128);
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Style
// =============================================================================

/// Foreground, background and attributes applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

impl Style {
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: color,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }

    /// Filled "pill" style: dark text on a colored background.
    pub const fn filled(color: Rgba) -> Self {
        Self {
            fg: Rgba::BLACK,
            bg: color,
            attrs: Attr::BOLD,
        }
    }

    pub const fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn bold(self) -> Self {
        let attrs = self.attrs | Attr::BOLD;
        self.with_attrs(attrs)
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space, 0 for the tail of a wide glyph).
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

impl Cell {
    /// Continuation marker written after a double-width glyph.
    pub const CONTINUATION: u32 = 0;

    pub fn styled(c: char, style: Style) -> Self {
        Self {
            char: c as u32,
            fg: style.fg,
            bg: style.bg,
            attrs: style.attrs,
        }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by one cell on every side (the area inside a border).
    pub const fn inner(&self) -> Self {
        Self {
            x: self.x.saturating_add(1),
            y: self.y.saturating_add(1),
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }
}
