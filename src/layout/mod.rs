//! Layout - panel placement and text measurement.
//!
//! - [`panels`] - Taffy flexbox placement of the dashboard panels
//! - [`text_measure`] - display width of strings in terminal cells

pub mod panels;
pub mod text_measure;

pub use panels::{layout_panels, stack_panels, Placement, MIN_TILE_WIDTH};
pub use text_measure::{char_width, string_width, truncate_to_width};
