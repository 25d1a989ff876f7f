//! Renderer - frame buffers and terminal output.
//!
//! - [`buffer`] - the cell grid panels draw into
//! - [`output`] - batched, state-tracking escape output
//! - [`diff`] - fullscreen renderer that only rewrites changed cells

pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
