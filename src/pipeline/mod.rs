//! Reactive Pipeline
//!
//! Connects the shared state to the terminal.
//!
//! ```text
//! Store + UiState + terminal size → frame derived → render effect
//! ```
//!
//! 1. **frame derived** - pure: lays out and draws every panel, collects
//!    hit regions
//! 2. **render effect** - the only side effects: hit grid and terminal I/O
//!
//! Reads from signals inside the derived auto-track dependencies, so one
//! state write re-renders every panel that shows it, in the same update.

pub mod frame;
pub mod mount;
pub mod terminal;

pub use frame::{compose, create_frame_derived, FrameResult, HitRegion};
pub use mount::{mount, run, tick, unmount, MountHandle};
pub use terminal::{detect_terminal_size, set_terminal_size, terminal_height, terminal_width};
