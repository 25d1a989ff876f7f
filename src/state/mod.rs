//! State Module - shared and UI-local state
//!
//! - **Store** - the two shared values every panel derives from
//! - **Focus** - keyboard focus, button cursor, scroll offset
//! - **Keyboard** - event types, dispatch, handler registry
//! - **Global keys** - the dashboard key map
//! - **Mouse** - HitGrid and click targets
//! - **Input** - crossterm event conversion and polling

pub mod focus;
pub mod global_keys;
pub mod input;
pub mod keyboard;
pub mod mouse;
pub mod store;

pub use focus::{Focus, UiSnapshot, UiState};
pub use input::InputEvent;
pub use store::{Snapshot, Store};
