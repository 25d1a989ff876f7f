//! # syncboard
//!
//! A terminal dashboard where every panel reads from one shared state.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity. The shared state is two signals: the selected
//! button and the input text. Two writers replace them (the button grid and
//! the text input); every other panel is a pure view of a [`Snapshot`].
//!
//! ```text
//! Store signals → frame derived (taffy layout + panel views) → render effect
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Button descriptors, colors, cells, rects
//! - [`derive`] - Number/parity classification and text statistics
//! - [`state`] - Store, focus, keyboard and mouse state
//! - [`components`] - The dashboard panels
//! - [`layout`] - Taffy panel layout and text measurement
//! - [`renderer`] - Frame buffer and diff rendering
//! - [`pipeline`] - Frame derived, render effect, mount lifecycle
//! - [`config`] - TOML configuration
//! - [`hook`] - Optional action fired after a selection

pub mod app;
pub mod components;
pub mod config;
pub mod derive;
pub mod error;
pub mod hook;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;

pub use app::App;
pub use config::{Config, HookConfig, QuickFill};
pub use derive::{classify, ButtonClass, Category, TextStats};
pub use error::{Error, Result};
pub use hook::{CommandHook, NoopHook, SelectHook};
pub use pipeline::{compose, mount, run, tick, unmount, FrameResult, HitRegion, MountHandle};
pub use renderer::{DiffRenderer, FrameBuffer};
pub use state::{Focus, Snapshot, Store, UiState};
pub use types::{ButtonDescriptor, NO_SELECTION_LABEL};
