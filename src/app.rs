//! The application: shared store, UI state, and the two writers.
//!
//! [`App`] turns input into state writes. Keyboard events are routed through
//! the handler registry (see [`crate::state::global_keys`]); mouse clicks are
//! resolved against the hit grid into an [`Action`] and performed directly.

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::components::button_grid::ButtonSelector;
use crate::components::text_input::TextInputControl;
use crate::components::Action;
use crate::config::Config;
use crate::hook::{self, SelectHook};
use crate::pipeline::frame::compose;
use crate::pipeline::terminal::{set_terminal_size, terminal_height};
use crate::state::input::InputEvent;
use crate::state::keyboard::{self, KeyboardEvent};
use crate::state::mouse::{self, MouseEvent, ScrollDirection};
use crate::state::{Focus, Store, UiState};

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

pub struct App {
    store: Store,
    ui: UiState,
    config: Rc<Config>,
    selector: ButtonSelector,
    input: TextInputControl,
    running: Arc<AtomicBool>,
}

impl App {
    /// Build the app with the hook named in `config`.
    pub fn new(config: Config) -> Self {
        let hook = hook::from_config(config.hook.as_ref());
        Self::with_hook(config, hook)
    }

    pub fn with_hook(config: Config, hook: Box<dyn SelectHook>) -> Self {
        let store = Store::new();
        let selector = ButtonSelector::new(store.clone(), config.buttons.clone(), hook);
        let input = TextInputControl::new(store.clone(), config.quick_fills.clone());
        Self {
            store,
            ui: UiState::new(),
            config: Rc::new(config),
            selector,
            input,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn config(&self) -> &Rc<Config> {
        &self.config
    }

    pub fn selector(&self) -> &ButtonSelector {
        &self.selector
    }

    pub fn input(&self) -> &TextInputControl {
        &self.input
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    pub fn running_flag(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn quit(&self) {
        debug!("quit requested");
        self.running.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Run a click target's action.
    pub fn perform(&self, action: Action) {
        match action {
            Action::Select(index) => {
                if self.selector.select(index) {
                    self.ui.set_cursor(index);
                    self.ui.set_focus(Focus::Buttons);
                }
            }
            Action::QuickFill(index) => {
                self.input.quick_fill(index);
            }
            Action::Clear => self.input.clear(),
            Action::Focus(focus) => self.ui.set_focus(focus),
        }
    }

    /// Select the button under the cursor.
    pub fn select_cursor(&self) -> bool {
        self.selector.select(self.ui.cursor())
    }

    /// Scroll by one page, up for negative `pages`.
    pub fn scroll_pages(&self, pages: i32) {
        let page = i32::from(terminal_height().saturating_sub(1).max(1));
        self.ui.scroll_by(pages * page);
    }

    /// Compose the whole dashboard off-screen, `width` cells wide, as plain
    /// text. Needs no terminal.
    pub fn render_text(&self, width: u16) -> String {
        let frame = compose(&self.store.snapshot(), self.ui.snapshot(), &self.config, (width, 0));
        frame.plain_text()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Route a key through the handlers registered for the current focus.
    pub fn handle_key(&self, event: KeyboardEvent) -> bool {
        keyboard::route(self.ui.focus().index(), event)
    }

    /// Left clicks run the action under the cursor; the wheel scrolls.
    pub fn handle_mouse(&self, event: MouseEvent) -> bool {
        if let Some(direction) = event.scroll {
            match direction {
                ScrollDirection::Up => self.ui.scroll_by(-WHEEL_STEP),
                ScrollDirection::Down => self.ui.scroll_by(WHEEL_STEP),
                ScrollDirection::Left | ScrollDirection::Right => return false,
            }
            return true;
        }

        if !event.is_left_click() {
            return false;
        }
        match mouse::hit_test(event.x, event.y) {
            Some(action) => {
                debug!(?action, x = event.x, y = event.y, "click");
                self.perform(action);
                true
            }
            None => false,
        }
    }

    /// Returns true if the event was consumed.
    pub fn handle_event(&self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(width, height) => {
                debug!(width, height, "resize");
                set_terminal_size(width, height);
                false
            }
            InputEvent::None => false,
        }
    }
}
