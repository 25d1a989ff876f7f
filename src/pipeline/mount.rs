//! Mount API - Application lifecycle and render effect.
//!
//! Mounting takes over the terminal and sets up the one render effect that
//! watches the frame derived and writes to the screen.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use syncboard::{mount, run, App, Config};
//!
//! let handle = mount(Rc::new(App::new(Config::default())))?;
//! run(&handle)?;  // Blocks until Ctrl+C or Escape
//! handle.unmount();
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use spark_signals::effect;
use tracing::{info, warn};

use super::frame::create_frame_derived;
use super::terminal::{detect_terminal_size, terminal_height, terminal_width};
use crate::app::App;
use crate::error::Result;
use crate::renderer::DiffRenderer;
use crate::state::global_keys::{self, GlobalKeysHandle};
use crate::state::{input, mouse};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`]. Unmounting (or dropping) restores the
/// terminal.
pub struct MountHandle {
    app: Rc<App>,
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    global_keys: Option<GlobalKeysHandle>,
    renderer: Rc<RefCell<DiffRenderer>>,
}

impl MountHandle {
    pub fn app(&self) -> &Rc<App> {
        &self.app
    }

    /// Stop the render effect and give the terminal back.
    pub fn unmount(mut self) {
        self.teardown();
        info!("unmounted");
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Ask the event loop to stop.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn teardown(&mut self) {
        self.running.store(false, Ordering::SeqCst);

        if let Some(handle) = self.global_keys.take() {
            handle.cleanup();
        }
        if let Some(stop) = self.stop_effect.take() {
            stop();
        } else {
            // Already torn down
            return;
        }

        if let Err(err) = input::disable_mouse() {
            warn!(%err, "could not disable mouse capture");
        }
        if let Err(err) = self.renderer.borrow_mut().exit_fullscreen() {
            warn!(%err, "could not restore terminal");
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the dashboard.
///
/// This sets up:
/// 1. Terminal size detection
/// 2. Fullscreen mode and mouse capture
/// 3. The render effect (frame derived -> hit grid + diff renderer)
/// 4. Key bindings
pub fn mount(app: Rc<App>) -> Result<MountHandle> {
    detect_terminal_size();

    let renderer = Rc::new(RefCell::new(DiffRenderer::new()));
    renderer.borrow_mut().enter_fullscreen()?;
    if let Err(err) = input::enable_mouse() {
        let _ = renderer.borrow_mut().exit_fullscreen();
        return Err(err.into());
    }

    let running = app.running_flag();
    let frame_derived = create_frame_derived(app.store().clone(), app.ui().clone(), app.config().clone());

    let ui = app.ui().clone();
    let effect_renderer = renderer.clone();
    let effect_running = running.clone();
    let mut last_size: Option<(u16, u16)> = None;

    // The ONE render effect
    let stop = effect(move || {
        if !effect_running.load(Ordering::SeqCst) {
            return;
        }

        let frame = frame_derived.get();
        ui.set_max_scroll(frame.max_scroll());
        let scroll = ui.scroll();
        let (width, height) = frame.terminal_size;

        mouse::install_hit_regions(&frame.hit_regions, scroll, width, height);

        let screen = frame.viewport(scroll);
        let mut renderer = effect_renderer.borrow_mut();
        let result = if last_size == Some(frame.terminal_size) {
            renderer.render(&screen).map(|_| ())
        } else {
            last_size = Some(frame.terminal_size);
            renderer.render_full(&screen)
        };
        if let Err(err) = result {
            warn!(%err, revision = frame.revision, "render failed");
        }
    });

    let global_keys = global_keys::setup_global_keys(&app);

    info!(
        width = terminal_width(),
        height = terminal_height(),
        buttons = app.config().buttons.len(),
        "mounted"
    );

    Ok(MountHandle {
        app,
        stop_effect: Some(Box::new(stop)),
        running,
        global_keys: Some(global_keys),
        renderer,
    })
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Event Loop
// =============================================================================

/// Process at most one input event.
///
/// Returns `Ok(false)` once a quit key was pressed or `handle.stop()` called.
pub fn tick(handle: &MountHandle) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    // Poll with short timeout (~60fps)
    if let Some(event) = input::poll_event(Duration::from_millis(16))? {
        handle.app.handle_event(event);
    }

    Ok(handle.is_running())
}

/// Run the event loop until stopped.
pub fn run(handle: &MountHandle) -> Result<()> {
    while tick(handle)? {}
    Ok(())
}
