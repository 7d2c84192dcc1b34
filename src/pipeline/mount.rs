//! Mount API - application lifecycle and the render effect.
//!
//! Sets up the one render effect that monitors the reactive pipeline
//! and outputs to the terminal, plus the event loop that feeds resize
//! events and correction commits back into it.
//!
//! # Example
//!
//! ```ignore
//! use cascade_tui::pipeline::{mount, run, set_cards};
//!
//! set_cards(my_cards);
//! let handle = mount()?;
//! run(&handle)?;   // blocks until q/Esc/Ctrl+C
//! handle.unmount();
//! ```

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use spark_signals::effect;

use crate::renderer::TermRenderer;

use super::correction;
use super::frame_derived::create_frame_derived;
use super::flow_derived::create_flow_derived;
use super::cards;
use super::viewport::{detect_container_width, set_container_width};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`] that allows unmounting.
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    renderer: Rc<RefCell<TermRenderer>>,
    running: Arc<AtomicBool>,
}

impl MountHandle {
    /// Stop the render effect and restore the terminal.
    pub fn unmount(mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        let _ = self.renderer.borrow_mut().leave_fullscreen();
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request a graceful stop.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        let _ = self.renderer.borrow_mut().leave_fullscreen();
    }
}

// =============================================================================
// Mount
// =============================================================================

/// Mount the card feed.
///
/// Detects the container width, builds the derived chain, enters the
/// alternate screen, and creates the render effect. The effect reads
/// the frame derived (its only reactive dependency), writes the frame
/// to the terminal, and stashes the realized heights; [`tick`] commits
/// the stash, which is what turns the estimated first pass into the
/// corrected second one.
pub fn mount() -> io::Result<MountHandle> {
    detect_container_width();

    let flow_derived = create_flow_derived();
    let frame_derived = create_frame_derived(flow_derived);

    let renderer = Rc::new(RefCell::new(TermRenderer::new()));
    renderer.borrow_mut().enter_fullscreen()?;

    let running = Arc::new(AtomicBool::new(true));
    let running_effect = running.clone();
    let renderer_effect = renderer.clone();

    let stop_fn = effect(move || {
        if !running_effect.load(Ordering::SeqCst) {
            return;
        }

        // Read from the derived (creates dependency).
        let result = frame_derived.get();

        // Stash realized heights for the next tick's commit.
        correction::stash(result.generation, result.realized.clone());

        // Render to terminal (side effect!).
        let _ = renderer_effect.borrow_mut().render(&result.buffer);
    });

    Ok(MountHandle {
        stop_effect: Some(Box::new(stop_fn)),
        renderer,
        running,
    })
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once.
///
/// Polls input with a short timeout, routes resize events into the
/// container-width signal, and commits any pending height correction.
/// Committing here, one loop turn behind the render, is the deliberate
/// delay that lets the frame reach the screen before the corrected
/// pass replaces it.
///
/// Returns `Ok(false)` once the application should stop (q, Esc, or
/// Ctrl+C).
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if event::poll(Duration::from_millis(16))? {
        match event::read()? {
            Event::Resize(width, _) => set_container_width(width),
            Event::Key(key) => {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                    handle.stop();
                }
            }
            _ => {}
        }
    }

    apply_pending_correction();

    Ok(handle.is_running())
}

/// Commit any stashed height correction.
///
/// [`tick`] calls this once per loop turn; a custom event loop that
/// bypasses `tick` should do the same after polling its own events.
/// Returns true if the commit changed the measured-height store.
pub fn apply_pending_correction() -> bool {
    match correction::take() {
        Some((generation, batch)) => cards::commit_measured(generation, &batch),
        None => false,
    }
}

/// Run the event loop until stopped.
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
