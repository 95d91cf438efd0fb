// crates/edtheme-core/src/editor.rs
//
// Editing session with a debounced patch rebuild. Every edit restarts
// a single pending deadline, so a burst of keystrokes collapses into
// one encode once the caller's event loop polls past it.

use std::time::{Duration, Instant};

use crate::patch::encode::build_patch;
use crate::theme::state::ThemeState;

/// Delay between the last edit and the rebuild it triggers.
pub const DEBOUNCE: Duration = Duration::from_millis(100);

pub struct Editor {
    state: ThemeState,
    patch: Vec<u8>,
    pending: Option<Instant>,
}

impl Editor {
    pub fn new() -> Self {
        let state = ThemeState::default();
        let patch = build_patch(&state);
        Editor {
            state,
            patch,
            pending: None,
        }
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// The patch as of the last rebuild; pending edits are not in it
    /// until `poll` fires or `flush` forces them.
    pub fn patch(&self) -> &[u8] {
        &self.patch
    }

    /// Apply one edit and restart the debounce window. Replacing the
    /// deadline is the cancellation: only the newest schedule can fire.
    pub fn edit(&mut self, f: impl FnOnce(&mut ThemeState)) {
        f(&mut self.state);
        self.pending = Some(Instant::now() + DEBOUNCE);
    }

    /// Replace the whole state (patch upload, share token, storage
    /// load) and rebuild immediately.
    pub fn replace(&mut self, state: ThemeState) {
        self.state = state;
        self.flush();
    }

    /// Fire the pending rebuild once its deadline has passed. Returns
    /// true when a rebuild ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                self.patch = build_patch(&self.state);
                true
            }
            _ => false,
        }
    }

    /// Rebuild now, superseding any pending deadline.
    pub fn flush(&mut self) {
        self.pending = None;
        self.patch = build_patch(&self.state);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
