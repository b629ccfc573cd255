use std::collections::HashMap;

use crate::interpreter::options::FrameMode;

/// Parameter bindings of one call.
///
/// A parameter whose argument was not supplied is present with `None`: it
/// still shadows a variable of the same name, but reading it fails.
pub type Frame = HashMap<String, Option<f64>>;

/// The parameter frames of the user-defined function calls in progress.
///
/// In [`FrameMode::Shared`] the stack never holds more than one frame, and
/// every call replaces it wholesale. In [`FrameMode::Nested`] each call pushes
/// its own frame and pops it on return. Name lookup only ever consults the
/// innermost frame; function bodies do not see their callers' parameters.
#[derive(Debug, Clone)]
pub struct CallStack {
    mode:   FrameMode,
    frames: Vec<Frame>,
    depth:  usize,
}

impl CallStack {
    /// Creates an empty call stack using the given scoping mode.
    #[must_use]
    pub const fn new(mode: FrameMode) -> Self {
        Self { mode,
               frames: Vec::new(),
               depth: 0 }
    }

    /// Looks `name` up in the innermost frame.
    ///
    /// Returns `None` if `name` is not a parameter of the active call, and
    /// `Some(None)` if it is a parameter without an argument.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Option<f64>> {
        self.frames.last().and_then(|frame| frame.get(name).copied())
    }

    /// Makes `frame` the active frame for the duration of a call.
    pub fn enter(&mut self, frame: Frame) {
        self.depth += 1;
        match self.mode {
            FrameMode::Shared => {
                self.frames.clear();
                self.frames.push(frame);
            },
            FrameMode::Nested => self.frames.push(frame),
        }
    }

    /// Ends the innermost call.
    ///
    /// In shared mode the single frame is discarded entirely, even if an
    /// outer call is still running.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        match self.mode {
            FrameMode::Shared => self.frames.clear(),
            FrameMode::Nested => {
                self.frames.pop();
            },
        }
    }

    /// Number of user-defined function calls currently in progress.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}
