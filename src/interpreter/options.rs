/// Default limit on nested user-defined function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// How parameter bindings of user-defined functions are scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameMode {
    /// A single parameter frame is shared by every call.
    ///
    /// Each call replaces the frame with its own bindings and clears it on
    /// return. A user function called from inside another one therefore
    /// overwrites the caller's parameters, and once it returns the caller can
    /// no longer see them: with `g(y) = y` and `f(x) = g(x) + x`, the `x`
    /// after the call to `g` is looked up among the variables.
    #[default]
    Shared,
    /// Every call gets its own frame, popped when the call returns.
    Nested,
}

/// Per-run configuration.
///
/// The defaults reproduce the classic behavior of the language; each switch
/// opts into a stricter or more compatible variant.
///
/// # Example
/// ```
/// use tdcalc::{Options, interpreter::options::FrameMode, run_with};
///
/// let options = Options::default().with_frame_mode(FrameMode::Nested);
/// assert_eq!(run_with("g(y) = y\nf(x) = g(x) + x\nf(2)", &options), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Scoping of function parameters.
    pub frame_mode:     FrameMode,
    /// Reject calls whose argument count differs from the callee's arity
    /// instead of padding with undefined values.
    pub strict_arity:   bool,
    /// Make `tan` an alias of `cos`, as older releases did.
    pub legacy_tan:     bool,
    /// Maximum depth of nested user-defined function calls.
    pub max_call_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { frame_mode:     FrameMode::Shared,
               strict_arity:   false,
               legacy_tan:     false,
               max_call_depth: DEFAULT_MAX_CALL_DEPTH, }
    }
}

impl Options {
    /// Sets how function parameters are scoped.
    #[must_use]
    pub const fn with_frame_mode(mut self, frame_mode: FrameMode) -> Self {
        self.frame_mode = frame_mode;
        self
    }

    /// Enables or disables argument count checking.
    #[must_use]
    pub const fn with_strict_arity(mut self, strict_arity: bool) -> Self {
        self.strict_arity = strict_arity;
        self
    }

    /// Enables or disables the `tan` = `cos` compatibility alias.
    #[must_use]
    pub const fn with_legacy_tan(mut self, legacy_tan: bool) -> Self {
        self.legacy_tan = legacy_tan;
        self
    }

    /// Sets the maximum depth of nested user-defined function calls.
    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}
