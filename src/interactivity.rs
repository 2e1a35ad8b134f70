use std::fmt;
use std::ops::{BitAnd, BitOr};

/// Extended window style bits as reported by the OS.
///
/// The two managed bits mirror the Win32 `WS_EX_NOACTIVATE` and
/// `WS_EX_TRANSPARENT` values so the production backend can apply a
/// [`StyleFlags`] value verbatim. Everything outside these two bits belongs to
/// the window's base style and is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleFlags(pub isize);

/// The window never steals focus when clicked.
pub const NO_ACTIVATE: StyleFlags = StyleFlags(0x0800_0000);
/// Pointer input falls through to whatever is beneath the window.
pub const TRANSPARENT: StyleFlags = StyleFlags(0x0000_0020);

impl StyleFlags {
    pub fn contains(self, bits: StyleFlags) -> bool {
        (self & bits) == bits
    }
}

impl BitOr for StyleFlags {
    type Output = StyleFlags;
    fn bitor(self, rhs: StyleFlags) -> StyleFlags {
        StyleFlags(self.0 | rhs.0)
    }
}

impl BitAnd for StyleFlags {
    type Output = StyleFlags;
    fn bitand(self, rhs: StyleFlags) -> StyleFlags {
        StyleFlags(self.0 & rhs.0)
    }
}

impl fmt::Display for StyleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Whether the overlay currently lets pointer input through or accepts it.
/// Recomputed from live modifier-key state on every tick, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    PassThrough,
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleError {
    /// The window handle is invalid (destroyed, or never created).
    InvalidHandle,
    /// The OS refused to report the current extended style.
    StyleQueryFailed,
    /// The OS refused to apply the new extended style.
    StyleSetFailed,
    /// The controller was used before `initialize` succeeded.
    NotInitialized,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::InvalidHandle => write!(f, "window handle is invalid"),
            StyleError::StyleQueryFailed => write!(f, "querying window style failed"),
            StyleError::StyleSetFailed => write!(f, "setting window style failed"),
            StyleError::NotInitialized => write!(f, "controller not initialized"),
        }
    }
}

impl std::error::Error for StyleError {}

/// The slice of OS windowing capability the controller needs. All platform
/// bit-flag knowledge lives behind this trait so the controller's state
/// machine can be exercised without a real window.
pub trait WindowStyleOps {
    fn ex_style(&self) -> Result<StyleFlags, StyleError>;
    fn set_ex_style(&self, style: StyleFlags) -> Result<(), StyleError>;
    /// Start the OS-modal interactive move loop for the window.
    fn begin_move(&self) -> Result<(), StyleError>;
}

/// Keeps the overlay's click-through state in sync with live modifier-key
/// input.
///
/// Driven by a high-frequency tick (once per rendered frame). Each tick
/// re-queries the style actually applied to the window and issues a mutation
/// only when it differs from the desired one, so repeated ticks in the same
/// state cost no style syscalls and cause no flicker.
pub struct InteractivityController<O: WindowStyleOps> {
    ops: O,
    base_style: Option<StyleFlags>,
    state: InteractionState,
}

impl<O: WindowStyleOps> InteractivityController<O> {
    pub fn new(ops: O) -> Self {
        Self {
            ops,
            base_style: None,
            state: InteractionState::PassThrough,
        }
    }

    /// Capture the window's pristine extended style as the restoration
    /// baseline, then immediately drop into pass-through so the overlay is
    /// never interactive during startup. Call once, after the window has a
    /// valid handle and before ticking starts.
    pub fn initialize(&mut self) -> Result<(), StyleError> {
        let base = self.ops.ex_style()?;
        self.base_style = Some(base);
        if let Err(err) = self.apply_state(InteractionState::PassThrough) {
            self.base_style = None;
            return Err(err);
        }
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.base_style.is_some()
    }

    /// Last state the controller successfully applied.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn base_style(&self) -> Option<StyleFlags> {
        self.base_style
    }

    /// Per-frame entry point. `modifier_down` is the live state of the
    /// designated modifier key. Failures are logged and skipped; the next
    /// tick retries against whatever the OS reports then.
    pub fn on_tick(&mut self, modifier_down: bool) {
        if self.base_style.is_none() {
            debug_assert!(false, "on_tick called before initialize");
            return;
        }
        let desired = if modifier_down {
            InteractionState::Interactive
        } else {
            InteractionState::PassThrough
        };
        if let Err(err) = self.apply_state(desired) {
            tracing::debug!(%err, "style update skipped this tick");
        }
    }

    /// Apply `desired` to the window. The current style is re-queried rather
    /// than cached so externally clobbered bits are repaired on the next tick.
    pub fn apply_state(&mut self, desired: InteractionState) -> Result<(), StyleError> {
        let base = self.base_style.ok_or(StyleError::NotInitialized)?;
        let target = target_style(base, desired);
        let current = self.ops.ex_style()?;
        if current != target {
            self.ops.set_ex_style(target)?;
        }
        self.state = desired;
        Ok(())
    }

    /// Begin an interactive move if the overlay is interactive. A pass-through
    /// window never receives the pointer-down that triggers this, so the state
    /// check is a defensive invariant rather than the primary gate.
    pub fn on_drag_requested(&self) {
        if self.state != InteractionState::Interactive {
            return;
        }
        if let Err(err) = self.ops.begin_move() {
            tracing::warn!(%err, "interactive move failed to start");
        }
    }
}

fn target_style(base: StyleFlags, state: InteractionState) -> StyleFlags {
    match state {
        InteractionState::PassThrough => base | NO_ACTIVATE | TRANSPARENT,
        InteractionState::Interactive => base | NO_ACTIVATE,
    }
}
