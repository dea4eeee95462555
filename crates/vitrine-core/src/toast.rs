//! Toast notification core
//!
//! A single transient toast at a time. [`Notifier`] owns one nullable slot;
//! [`Notifier::show`] hard-replaces whatever occupies it, even a toast that
//! is mid-dismiss. The timed lifecycle
//! {inserted → visible → dismissing → removed} is advanced by the caller's
//! scheduler through guarded transition methods, so tests can drive it with
//! a paused clock instead of wall-clock sleeps.
//!
//! ## Schedule
//!
//! | Moment | Transition |
//! |--------|------------|
//! | show + [`REVEAL_DELAY`] | inserted → visible |
//! | dismiss click | visible → dismissing |
//! | show + [`AUTO_DISMISS_AFTER`] | visible → dismissing (if still attached) |
//! | dismiss + [`EXIT_DURATION`] | dismissing → removed |
//!
//! The auto-dismiss timer is never cancelled by a manual dismiss. The
//! attachment guard makes the late firing a harmless no-op.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Delay between insertion and the slide-in transition. Keeps the two on
/// separate render frames so the transition plays instead of snapping.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Length of the slide-out transition before removal.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Time a toast stays up before automatic dismissal begins.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Unique identifier for a toast instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Affirmative outcome (moss accent)
    Success,
    /// Something went wrong (danger accent)
    Error,
    /// Neutral announcement (cyan accent)
    #[default]
    Info,
}

impl ToastKind {
    /// CSS modifier class for this variant.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

/// Lifecycle phase of the toast occupying the slot.
///
/// There is no `Removed` variant: removal empties the slot, so "removed"
/// is represented by the toast no longer being attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// In the document but still translated off-screen.
    Inserted,
    /// Slid into view.
    Visible,
    /// Sliding back out; removal is scheduled.
    Dismissing,
}

/// The single currently-displayed toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: ToastKind,
    phase: ToastPhase,
}

impl Toast {
    /// Returns this toast's unique ID.
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the visual category.
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Whether the element should carry the show class (visible position).
    ///
    /// False while inserted (still off-screen) and again while dismissing
    /// (sliding back out).
    pub fn is_shown(&self) -> bool {
        self.phase == ToastPhase::Visible
    }
}

/// Owns the single toast slot and enforces its transitions.
///
/// All transition methods take the ID they expect to act on and return
/// whether anything changed. A stale ID (the toast was replaced or already
/// removed) is always a no-op, never an error. That guard is the only
/// "cancellation" in the design: timers are allowed to fire late and find
/// nothing to do.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Toast>,
}

impl Notifier {
    /// Creates a notifier with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a new toast in the slot, hard-replacing any prior instance.
    ///
    /// The old toast gets no exit animation: it vanishes the moment the
    /// replacement lands, even if it was mid-dismiss.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let toast = Toast {
            id: ToastId::next(),
            message: message.into(),
            kind,
            phase: ToastPhase::Inserted,
        };
        let id = toast.id;
        if let Some(old) = self.current.replace(toast) {
            tracing::debug!(old = old.id.0, new = id.0, "toast hard-replaced");
        } else {
            tracing::debug!(id = id.0, ?kind, "toast inserted");
        }
        id
    }

    /// Inserted → Visible. No-op unless `id` is still attached and waiting.
    pub fn reveal(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(t) if t.id == id && t.phase == ToastPhase::Inserted => {
                t.phase = ToastPhase::Visible;
                true
            }
            _ => false,
        }
    }

    /// {Inserted, Visible} → Dismissing.
    ///
    /// Idempotent: dismissing a toast already on its way out, or one long
    /// gone, changes nothing and does not panic.
    pub fn begin_dismiss(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(t) if t.id == id && t.phase != ToastPhase::Dismissing => {
                t.phase = ToastPhase::Dismissing;
                tracing::debug!(id = id.0, "toast dismissing");
                true
            }
            _ => false,
        }
    }

    /// Empties the slot once the exit transition has run.
    ///
    /// No-op if a newer toast took the slot in the meantime.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if self.is_attached(id) {
            self.current = None;
            tracing::debug!(id = id.0, "toast removed");
            true
        } else {
            false
        }
    }

    /// The toast currently occupying the slot, if any.
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Attachment guard: is `id` still the toast in the slot?
    pub fn is_attached(&self, id: ToastId) -> bool {
        self.current.as_ref().is_some_and(|t| t.id == id)
    }
}
