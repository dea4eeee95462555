//! Vitrine Core Library
//!
//! Headless interaction logic for the Vitrine studio site.
//!
//! ## Overview
//!
//! Vitrine renders a single-page portfolio site in a desktop webview. Every
//! decision its interactive layer makes lives in this crate (the toast
//! notification lifecycle, the scroll-driven presentation math, the mobile
//! menu state machine, and contact form validation), so the whole behaviour
//! surface is testable without spinning up a window.
//!
//! ## Core Principles
//!
//! - **One toast at a time**: the [`toast::Notifier`] owns a single nullable
//!   slot; showing a new toast hard-replaces whatever occupies it.
//! - **Derived, not stored**: scroll presentation state (header flag,
//!   parallax shift, active section) is recomputed from each scroll frame,
//!   never incrementally toggled.
//! - **Latch, don't track**: reveal animations fire once per element and
//!   stay fired.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vitrine_core::{ContactDraft, Notifier, ToastKind};
//!
//! let mut notifier = Notifier::new();
//! let draft = ContactDraft::new("Ada", "ada@studio.co", "Hello!");
//!
//! match draft.validate() {
//!     Ok(()) => { notifier.show("Message sent", ToastKind::Success); }
//!     Err(e) => { notifier.show(e.to_string(), ToastKind::Error); }
//! }
//! ```

pub mod error;
pub mod menu;
pub mod scroll;
pub mod toast;
pub mod validate;

// Re-exports
pub use error::FormError;
pub use menu::{crossed_to_desktop, MenuState, MOBILE_BREAKPOINT};
pub use scroll::{
    active_section, header_scrolled, parallax_shift, scroll_target, visible_fraction,
    RevealLatch, ScrollFrame, HEADER_SCROLL_THRESHOLD, PARALLAX_RATE, REVEAL_BOTTOM_INSET,
    REVEAL_FRACTION,
};
pub use toast::{
    Notifier, Toast, ToastId, ToastKind, ToastPhase, AUTO_DISMISS_AFTER, EXIT_DURATION,
    REVEAL_DELAY,
};
pub use validate::{has_required_fields, is_valid_email, ContactDraft};
