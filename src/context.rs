//! Shared UI context for Vitrine.
//!
//! Provides the toast notifier to all components via use_context.

use dioxus::prelude::*;
use vitrine_core::Notifier;

/// Hook to access the shared toast notifier from context.
///
/// The notifier owns the single toast slot; components show toasts through
/// the helpers in `crate::components::toast` rather than mutating phases by
/// hand.
pub fn use_notifier() -> Signal<Notifier> {
    use_context::<Signal<Notifier>>()
}
