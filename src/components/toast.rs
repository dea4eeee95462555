//! Toast Host Component
//!
//! Renders the single toast slot and drives its timed lifecycle. The state
//! machine itself lives in vitrine-core; this component only schedules the
//! transitions with spawned sleeps and applies the resulting classes.

use dioxus::prelude::*;
use vitrine_core::{Notifier, ToastId, ToastKind, AUTO_DISMISS_AFTER, EXIT_DURATION, REVEAL_DELAY};

use crate::context::use_notifier;

/// Shows a toast and spawns its two timers: the entrance reveal, and the
/// auto-dismiss that is deliberately never cancelled; the attachment
/// guard turns a late firing into a no-op.
pub fn notify(mut notifier: Signal<Notifier>, message: impl Into<String>, kind: ToastKind) -> ToastId {
    let id = notifier.write().show(message, kind);

    spawn(async move {
        tokio::time::sleep(REVEAL_DELAY).await;
        notifier.write().reveal(id);
    });

    spawn(async move {
        tokio::time::sleep(AUTO_DISMISS_AFTER).await;
        if notifier.peek().is_attached(id) {
            notifier.write().begin_dismiss(id);
            tokio::time::sleep(EXIT_DURATION).await;
            notifier.write().remove(id);
        }
    });

    id
}

/// Manual dismissal: slide out, then remove once the transition has run.
///
/// A second activation while the toast is already dismissing changes
/// nothing; removal is only scheduled on the transition that actually
/// started the slide-out.
pub fn dismiss(mut notifier: Signal<Notifier>, id: ToastId) {
    if notifier.write().begin_dismiss(id) {
        spawn(async move {
            tokio::time::sleep(EXIT_DURATION).await;
            notifier.write().remove(id);
        });
    }
}

/// Renders whatever occupies the toast slot.
///
/// The element exists for the whole inserted → dismissing span; the `show`
/// class only while visible, so the stylesheet's transition animates both
/// directions.
#[component]
pub fn ToastHost() -> Element {
    let notifier = use_notifier();

    let Some(toast) = notifier.read().current().cloned() else {
        return rsx! {};
    };

    let id = toast.id();
    let class = if toast.is_shown() {
        format!("toast {} show", toast.kind().css_class())
    } else {
        format!("toast {}", toast.kind().css_class())
    };

    rsx! {
        div { class: "{class}",
            span { class: "toast-message", "{toast.message()}" }
            button {
                class: "toast-close",
                "aria-label": "Dismiss notification",
                onclick: move |_| dismiss(notifier, id),
                "\u{00d7}"
            }
        }
    }
}
