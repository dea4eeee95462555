//! Landing page - the whole site.
//!
//! One scrollable page: hero, selected work, studio intro, contact. This
//! component owns the presentation signals the scroll bridge writes and
//! the mobile menu state, and wires the page-level close paths (outside
//! click, Escape).

use dioxus::prelude::*;
use vitrine_core::{MenuState, RevealLatch};

use crate::components::{
    use_scroll_effects, ContactSection, Hero, NavHeader, StudioSection, ToastHost, WorkSection,
    CONTACT_METHODS, PROJECTS, STATS,
};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    // Presentation state derived from scroll frames.
    let scrolled = use_signal(|| false);
    let parallax = use_signal(|| 0.0f64);
    let latch = use_signal(|| {
        RevealLatch::with_targets(PROJECTS.len() + STATS.len() + CONTACT_METHODS.len())
    });
    let active = use_signal(|| Option::<usize>::None);
    let mut menu = use_signal(MenuState::default);

    use_scroll_effects(scrolled, parallax, latch, active, menu);

    // Latch index bases follow page order, which is also the document
    // order the bridge script sees.
    let work_base = 0;
    let studio_base = PROJECTS.len();
    let contact_base = PROJECTS.len() + STATS.len();

    rsx! {
        main {
            class: "page",
            tabindex: "0",
            // Any click that propagates this far was outside the toggle
            // and the menu.
            onclick: move |_| menu.write().close(),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    menu.write().close();
                }
            },

            NavHeader { scrolled: scrolled(), active: active(), menu }
            Hero { parallax: parallax() }
            WorkSection { latch, base: work_base }
            StudioSection { latch, base: studio_base }
            ContactSection { latch, base: contact_base }

            footer { class: "site-footer",
                p { class: "footer-note", "Vitrine — made slowly, shipped on time." }
            }

            ToastHost {}
        }
    }
}
