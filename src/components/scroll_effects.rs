//! Scroll Effects Bridge
//!
//! The webview owns scroll events; the core crate owns every decision made
//! from them. One injected script posts a geometry frame on scroll and
//! resize (plus once at mount), and a task on the Rust side feeds each
//! frame through vitrine-core's scroll math to update presentation
//! signals: header state, hero parallax, reveal latches, the scroll-spy
//! section, and the breakpoint-crossing menu close.

use dioxus::document;
use dioxus::prelude::*;
use vitrine_core::{
    active_section, crossed_to_desktop, header_scrolled, parallax_shift, MenuState, RevealLatch,
    ScrollFrame,
};

/// Posts one frame per scroll/resize event: scroll offset, viewport size,
/// header height, and the viewport-relative geometry of reveal targets and
/// section anchors, both in document order.
const SCROLL_BRIDGE_JS: &str = r#"
const frame = () => {
    const targets = Array.from(document.querySelectorAll("[data-reveal]")).map((el) => {
        const r = el.getBoundingClientRect();
        return [r.top, r.height];
    });
    const sections = Array.from(document.querySelectorAll("section[id]")).map(
        (el) => el.getBoundingClientRect().top
    );
    const header = document.querySelector(".site-header");
    dioxus.send({
        offset: window.scrollY,
        viewport_width: window.innerWidth,
        viewport_height: window.innerHeight,
        header_height: header ? header.offsetHeight : 0,
        targets,
        sections,
    });
};
window.addEventListener("scroll", frame, { passive: true });
window.addEventListener("resize", frame);
frame();
"#;

/// Wires the scroll bridge into the given presentation signals.
///
/// Call once from the page component. The listener task lives as long as
/// the app; nothing is ever un-observed.
pub fn use_scroll_effects(
    mut scrolled: Signal<bool>,
    mut parallax: Signal<f64>,
    mut latch: Signal<RevealLatch>,
    mut active: Signal<Option<usize>>,
    mut menu: Signal<MenuState>,
) {
    use_effect(move || {
        spawn(async move {
            let mut frames = document::eval(SCROLL_BRIDGE_JS);
            let mut previous_width: Option<f64> = None;

            loop {
                let frame: ScrollFrame = match frames.recv().await {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::warn!("scroll bridge ended: {e:?}");
                        break;
                    }
                };

                let now_scrolled = header_scrolled(frame.offset);
                if *scrolled.peek() != now_scrolled {
                    scrolled.set(now_scrolled);
                }

                parallax.set(parallax_shift(frame.offset));

                // Only grab a write (and re-render) when something latches.
                if latch
                    .peek()
                    .would_latch(&frame.targets, frame.viewport_height)
                {
                    let latched = latch
                        .write()
                        .observe_frame(&frame.targets, frame.viewport_height);
                    tracing::debug!(latched, "reveal targets latched");
                }

                let now_active = active_section(&frame.sections, frame.header_height);
                if *active.peek() != now_active {
                    active.set(now_active);
                }

                // Widening past the breakpoint force-closes the mobile menu.
                if let Some(prev) = previous_width {
                    if crossed_to_desktop(prev, frame.viewport_width) && menu.peek().is_open() {
                        menu.write().close();
                    }
                }
                previous_width = Some(frame.viewport_width);
            }
        });
    });
}
