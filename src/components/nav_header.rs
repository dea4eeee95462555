//! Site Navigation Header
//!
//! Desktop: fixed horizontal header with brand and nav links.
//! Mobile (< 768px): the links collapse behind a hamburger toggle; the
//! open/closed state machine lives in vitrine-core.

use dioxus::document;
use dioxus::prelude::*;
use vitrine_core::{scroll_target, MenuState};

/// Section of the landing page reachable from the nav.
///
/// Single source of truth for the document-structure contract: every nav
/// link, anchor id, and scroll-spy index derives from this enum, in page
/// order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    Work,
    Studio,
    Contact,
}

impl Section {
    /// All sections in page order (the scroll-spy index order).
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Work,
            Section::Studio,
            Section::Contact,
        ]
    }

    /// The in-page anchor id of this section's element.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Work => "work",
            Section::Studio => "studio",
            Section::Contact => "contact",
        }
    }

    /// The display label for the nav link.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Work => "Work",
            Section::Studio => "Studio",
            Section::Contact => "Contact",
        }
    }
}

/// Smooth-scrolls the viewport so `section` sits just below the header.
///
/// Probes the document for the target and the header height, computes the
/// destination in Rust, then hands the animated scroll to the webview. A
/// target missing from the document is a silent no-op.
pub fn scroll_to(section: Section) {
    spawn(async move {
        let probe = format!(
            r#"const t = document.getElementById("{id}");
const h = document.querySelector(".site-header");
dioxus.send(t ? [t.getBoundingClientRect().top + window.scrollY, h ? h.offsetHeight : 0] : null);"#,
            id = section.anchor()
        );
        let mut eval = document::eval(&probe);
        match eval.recv::<Option<(f64, f64)>>().await {
            Ok(Some((top, header_height))) => {
                let target = scroll_target(top, header_height);
                document::eval(&format!(
                    "window.scrollTo({{ top: {target}, behavior: 'smooth' }});"
                ));
            }
            Ok(None) => {
                // Section not in the document; nothing to scroll to.
            }
            Err(e) => {
                tracing::warn!("scroll probe failed: {e:?}");
            }
        }
    });
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Whether the page has scrolled past the header threshold.
    pub scrolled: bool,
    /// Scroll-spy index of the section currently under the viewport.
    pub active: Option<usize>,
    /// Shared mobile menu state.
    pub menu: Signal<MenuState>,
}

/// Navigation header component.
///
/// The toggle and the menu stop click propagation so that the page-level
/// outside-click handler only sees clicks that should close the menu.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut menu = props.menu;

    let header_class = if props.scrolled {
        "site-header scrolled"
    } else {
        "site-header"
    };

    rsx! {
        header { class: "{header_class}",
            div { class: "nav-inner",
                // Brand doubles as a home link
                a {
                    class: "brand",
                    onclick: move |e| {
                        e.stop_propagation();
                        menu.write().close();
                        scroll_to(Section::Home);
                    },
                    "Vitrine"
                }

                // Hamburger, only visible under the breakpoint
                button {
                    class: "{menu.read().toggle_class()}",
                    "aria-label": "Toggle navigation menu",
                    "aria-expanded": "{menu.read().is_open()}",
                    onclick: move |e| {
                        e.stop_propagation();
                        menu.write().toggle();
                    },
                    span { class: "toggle-bar" }
                    span { class: "toggle-bar" }
                    span { class: "toggle-bar" }
                }

                nav {
                    class: "{menu.read().menu_class()}",
                    onclick: move |e| e.stop_propagation(),
                    for (i, section) in Section::all().iter().enumerate() {
                        a {
                            class: if props.active == Some(i) { "nav-link active" } else { "nav-link" },
                            // Link clicks always close the menu.
                            onclick: move |_| {
                                menu.write().close();
                                scroll_to(*section);
                            },
                            "{section.label()}"
                        }
                    }
                }
            }
        }
    }
}
