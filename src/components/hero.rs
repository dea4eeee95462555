//! Hero Section
//!
//! Full-height opening section. The inner block carries the parallax
//! transform computed from the scroll offset: the content drifts up at
//! half scroll speed.

use dioxus::prelude::*;

use crate::components::nav_header::{scroll_to, Section};

#[component]
pub fn Hero(parallax: f64) -> Element {
    rsx! {
        section { id: Section::Home.anchor(), class: "hero",
            div { class: "hero-inner", style: "transform: translateY({parallax}px);",
                p { class: "hero-kicker", "Design & Code Studio" }
                h1 { class: "hero-title", "We build interfaces with intent." }
                p { class: "hero-tagline",
                    "Vitrine is a small studio crafting precise, durable digital "
                    "products — from brand sites to data-heavy tools."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| scroll_to(Section::Contact),
                        "Start a project"
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| scroll_to(Section::Work),
                        "See our work"
                    }
                }
            }
        }
    }
}
