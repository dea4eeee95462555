//! Studio Section
//!
//! A short introduction and the stats row. The stats are reveal targets so
//! they fade in on first visibility, like the project cards.

use dioxus::prelude::*;
use vitrine_core::RevealLatch;

use crate::components::nav_header::Section;

/// A headline figure about the studio.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// The stats row, in display order.
pub const STATS: &[Stat] = &[
    Stat {
        value: "24",
        label: "Projects shipped",
    },
    Stat {
        value: "9",
        label: "Years in practice",
    },
    Stat {
        value: "3",
        label: "Design awards",
    },
];

#[derive(Props, Clone, PartialEq)]
pub struct StudioSectionProps {
    /// Shared reveal latches.
    pub latch: Signal<RevealLatch>,
    /// Latch index of this section's first stat.
    pub base: usize,
}

#[component]
pub fn StudioSection(props: StudioSectionProps) -> Element {
    rsx! {
        section { id: Section::Studio.anchor(), class: "section studio-section",
            h2 { class: "section-title", "The Studio" }
            p { class: "studio-blurb",
                "Two designers, three engineers, one shared conviction: the "
                "craft is in the details nobody has to notice. We take on a "
                "handful of projects a year and finish every one of them."
            }
            div { class: "stats-row",
                for (index, stat) in STATS.iter().enumerate().map(|(i, s)| (props.base + i, s)) {
                    div {
                        class: if props.latch.read().is_revealed(index) {
                            "stat animate-in"
                        } else {
                            "stat"
                        },
                        "data-reveal": "{index}",
                        span { class: "stat-value", "{stat.value}" }
                        span { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}
