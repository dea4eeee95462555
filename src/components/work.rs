//! Work Section
//!
//! Project cards that fade in as they scroll into view. Each card is a
//! reveal target; the latch index is its position in page order.

use dioxus::prelude::*;
use vitrine_core::RevealLatch;

use crate::components::nav_header::Section;

/// A portfolio entry.
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

/// The studio's selected work, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Meridian",
        summary: "A treasury dashboard for a fintech startup: dense tables, \
                  live positions, and zero tolerance for ambiguity.",
        tags: &["Product design", "Frontend"],
    },
    Project {
        title: "Fieldnotes",
        summary: "Publishing platform for a botanical archive — 40,000 \
                  specimens, readable on a phone in a greenhouse.",
        tags: &["Design system", "CMS"],
    },
    Project {
        title: "Octave",
        summary: "Session tooling for a recording studio collective: \
                  booking, stems, and payouts in one quiet interface.",
        tags: &["Branding", "Full build"],
    },
];

#[derive(Props, Clone, PartialEq)]
pub struct WorkSectionProps {
    /// Shared reveal latches.
    pub latch: Signal<RevealLatch>,
    /// Latch index of this section's first card.
    pub base: usize,
}

#[component]
pub fn WorkSection(props: WorkSectionProps) -> Element {
    rsx! {
        section { id: Section::Work.anchor(), class: "section work-section",
            h2 { class: "section-title", "Selected Work" }
            div { class: "card-grid",
                for (index, project) in PROJECTS.iter().enumerate().map(|(i, p)| (props.base + i, p)) {
                    div {
                        class: if props.latch.read().is_revealed(index) {
                            "project-card animate-in"
                        } else {
                            "project-card"
                        },
                        "data-reveal": "{index}",
                        h3 { class: "card-title", "{project.title}" }
                        p { class: "card-summary", "{project.summary}" }
                        div { class: "card-tags",
                            for tag in project.tags {
                                span { class: "tag", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
