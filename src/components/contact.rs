//! Contact Section
//!
//! Contact methods column plus the message form. Submission is validated
//! in vitrine-core and the outcome lands in the toast slot; there is no
//! actual transmission; acknowledging locally is the deliberate boundary
//! of this site.

use dioxus::prelude::*;
use vitrine_core::{ContactDraft, RevealLatch, ToastKind};

use crate::components::nav_header::Section;
use crate::components::toast::notify;
use crate::context::use_notifier;

/// Toast copy for an accepted submission.
const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// A way to reach the studio.
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
}

/// The contact methods column, in display order.
pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        value: "hello@vitrine.studio",
    },
    ContactMethod {
        label: "Studio",
        value: "Rua das Flores 114, Lisbon",
    },
    ContactMethod {
        label: "Availability",
        value: "Booking projects from October",
    },
];

#[derive(Props, Clone, PartialEq)]
pub struct ContactSectionProps {
    /// Shared reveal latches.
    pub latch: Signal<RevealLatch>,
    /// Latch index of this section's first contact method.
    pub base: usize,
}

#[component]
pub fn ContactSection(props: ContactSectionProps) -> Element {
    rsx! {
        section { id: Section::Contact.anchor(), class: "section contact-section",
            h2 { class: "section-title", "Get in Touch" }
            div { class: "contact-columns",
                div { class: "contact-methods",
                    for (index, method) in CONTACT_METHODS.iter().enumerate().map(|(i, m)| (props.base + i, m)) {
                        div {
                            class: if props.latch.read().is_revealed(index) {
                                "contact-method animate-in"
                            } else {
                                "contact-method"
                            },
                            "data-reveal": "{index}",
                            span { class: "method-label", "{method.label}" }
                            span { class: "method-value", "{method.value}" }
                        }
                    }
                }
                ContactForm {}
            }
        }
    }
}

/// The message form.
///
/// Validation order matches the core: required fields first, then email
/// shape. Failed validation leaves every field exactly as typed.
#[component]
pub fn ContactForm() -> Element {
    let notifier = use_notifier();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut is_sending = use_signal(|| false);

    let handle_submit = move |_| {
        if is_sending() {
            return;
        }

        let draft = ContactDraft::new(name(), email(), message());
        match draft.validate() {
            Ok(()) => {
                tracing::info!("contact form accepted");
                is_sending.set(true);
                notify(notifier, SUCCESS_MESSAGE, ToastKind::Success);

                // Simulated success: clear the form, no transmission.
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());

                // Reset sending state after brief delay
                spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                    is_sending.set(false);
                });
            }
            Err(err) => {
                tracing::info!(%err, "contact form rejected");
                notify(notifier, err.to_string(), ToastKind::Error);
            }
        }
    };

    rsx! {
        div { class: "contact-form",
            input {
                class: "form-field",
                r#type: "text",
                placeholder: "Your name",
                value: "{name}",
                oninput: move |e| name.set(e.value()),
            }
            input {
                class: "form-field",
                r#type: "email",
                placeholder: "you@example.com",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
            }
            textarea {
                class: "form-field form-message",
                placeholder: "Tell us about your project...",
                rows: 5,
                value: "{message}",
                oninput: move |e| message.set(e.value()),
            }
            button {
                class: "btn btn-primary form-submit",
                disabled: is_sending(),
                onclick: handle_submit,
                if is_sending() { "Sending..." } else { "Send message" }
            }
        }
    }
}
