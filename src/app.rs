use dioxus::prelude::*;
use vitrine_core::Notifier;

use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The site is one scrollable page; navigation within it is by in-page
/// anchors, not routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles and the shared toast notifier context.
#[component]
pub fn App() -> Element {
    // One toast slot for the whole app; the contact form and the toast
    // host both reach it through context.
    let notifier: Signal<Notifier> = use_signal(Notifier::new);
    use_context_provider(|| notifier);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
