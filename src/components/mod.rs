//! UI Components for Vitrine.

mod contact;
mod hero;
mod nav_header;
mod scroll_effects;
mod studio;
pub mod toast;
mod work;

pub use contact::ContactSection;
pub use contact::CONTACT_METHODS;
pub use hero::Hero;
pub use nav_header::{NavHeader, Section};
pub use scroll_effects::use_scroll_effects;
pub use studio::{StudioSection, STATS};
pub use toast::ToastHost;
pub use work::{WorkSection, PROJECTS};
