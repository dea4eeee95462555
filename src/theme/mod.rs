//! Visual theme for Vitrine.

mod styles;

pub use styles::GLOBAL_STYLES;
