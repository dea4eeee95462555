//! Page components for Vitrine.

mod landing;

pub use landing::Landing;
