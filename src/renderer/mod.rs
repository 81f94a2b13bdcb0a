//! Software rendering for the scratch card
//!
//! Paints the cover, composites it with the mask into RGBA frames the host can
//! hand to a 2D canvas, and times the post-reveal fade.

pub mod compose;
pub mod cover;
pub mod fade;
pub mod font;
pub mod pixel;

pub use compose::{compose, compose_region};
pub use cover::{CoverImage, CoverPainter, GradientCover};
pub use fade::RevealFade;
pub use pixel::{Rgba8, as_bytes};
