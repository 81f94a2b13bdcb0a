//! Scratch Reveal - an erasable canvas cover with a one-shot reveal
//!
//! Core modules:
//! - `mask`: Deterministic erase core (alpha mask, stroke rasterization, coverage, surface state)
//! - `renderer`: Procedural cover painting, compositing and the reveal fade
//! - `platform`: Browser pointer coordinate helpers
//! - `settings`: Data-driven widget configuration

pub mod error;
pub mod mask;
pub mod platform;
pub mod renderer;
pub mod settings;

pub use error::{ScratchError, ScratchResult};
pub use mask::{ScratchSurface, StrokeInput, StrokeOutcome, SurfaceState};
pub use settings::{CoverStyle, ScratchSettings};

/// Widget configuration constants
pub mod consts {
    /// Default surface size (matches the original card widget)
    pub const DEFAULT_WIDTH: u32 = 300;
    pub const DEFAULT_HEIGHT: u32 = 200;

    /// Percent of cells that must be cleared before the prize counts as revealed
    pub const DEFAULT_THRESHOLD_PERCENT: f32 = 50.0;

    /// Eraser radius in pixels (a 50px round brush)
    pub const DEFAULT_BRUSH_RADIUS: f32 = 25.0;

    /// Alpha of an untouched mask cell
    pub const ALPHA_COVERED: u8 = 255;
    /// Alpha of a fully erased mask cell
    pub const ALPHA_CLEARED: u8 = 0;

    /// Relative tolerance on `radius²` for "distance <= radius" tests
    pub const DISTANCE_EPSILON: f64 = 1e-12;

    /// Cover texture defaults
    pub const DEFAULT_DOT_COUNT: u32 = 50;
    pub const DOT_MIN_RADIUS: f32 = 1.0;
    pub const DOT_MAX_RADIUS: f32 = 4.0;
    pub const DOT_OPACITY: f32 = 0.1;
    pub const LABEL_OPACITY: f32 = 0.8;
    pub const LABEL_SCALE: u32 = 2;
    pub const DEFAULT_LABEL: &str = "Scratch to reveal";
    pub const DEFAULT_COVER_SEED: u64 = 0x5C2A_7C4E;

    /// Reveal fade timings (milliseconds)
    pub const MASK_FADE_MS: f64 = 500.0;
    pub const CELEBRATION_MS: f64 = 1000.0;
}

/// Clamp a coordinate into `[0, max]`, mapping NaN to 0
#[inline]
pub fn clamp_coord(v: f32, max: f32) -> f32 {
    // f32::max returns the non-NaN operand, so NaN lands on 0
    v.max(0.0).min(max)
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_coord() {
        assert_eq!(clamp_coord(-50.0, 99.0), 0.0);
        assert_eq!(clamp_coord(150.0, 99.0), 99.0);
        assert_eq!(clamp_coord(42.5, 99.0), 42.5);
        assert_eq!(clamp_coord(f32::NAN, 99.0), 0.0);
        assert_eq!(clamp_coord(f32::INFINITY, 99.0), 99.0);
        assert_eq!(clamp_coord(f32::NEG_INFINITY, 99.0), 0.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    }
}
