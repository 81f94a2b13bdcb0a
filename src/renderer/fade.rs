//! Reveal fade timeline
//!
//! Started by the host when the surface reports its reveal. The mask fades
//! out, and a short celebration flash pulses over the prize.

use crate::consts::{CELEBRATION_MS, MASK_FADE_MS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFade {
    /// Host timestamp (ms) when the reveal happened
    pub start_ms: f64,
    /// Mask fade duration (ms)
    pub fade_ms: f64,
    /// Celebration flash duration (ms)
    pub celebration_ms: f64,
}

impl RevealFade {
    pub fn start(now_ms: f64) -> Self {
        Self {
            start_ms: now_ms,
            fade_ms: MASK_FADE_MS,
            celebration_ms: CELEBRATION_MS,
        }
    }

    fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }

    /// Mask opacity, 1 at the reveal down to 0 after `fade_ms`
    pub fn mask_opacity(&self, now_ms: f64) -> f32 {
        if self.fade_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - self.elapsed(now_ms) / self.fade_ms).clamp(0.0, 1.0) as f32
    }

    /// Celebration flash opacity, 0 -> 1 -> 0 over `celebration_ms`
    pub fn celebration_opacity(&self, now_ms: f64) -> f32 {
        if self.celebration_ms <= 0.0 {
            return 0.0;
        }
        let t = (self.elapsed(now_ms) / self.celebration_ms).clamp(0.0, 1.0);
        (1.0 - (2.0 * t - 1.0).abs()) as f32
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.elapsed(now_ms) >= self.fade_ms.max(self.celebration_ms)
    }
}
