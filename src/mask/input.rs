//! Stroke input commands
//!
//! One value per host pointer event, already converted to surface-local
//! pixel coordinates.

/// Pointer event forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeInput {
    /// Pointer/touch pressed
    Begin { x: f32, y: f32 },
    /// Pointer/touch moved while pressed
    Continue { x: f32, y: f32 },
    /// Pointer released, left the surface, or touch ended
    End,
}

/// What a single input did to the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrokeOutcome {
    /// Cells erased for the first time by this input
    pub cleared: usize,
    /// True only on the input that crossed the reveal threshold
    pub revealed: bool,
}

impl StrokeOutcome {
    /// Outcome of an ignored input
    pub fn none() -> Self {
        Self::default()
    }
}
