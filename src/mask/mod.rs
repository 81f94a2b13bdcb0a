//! Deterministic erase core
//!
//! Everything the reveal decision depends on lives here. This module must be
//! pure and deterministic:
//! - Input order only, no clocks
//! - Hard-edged erasure, exact counts
//! - No rendering or platform dependencies beyond the painted cover

pub mod buffer;
pub mod coverage;
pub mod input;
pub mod raster;
pub mod sdf;
pub mod surface;

pub use buffer::{AlphaMask, EraseResult};
pub use coverage::Coverage;
pub use input::{StrokeInput, StrokeOutcome};
pub use raster::CellRect;
pub use sdf::{capsule_contains, sd_capsule, sd_circle, segment_distance_sq};
pub use surface::{ScratchSurface, SurfaceState};
