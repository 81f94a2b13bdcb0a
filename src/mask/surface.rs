//! The scratch surface: mask + cover + reveal state machine
//!
//! State only moves forward: `Covered -> Scratching -> Revealed`. The reveal
//! callback is an `FnOnce` taken out of its slot on the transition, so it
//! cannot run twice.

use std::fmt;

use glam::Vec2;

use super::buffer::{AlphaMask, EraseResult};
use super::coverage::Coverage;
use super::input::{StrokeInput, StrokeOutcome};
use super::raster::CellRect;
use crate::error::ScratchResult;
use crate::renderer::{CoverImage, CoverPainter, GradientCover, Rgba8, compose, compose_region};
use crate::settings::ScratchSettings;

/// Lifecycle of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// Untouched cover
    Covered,
    /// At least one stroke has started
    Scratching,
    /// Threshold crossed; terminal
    Revealed,
}

impl SurfaceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceState::Covered => "covered",
            SurfaceState::Scratching => "scratching",
            SurfaceState::Revealed => "revealed",
        }
    }
}

/// Erasable cover over hidden content
pub struct ScratchSurface {
    mask: AlphaMask,
    cover: CoverImage,
    coverage: Coverage,
    threshold_percent: f32,
    brush_radius: f32,
    state: SurfaceState,
    /// Last erase point of the active stroke
    last_point: Option<Vec2>,
    /// Cells changed since the host last presented
    dirty: Option<CellRect>,
    on_revealed: Option<Box<dyn FnOnce()>>,
}

impl ScratchSurface {
    /// Surface with the default cover and brush
    pub fn new(width: u32, height: u32, threshold_percent: f32) -> ScratchResult<Self> {
        Self::from_settings(&ScratchSettings::new(width, height, threshold_percent))
    }

    /// Surface painted with the settings' gradient cover
    pub fn from_settings(settings: &ScratchSettings) -> ScratchResult<Self> {
        Self::with_painter(settings, &GradientCover::new(settings.cover.clone()))
    }

    /// Surface painted by a custom cover painter
    pub fn with_painter(settings: &ScratchSettings, painter: &dyn CoverPainter) -> ScratchResult<Self> {
        settings.validate()?;

        let mask = AlphaMask::new(settings.width, settings.height);
        let mut cover = CoverImage::new(settings.width, settings.height);
        painter.paint(&mut cover);

        log::debug!(
            "Created {}x{} surface (threshold {}%, radius {})",
            settings.width,
            settings.height,
            settings.threshold_percent,
            settings.brush_radius
        );

        Ok(Self {
            coverage: Coverage::new(mask.len()),
            mask,
            cover,
            threshold_percent: settings.threshold_percent,
            brush_radius: settings.brush_radius,
            state: SurfaceState::Covered,
            last_point: None,
            dirty: Some(CellRect::full(settings.width, settings.height)),
            on_revealed: None,
        })
    }

    /// Register the one-shot reveal callback
    ///
    /// Replaces any earlier callback. Ignored once the surface is revealed.
    pub fn on_revealed(&mut self, callback: impl FnOnce() + 'static) {
        if self.state == SurfaceState::Revealed {
            log::debug!("Reveal callback registered after reveal; ignoring");
            return;
        }
        self.on_revealed = Some(Box::new(callback));
    }

    /// Press: erase a dab and start (or restart) a stroke
    pub fn begin_stroke(&mut self, x: f32, y: f32) -> StrokeOutcome {
        if self.state == SurfaceState::Revealed {
            return StrokeOutcome::none();
        }
        if self.state == SurfaceState::Covered {
            log::debug!("First stroke");
            self.state = SurfaceState::Scratching;
        }

        let p = self.mask.clamp_point(Vec2::new(x, y));
        let result = self.mask.erase_disk(p, self.brush_radius);
        self.last_point = Some(p);
        self.finish_erase(result)
    }

    /// Drag: erase the capsule from the last point to here
    ///
    /// Ignored when no stroke is active (pointer hovering).
    pub fn continue_stroke(&mut self, x: f32, y: f32) -> StrokeOutcome {
        if self.state == SurfaceState::Revealed {
            return StrokeOutcome::none();
        }
        let Some(last) = self.last_point else {
            return StrokeOutcome::none();
        };

        let p = self.mask.clamp_point(Vec2::new(x, y));
        // The capsule includes the dab at `p`
        let result = self.mask.erase_capsule(last, p, self.brush_radius);
        self.last_point = Some(p);
        self.finish_erase(result)
    }

    /// Release: forget the stroke anchor. Never changes state.
    pub fn end_stroke(&mut self) {
        self.last_point = None;
    }

    /// Dispatch a host input
    pub fn apply(&mut self, input: StrokeInput) -> StrokeOutcome {
        match input {
            StrokeInput::Begin { x, y } => self.begin_stroke(x, y),
            StrokeInput::Continue { x, y } => self.continue_stroke(x, y),
            StrokeInput::End => {
                self.end_stroke();
                StrokeOutcome::none()
            }
        }
    }

    fn finish_erase(&mut self, result: EraseResult) -> StrokeOutcome {
        self.coverage.record(result.newly_cleared);
        if let Some(rect) = result.touched {
            self.dirty = Some(match self.dirty {
                Some(d) => d.union(&rect),
                None => rect,
            });
        }

        let revealed = self.coverage.reached(self.threshold_percent);
        if revealed {
            self.reveal();
        }
        StrokeOutcome {
            cleared: result.newly_cleared,
            revealed,
        }
    }

    fn reveal(&mut self) {
        self.state = SurfaceState::Revealed;
        self.last_point = None;
        log::info!(
            "Revealed at {:.1}% cleared (threshold {}%)",
            self.coverage.percent(),
            self.threshold_percent
        );
        if let Some(callback) = self.on_revealed.take() {
            callback();
        }
    }

    /// Percent of cells fully erased, in [0, 100]
    pub fn coverage_percent(&self) -> f32 {
        self.coverage.percent()
    }

    /// Number of fully erased cells (running count)
    pub fn cleared_cells(&self) -> usize {
        self.coverage.cleared()
    }

    /// Full-scan count of erased cells; always equals `cleared_cells`
    pub fn rescan_cleared(&self) -> usize {
        self.mask.count_cleared()
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == SurfaceState::Revealed
    }

    pub fn last_point(&self) -> Option<Vec2> {
        self.last_point
    }

    pub fn threshold_percent(&self) -> f32 {
        self.threshold_percent
    }

    pub fn brush_radius(&self) -> f32 {
        self.brush_radius
    }

    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    pub fn mask(&self) -> &AlphaMask {
        &self.mask
    }

    pub fn cover(&self) -> &CoverImage {
        &self.cover
    }

    /// Take the region changed since the last call (initially the whole surface)
    pub fn take_dirty(&mut self) -> Option<CellRect> {
        self.dirty.take()
    }

    /// Composited RGBA frame of the whole surface
    pub fn frame(&self) -> Vec<Rgba8> {
        compose(&self.cover, &self.mask)
    }

    /// Composited RGBA pixels of a sub-rectangle
    pub fn frame_region(&self, rect: CellRect) -> Vec<Rgba8> {
        compose_region(&self.cover, &self.mask, rect)
    }
}

impl fmt::Debug for ScratchSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchSurface")
            .field("width", &self.mask.width())
            .field("height", &self.mask.height())
            .field("state", &self.state)
            .field("coverage", &self.coverage)
            .field("threshold_percent", &self.threshold_percent)
            .field("brush_radius", &self.brush_radius)
            .field("last_point", &self.last_point)
            .field("has_callback", &self.on_revealed.is_some())
            .finish()
    }
}
