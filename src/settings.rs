//! Widget settings
//!
//! Embedded by the host as JSON (e.g. a `data-scratch-settings` attribute).
//! Every field has a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ScratchError, ScratchResult};
use crate::renderer::Rgba8;

/// Eraser size presets
///
/// Serialized by name (`"fine"`, `"standard"`, `"wide"` and their aliases).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum BrushPreset {
    Fine,
    #[default]
    Standard,
    Wide,
}

impl BrushPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrushPreset::Fine => "Fine",
            BrushPreset::Standard => "Standard",
            BrushPreset::Wide => "Wide",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fine" | "small" => Some(BrushPreset::Fine),
            "standard" | "medium" | "med" => Some(BrushPreset::Standard),
            "wide" | "large" => Some(BrushPreset::Wide),
            _ => None,
        }
    }

    /// Eraser radius in pixels
    pub fn radius(&self) -> f32 {
        match self {
            BrushPreset::Fine => DEFAULT_BRUSH_RADIUS / 2.0,
            BrushPreset::Standard => DEFAULT_BRUSH_RADIUS,
            BrushPreset::Wide => DEFAULT_BRUSH_RADIUS * 1.6,
        }
    }
}

impl TryFrom<String> for BrushPreset {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s).ok_or_else(|| format!("unknown brush preset '{s}'"))
    }
}

impl From<BrushPreset> for String {
    fn from(preset: BrushPreset) -> Self {
        preset.as_str().to_lowercase()
    }
}

/// Look of the procedural cover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverStyle {
    /// Gradient stops, top-left to bottom-right
    pub gradient: [Rgba8; 2],
    /// Number of translucent texture dots
    pub dot_count: u32,
    /// Centered hint text (None hides it)
    pub label: Option<String>,
    /// Seed for dot placement
    pub seed: u64,
}

impl Default for CoverStyle {
    fn default() -> Self {
        Self {
            gradient: [Rgba8::opaque(0x63, 0x66, 0xf1), Rgba8::opaque(0x8b, 0x5c, 0xf6)],
            dot_count: DEFAULT_DOT_COUNT,
            label: Some(DEFAULT_LABEL.to_string()),
            seed: DEFAULT_COVER_SEED,
        }
    }
}

/// Scratch widget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchSettings {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Cleared percent (0, 100] that reveals the prize
    pub threshold_percent: f32,
    /// Eraser radius in pixels
    pub brush_radius: f32,
    /// Named eraser size; overrides `brush_radius` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush: Option<BrushPreset>,
    /// Cover appearance
    pub cover: CoverStyle,
}

impl Default for ScratchSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            brush: None,
            cover: CoverStyle::default(),
        }
    }
}

impl ScratchSettings {
    /// Settings with the given size and threshold, defaults elsewhere
    pub fn new(width: u32, height: u32, threshold_percent: f32) -> Self {
        Self {
            width,
            height,
            threshold_percent,
            ..Self::default()
        }
    }

    /// Create settings from a brush preset
    pub fn from_preset(preset: BrushPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a brush preset (updates the radius)
    pub fn apply_preset(&mut self, preset: BrushPreset) {
        self.brush = Some(preset);
        self.brush_radius = preset.radius();
    }

    /// Reject configurations the surface cannot honor
    pub fn validate(&self) -> ScratchResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ScratchError::config(format!(
                "surface size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if (self.width as u64) * (self.height as u64) > u32::MAX as u64 {
            return Err(ScratchError::config(format!(
                "surface {}x{} is too large",
                self.width, self.height
            )));
        }
        // NaN fails both comparisons
        if !(self.threshold_percent > 0.0 && self.threshold_percent <= 100.0) {
            return Err(ScratchError::config(format!(
                "threshold_percent must be in (0, 100], got {}",
                self.threshold_percent
            )));
        }
        if !(self.brush_radius.is_finite() && self.brush_radius > 0.0) {
            return Err(ScratchError::config(format!(
                "brush_radius must be positive and finite, got {}",
                self.brush_radius
            )));
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> ScratchResult<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        if let Some(preset) = settings.brush {
            settings.apply_preset(preset);
        }
        settings.validate()?;
        log::debug!(
            "Loaded settings: {}x{} threshold {}%",
            settings.width,
            settings.height,
            settings.threshold_percent
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> ScratchResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
