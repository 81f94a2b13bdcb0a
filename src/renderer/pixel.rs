//! RGBA8 pixel type shared by the cover image and composited frames

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{ScratchError, ScratchResult};
use crate::lerp;

/// Straight-alpha RGBA pixel, laid out for `ImageData`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(s: &str) -> ScratchResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ScratchError::config(format!(
                "color {s:?} is not in #rrggbb form"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ScratchError::config(format!("color {s:?} has invalid hex digits")))
        };
        Ok(Self::opaque(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Copy of this pixel with a different alpha
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Interpolate color channels; result is opaque
    pub fn mix(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| lerp(a as f32, b as f32, t).round() as u8;
        Self::opaque(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    /// Source-over blend of `src` at `opacity` onto this opaque pixel
    #[inline]
    pub fn blend(self, src: Self, opacity: f32) -> Self {
        self.mix(src, opacity)
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = ScratchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

/// View a pixel slice as raw bytes (RGBA order)
#[inline]
pub fn as_bytes(pixels: &[Rgba8]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Rgba8::from_hex("#6366f1").unwrap();
        assert_eq!(c, Rgba8::opaque(0x63, 0x66, 0xf1));
        assert_eq!(Rgba8::from_hex("8B5CF6").unwrap(), Rgba8::opaque(0x8b, 0x5c, 0xf6));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Rgba8::from_hex("#fff").is_err());
        assert!(Rgba8::from_hex("#gggggg").is_err());
        assert!(Rgba8::from_hex("").is_err());
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Rgba8::opaque(0, 100, 200);
        let b = Rgba8::opaque(200, 100, 0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgba8::opaque(100, 100, 100));
    }

    #[test]
    fn test_as_bytes_layout() {
        let px = [Rgba8 { r: 1, g: 2, b: 3, a: 4 }];
        assert_eq!(as_bytes(&px), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_serde_hex_string() {
        let json = serde_json::to_string(&Rgba8::opaque(0x63, 0x66, 0xf1)).unwrap();
        assert_eq!(json, "\"#6366f1\"");
        let back: Rgba8 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba8::opaque(0x63, 0x66, 0xf1));
        assert!(serde_json::from_str::<Rgba8>("\"nope\"").is_err());
    }
}
