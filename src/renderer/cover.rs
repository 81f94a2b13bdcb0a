//! Procedural cover painting
//!
//! The cover is what the user scratches away: a diagonal gradient, a seeded
//! scatter of faint dots and a centered hint label. Painters only produce
//! color; opacity lives in the mask, so any painter yields a fully opaque
//! surface.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::font;
use super::pixel::Rgba8;
use crate::consts::*;
use crate::settings::CoverStyle;

/// Opaque color image under the mask
#[derive(Debug, Clone, PartialEq)]
pub struct CoverImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl CoverImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::BLACK; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Set a pixel (bounds checked, forced opaque)
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba8) {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = color.with_alpha(255);
        }
    }

    /// Blend `color` over a pixel at `opacity`
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, color: Rgba8, opacity: f32) {
        if let Some(dst) = self.get(x, y) {
            self.set(x, y, dst.blend(color, opacity));
        }
    }

    pub fn fill(&mut self, color: Rgba8) {
        self.pixels.fill(color.with_alpha(255));
    }

    /// Linear gradient from the top-left corner to the bottom-right corner
    pub fn fill_diagonal_gradient(&mut self, from: Rgba8, to: Rgba8) {
        let (w, h) = (self.width as f32, self.height as f32);
        let len_sq = w * w + h * h;
        for y in 0..self.height {
            for x in 0..self.width {
                // Project the pixel center onto the (0,0)->(w,h) axis
                let t = ((x as f32 + 0.5) * w + (y as f32 + 0.5) * h) / len_sq;
                self.set(x, y, from.mix(to, t));
            }
        }
    }

    /// Blend a filled circle
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba8, opacity: f32) {
        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = ((center.x + radius).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((center.y + radius).ceil().max(0.0) as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if p.distance_squared(center) <= radius * radius {
                    self.blend(x, y, color, opacity);
                }
            }
        }
    }

    /// Blend bitmap-font text centered on the image
    pub fn draw_text_centered(&mut self, text: &str, scale: u32, color: Rgba8, opacity: f32) {
        let (tw, th) = font::text_size(text, scale);
        let ox = (self.width as i64 - tw as i64) / 2;
        let oy = (self.height as i64 - th as i64) / 2;
        font::for_each_text_pixel(text, scale, |dx, dy| {
            let (x, y) = (ox + dx as i64, oy + dy as i64);
            if x >= 0 && y >= 0 {
                self.blend(x as u32, y as u32, color, opacity);
            }
        });
    }
}

/// Paints the cover image when a surface is created
pub trait CoverPainter {
    fn paint(&self, image: &mut CoverImage);
}

impl<F> CoverPainter for F
where
    F: Fn(&mut CoverImage),
{
    fn paint(&self, image: &mut CoverImage) {
        self(image)
    }
}

/// Default cover: gradient, dots, label
#[derive(Debug, Clone, Default)]
pub struct GradientCover {
    pub style: CoverStyle,
}

impl GradientCover {
    pub fn new(style: CoverStyle) -> Self {
        Self { style }
    }
}

impl CoverPainter for GradientCover {
    fn paint(&self, image: &mut CoverImage) {
        let [from, to] = self.style.gradient;
        image.fill_diagonal_gradient(from, to);

        let mut rng = Pcg32::seed_from_u64(self.style.seed);
        let (w, h) = (image.width() as f32, image.height() as f32);
        for _ in 0..self.style.dot_count {
            let center = Vec2::new(rng.random::<f32>() * w, rng.random::<f32>() * h);
            let radius = rng.random_range(DOT_MIN_RADIUS..DOT_MAX_RADIUS);
            image.fill_circle(center, radius, Rgba8::WHITE, DOT_OPACITY);
        }

        if let Some(label) = self.style.label.as_deref() {
            image.draw_text_centered(label, LABEL_SCALE, Rgba8::WHITE, LABEL_OPACITY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint(style: CoverStyle) -> CoverImage {
        let mut image = CoverImage::new(120, 80);
        GradientCover::new(style).paint(&mut image);
        image
    }

    #[test]
    fn test_same_seed_same_cover() {
        assert_eq!(paint(CoverStyle::default()), paint(CoverStyle::default()));
    }

    #[test]
    fn test_seed_changes_dots() {
        let a = paint(CoverStyle {
            label: None,
            ..Default::default()
        });
        let b = paint(CoverStyle {
            label: None,
            seed: 7,
            ..Default::default()
        });
        assert_ne!(a, b);
    }

    #[test]
    fn test_gradient_endpoints() {
        let style = CoverStyle {
            gradient: [Rgba8::BLACK, Rgba8::WHITE],
            dot_count: 0,
            label: None,
            ..Default::default()
        };
        let image = paint(style);
        let first = image.get(0, 0).unwrap();
        let last = image.get(119, 79).unwrap();
        assert!(first.r < 10);
        assert!(last.r > 245);
    }

    #[test]
    fn test_label_brightens_center() {
        let plain = CoverStyle {
            gradient: [Rgba8::BLACK, Rgba8::BLACK],
            dot_count: 0,
            label: None,
            ..Default::default()
        };
        let labelled = CoverStyle {
            label: Some("XXXX".into()),
            ..plain.clone()
        };
        let lit = |img: &CoverImage| img.pixels().iter().filter(|p| p.r > 0).count();
        assert_eq!(lit(&paint(plain)), 0);
        assert!(lit(&paint(labelled)) > 0);
    }

    #[test]
    fn test_closure_painter_and_opacity() {
        let mut image = CoverImage::new(4, 4);
        let painter = |img: &mut CoverImage| img.fill(Rgba8 { r: 9, g: 9, b: 9, a: 0 });
        painter.paint(&mut image);
        assert!(image.pixels().iter().all(|p| *p == Rgba8::opaque(9, 9, 9)));
    }
}
