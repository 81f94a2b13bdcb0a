//! Integer cell rectangles used for stroke bounds and dirty tracking

use glam::Vec2;

/// Half-open cell rectangle `[x0, x1) x [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl CellRect {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The whole `width x height` buffer
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Cells whose integer coordinates may lie within `radius` of segment `a`-`b`,
    /// clipped to a `width x height` buffer. Returns None if nothing is left.
    pub fn around_segment(a: Vec2, b: Vec2, radius: f32, width: u32, height: u32) -> Option<Self> {
        let min = a.min(b) - Vec2::splat(radius);
        let max = a.max(b) + Vec2::splat(radius);

        let lo = |v: f32| v.ceil().max(0.0) as u32;
        // Inclusive upper cell, then +1 for the half-open bound
        let hi = |v: f32, limit: u32| (v.floor().max(-1.0) as i64 + 1).clamp(0, limit as i64) as u32;

        let rect = Self::new(lo(min.x), lo(min.y), hi(max.x, width), hi(max.y, height));
        (!rect.is_empty()).then_some(rect)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_around_segment_interior() {
        let rect =
            CellRect::around_segment(Vec2::new(50.0, 50.0), Vec2::new(60.0, 50.0), 5.0, 100, 100)
                .unwrap();
        assert_eq!(rect, CellRect::new(45, 45, 66, 56));
    }

    #[test]
    fn test_around_segment_clips_to_buffer() {
        let rect = CellRect::around_segment(Vec2::ZERO, Vec2::ZERO, 25.0, 100, 100).unwrap();
        assert_eq!(rect, CellRect::new(0, 0, 26, 26));

        let rect =
            CellRect::around_segment(Vec2::new(99.0, 99.0), Vec2::new(99.0, 99.0), 25.0, 100, 100)
                .unwrap();
        assert_eq!(rect, CellRect::new(74, 74, 100, 100));
    }

    #[test]
    fn test_around_segment_fully_outside() {
        let far = Vec2::new(-500.0, -500.0);
        assert!(CellRect::around_segment(far, far, 10.0, 100, 100).is_none());
    }

    #[test]
    fn test_union_and_area() {
        let a = CellRect::new(0, 0, 10, 10);
        let b = CellRect::new(5, 20, 15, 30);
        let u = a.union(&b);
        assert_eq!(u, CellRect::new(0, 0, 15, 30));
        assert_eq!(u.area(), 450);
        assert!(u.contains(14, 29));
        assert!(!u.contains(15, 29));
    }
}
