//! Alpha mask over the cover
//!
//! One `u8` per cell, row-major. 255 hides the prize, 0 shows it. Erasure is
//! hard-edged: a cell is either inside the brush (set to 0) or untouched, so
//! the cleared count rises exactly with erased area.

use glam::Vec2;

use super::raster::CellRect;
use super::sdf::capsule_contains;
use crate::clamp_coord;
use crate::consts::{ALPHA_CLEARED, ALPHA_COVERED};

/// Result of a single erase operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EraseResult {
    /// Cells that went from covered to cleared in this operation
    pub newly_cleared: usize,
    /// Cells examined (None if the shape missed the buffer)
    pub touched: Option<CellRect>,
}

/// Erasable alpha mask
#[derive(Debug, Clone)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl AlphaMask {
    /// Fully covered mask. Size must be non-zero (checked by settings validation).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![ALPHA_COVERED; width as usize * height as usize],
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

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Alpha at a cell, None when out of bounds
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.alpha[self.index(x, y)])
    }

    /// Raw row-major alpha values
    pub fn as_slice(&self) -> &[u8] {
        &self.alpha
    }

    /// Clamp a point into the buffer's valid cell range
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp_coord(p.x, self.width.saturating_sub(1) as f32),
            clamp_coord(p.y, self.height.saturating_sub(1) as f32),
        )
    }

    /// Exact count of fully cleared cells (full scan)
    pub fn count_cleared(&self) -> usize {
        self.alpha.iter().filter(|&&a| a == ALPHA_CLEARED).count()
    }

    /// Erase a disk of `radius` at `center`
    pub fn erase_disk(&mut self, center: Vec2, radius: f32) -> EraseResult {
        self.erase_capsule(center, center, radius)
    }

    /// Erase every cell within `radius` of segment `a`-`b`
    ///
    /// Endpoints are expected to be clamped already; the bounding box is
    /// clipped regardless so nothing outside the buffer is addressed.
    pub fn erase_capsule(&mut self, a: Vec2, b: Vec2, radius: f32) -> EraseResult {
        let Some(rect) = CellRect::around_segment(a, b, radius, self.width, self.height) else {
            return EraseResult::default();
        };

        let mut newly_cleared = 0;
        for y in rect.y0..rect.y1 {
            let row = y as usize * self.width as usize;
            for x in rect.x0..rect.x1 {
                let cell = &mut self.alpha[row + x as usize];
                if *cell == ALPHA_CLEARED {
                    continue;
                }
                if capsule_contains(Vec2::new(x as f32, y as f32), a, b, radius) {
                    *cell = ALPHA_CLEARED;
                    newly_cleared += 1;
                }
            }
        }

        EraseResult {
            newly_cleared,
            touched: Some(rect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mask_is_opaque() {
        let mask = AlphaMask::new(8, 4);
        assert_eq!(mask.len(), 32);
        assert!(mask.as_slice().iter().all(|&a| a == ALPHA_COVERED));
        assert_eq!(mask.count_cleared(), 0);
        assert_eq!(mask.alpha_at(8, 0), None);
    }

    #[test]
    fn test_erase_disk_counts_cells() {
        let mut mask = AlphaMask::new(20, 20);
        let result = mask.erase_disk(Vec2::new(10.0, 10.0), 1.0);
        // Center plus its four neighbours
        assert_eq!(result.newly_cleared, 5);
        assert_eq!(mask.count_cleared(), 5);
        assert_eq!(mask.alpha_at(10, 10), Some(ALPHA_CLEARED));
        assert_eq!(mask.alpha_at(11, 11), Some(ALPHA_COVERED));
    }

    #[test]
    fn test_erase_twice_does_not_double_count() {
        let mut mask = AlphaMask::new(50, 50);
        let first = mask.erase_disk(Vec2::new(25.0, 25.0), 6.0);
        let second = mask.erase_disk(Vec2::new(25.0, 25.0), 6.0);
        assert!(first.newly_cleared > 0);
        assert_eq!(second.newly_cleared, 0);
        assert_eq!(mask.count_cleared(), first.newly_cleared);
    }

    #[test]
    fn test_capsule_has_no_gaps() {
        let mut mask = AlphaMask::new(101, 20);
        mask.erase_capsule(Vec2::ZERO, Vec2::new(100.0, 0.0), 10.0);
        for y in 0..20 {
            for x in 0..=100 {
                let inside = (y as f32) <= 10.0;
                let alpha = mask.alpha_at(x, y).unwrap();
                assert_eq!(alpha == ALPHA_CLEARED, inside, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_long_diagonal_capsule_matches_integer_reference() {
        let (ax, ay, bx, by, r) = (0i64, 0i64, 3000i64, 4000i64, 25i64);
        let mut mask = AlphaMask::new(3100, 4100);
        let result = mask.erase_capsule(
            Vec2::new(ax as f32, ay as f32),
            Vec2::new(bx as f32, by as f32),
            r as f32,
        );

        let (abx, aby) = (bx - ax, by - ay);
        let len_sq = abx * abx + aby * aby;
        let inside = |x: i64, y: i64| {
            let (apx, apy) = (x - ax, y - ay);
            let dot = apx * abx + apy * aby;
            if dot <= 0 {
                apx * apx + apy * apy <= r * r
            } else if dot >= len_sq {
                let (bpx, bpy) = (x - bx, y - by);
                bpx * bpx + bpy * bpy <= r * r
            } else {
                let cross = abx * apy - aby * apx;
                (cross as i128) * (cross as i128) <= (r * r * len_sq) as i128
            }
        };

        let mut expected = 0;
        let (mut missed, mut extra) = (0, 0);
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                let want = inside(x as i64, y as i64);
                let got = mask.alpha_at(x, y) == Some(ALPHA_CLEARED);
                expected += want as usize;
                missed += (want && !got) as usize;
                extra += (got && !want) as usize;
            }
        }
        assert_eq!((missed, extra), (0, 0));
        assert_eq!(result.newly_cleared, expected);
    }

    #[test]
    fn test_clamp_point() {
        let mask = AlphaMask::new(100, 50);
        assert_eq!(mask.clamp_point(Vec2::new(-5.0, 80.0)), Vec2::new(0.0, 49.0));
        assert_eq!(mask.clamp_point(Vec2::new(f32::NAN, 3.0)), Vec2::new(0.0, 3.0));
    }
}
