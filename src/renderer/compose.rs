//! Cover + mask compositing into presentable RGBA frames

use super::cover::CoverImage;
use super::pixel::Rgba8;
use crate::mask::{AlphaMask, CellRect};

/// Composite the whole surface (straight alpha, row-major)
pub fn compose(cover: &CoverImage, mask: &AlphaMask) -> Vec<Rgba8> {
    compose_region(cover, mask, CellRect::full(mask.width(), mask.height()))
}

/// Composite a sub-rectangle, row-major within the rectangle
///
/// The rectangle is clipped to the surface first.
pub fn compose_region(cover: &CoverImage, mask: &AlphaMask, rect: CellRect) -> Vec<Rgba8> {
    debug_assert_eq!(cover.width(), mask.width());
    debug_assert_eq!(cover.height(), mask.height());

    let rect = CellRect::new(
        rect.x0.min(mask.width()),
        rect.y0.min(mask.height()),
        rect.x1.min(mask.width()),
        rect.y1.min(mask.height()),
    );

    let width = mask.width() as usize;
    let alpha = mask.as_slice();
    let pixels = cover.pixels();

    let mut out = Vec::with_capacity(rect.area());
    for y in rect.y0..rect.y1 {
        let row = y as usize * width;
        for x in rect.x0..rect.x1 {
            let i = row + x as usize;
            out.push(pixels[i].with_alpha(alpha[i]));
        }
    }
    out
}
