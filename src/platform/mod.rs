//! Platform abstraction layer
//!
//! Browser pointer events report client (CSS) coordinates; the surface works
//! in its own backing-pixel space. The host converts with `client_to_local`
//! before forwarding strokes.

use glam::Vec2;

/// Convert a client-space pointer position into surface pixels
///
/// `rect_origin`/`rect_size` are the element's bounding client rect. When the
/// element is displayed at a different CSS size than its backing size, the
/// offset is rescaled. A degenerate rect falls back to the raw offset.
pub fn client_to_local(client: Vec2, rect_origin: Vec2, rect_size: Vec2, surface_size: Vec2) -> Vec2 {
    let offset = client - rect_origin;
    let scale = Vec2::new(
        axis_scale(rect_size.x, surface_size.x),
        axis_scale(rect_size.y, surface_size.y),
    );
    offset * scale
}

fn axis_scale(css: f32, backing: f32) -> f32 {
    if css > 0.0 && backing > 0.0 && css.is_finite() {
        backing / css
    } else {
        1.0
    }
}
