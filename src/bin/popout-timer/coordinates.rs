//! Conversions between egui's floating-point coordinates and the whole-pixel
//! coordinates used by the drag positioner.

use eframe::egui;
use popout_timer::{Point, Viewport};

/// Rounds a screen position to whole pixels.
pub fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x.round() as i32, pos.y.round() as i32)
}

pub fn to_pos2(point: Point) -> egui::Pos2 {
    egui::pos2(point.x as f32, point.y as f32)
}

/// Viewport covering the given screen rectangle.
pub fn viewport_of(rect: egui::Rect) -> Viewport {
    Viewport::new(rect.width().floor() as i32, rect.height().floor() as i32)
}
