//! Screen-space geometry shared by the pointer and mounted knobs.

use libm::atan2f;

/// Position in page coordinates, y growing downwards.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Bounding rectangle of a knob element.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Angle of the pointer relative to a center, in degrees within
/// (-180, 180]. Zero points right, positive angles go clockwise since y
/// grows downwards.
#[must_use]
pub fn pointer_angle(center: Point, pointer: Point) -> f32 {
    atan2f(pointer.y - center.y, pointer.x - center.x).to_degrees()
}
