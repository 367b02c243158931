//! Structures used to pass the current state of the pointer device.

use crate::geometry::Point;

/// The raw state of the pointer.
///
/// `Snapshot` is meant to be passed from the embedding layer to the control
/// package once per input event or frame. It carries raw data: coordinates
/// in the same space as the mounted knob rectangles, and the plain primary
/// button state. Edge detection happens inside the control package.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub position: Point,
    pub button: bool,
}
