//! Pointer abstraction tracking its state over time.

use crate::geometry::Point;
use crate::input::button::Button;
use crate::input::snapshot::Snapshot;

/// Current pointer position and button edges.
///
/// Note that despite its attributes being public, they should be only read
/// from; updates go through `update`.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pointer {
    pub position: Point,
    pub button: Button,
}

impl Pointer {
    pub fn update(&mut self, snapshot: Snapshot) {
        self.position = snapshot.position;
        self.button.update(snapshot.button);
    }
}
