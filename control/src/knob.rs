//! Rotation state machine of a single knob.

#[allow(unused_imports)]
use micromath::F32Ext;

pub const MIN_ANGLE: f32 = -135.0;
pub const MAX_ANGLE: f32 = 135.0;
const ANGLE_RANGE: f32 = MAX_ANGLE - MIN_ANGLE;

/// Rotation state of one knob.
///
/// The angle is kept within the sweep at all times; the normalized value
/// and the integer percentage are derived from it on demand, so they can
/// never go stale. While a drag is active, the offset between the pointer
/// and the knob captured at the grab stays fixed, making the knob follow
/// relative pointer movement instead of snapping under the cursor.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Knob {
    angle: f32,
    dragging: bool,
    drag_offset: f32,
}

impl Default for Knob {
    fn default() -> Self {
        Self::new()
    }
}

impl Knob {
    #[must_use]
    pub fn new() -> Self {
        Self {
            angle: MIN_ANGLE,
            dragging: false,
            drag_offset: 0.0,
        }
    }

    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Normalized position within the sweep, 0.0 at the left stop.
    #[must_use]
    pub fn value(&self) -> f32 {
        (self.angle - MIN_ANGLE) / ANGLE_RANGE
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        (self.value() * 100.0).round() as u8
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn rotate_to(&mut self, angle: f32) {
        self.angle = angle.clamp(MIN_ANGLE, MAX_ANGLE);
    }

    pub fn begin_drag(&mut self, pointer_angle: f32) {
        self.dragging = true;
        self.drag_offset = pointer_angle - self.angle;
    }

    pub fn drag_to(&mut self, pointer_angle: f32) {
        if !self.dragging {
            return;
        }
        let raw = pointer_angle - self.drag_offset;
        self.rotate_to(continuous(self.angle, raw));
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

/// Step `raw` over the branch cut of the pointer angle.
///
/// The pointer angle flips between 180 and -180 when the pointer crosses
/// the horizontal on the left side of the knob. A raw angle further than a
/// half turn from the current one is such a flip, not an actual jump.
fn continuous(current: f32, raw: f32) -> f32 {
    let difference = raw - current;
    if difference > 180.0 {
        raw - 360.0
    } else if difference < -180.0 {
        raw + 360.0
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn when_created_it_rests_at_the_left_stop() {
        let knob = Knob::new();
        assert_relative_eq!(knob.angle(), -135.0);
        assert_relative_eq!(knob.value(), 0.0);
        assert_eq!(knob.percentage(), 0);
        assert!(!knob.is_dragging());
    }

    #[test]
    fn when_rotated_to_the_stops_the_value_hits_its_bounds() {
        let mut knob = Knob::new();

        knob.rotate_to(-135.0);
        assert_relative_eq!(knob.value(), 0.0);

        knob.rotate_to(0.0);
        assert_relative_eq!(knob.value(), 0.5);

        knob.rotate_to(135.0);
        assert_relative_eq!(knob.value(), 1.0);
    }

    #[test]
    fn when_rotated_past_the_stops_the_angle_is_clamped() {
        let mut knob = Knob::new();

        knob.rotate_to(500.0);
        assert_relative_eq!(knob.angle(), 135.0);

        knob.rotate_to(-500.0);
        assert_relative_eq!(knob.angle(), -135.0);
    }

    #[test]
    fn when_rotated_twice_to_the_same_angle_the_outputs_do_not_change() {
        let mut knob = Knob::new();

        knob.rotate_to(47.3);
        let angle = knob.angle();
        let value = knob.value();
        let percentage = knob.percentage();

        knob.rotate_to(47.3);
        assert_relative_eq!(knob.angle(), angle);
        assert_relative_eq!(knob.value(), value);
        assert_eq!(knob.percentage(), percentage);
    }

    #[test]
    fn when_dragged_the_knob_follows_relative_pointer_movement() {
        let mut knob = Knob::new();
        knob.rotate_to(45.0);

        knob.begin_drag(45.0);
        knob.drag_to(90.0);

        assert_relative_eq!(knob.angle(), 90.0);
    }

    #[test]
    fn when_dragged_far_the_rotation_stops_at_the_sweep_end() {
        let mut knob = Knob::new();
        knob.rotate_to(45.0);

        knob.begin_drag(45.0);
        knob.drag_to(170.0);

        assert_relative_eq!(knob.angle(), 135.0);
    }

    #[test]
    fn when_the_grab_point_is_away_from_the_knob_angle_the_offset_is_kept() {
        let mut knob = Knob::new();

        knob.begin_drag(45.0);
        knob.drag_to(55.0);

        assert_relative_eq!(knob.angle(), -125.0);
    }

    #[test]
    fn when_not_dragging_a_move_changes_nothing() {
        let mut knob = Knob::new();
        knob.rotate_to(10.0);

        knob.drag_to(90.0);
        assert_relative_eq!(knob.angle(), 10.0);

        knob.begin_drag(0.0);
        knob.end_drag();
        knob.drag_to(90.0);
        assert_relative_eq!(knob.angle(), 10.0);
    }

    #[test]
    fn when_the_raw_angle_crosses_the_branch_cut_it_is_stepped_over() {
        assert_relative_eq!(continuous(170.0, -170.0), 190.0);
        assert_relative_eq!(continuous(-170.0, 170.0), -190.0);
        assert_relative_eq!(continuous(100.0, 120.0), 120.0);
        assert_relative_eq!(continuous(-10.0, 170.0), 170.0);
    }

    proptest! {
        #[test]
        fn any_rotation_lands_within_the_sweep(angle in -1.0e4f32..1.0e4) {
            let mut knob = Knob::new();
            knob.rotate_to(angle);
            prop_assert!(knob.angle() >= MIN_ANGLE);
            prop_assert!(knob.angle() <= MAX_ANGLE);
        }

        #[test]
        fn any_angle_maps_to_a_normalized_value(angle in -1.0e4f32..1.0e4) {
            let mut knob = Knob::new();
            knob.rotate_to(angle);
            prop_assert!(knob.value() >= 0.0);
            prop_assert!(knob.value() <= 1.0);
            prop_assert!(knob.percentage() <= 100);
        }

        #[test]
        fn the_percentage_always_rounds_the_value(angle in -135.0f32..135.0) {
            let mut knob = Knob::new();
            knob.rotate_to(angle);
            prop_assert_eq!(knob.percentage(), (knob.value() * 100.0).round() as u8);
        }
    }
}
