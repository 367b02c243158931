//! Structures reflecting knob updates back to the page.

use heapless::Vec;

use crate::display::{Label, Transform};
use crate::effect::Effect;

/// Everything the page has to change for one knob.
///
/// The optional outputs are `None` when the knob has no such companion
/// bound; the mirrored data value is carried by the knob element itself
/// and thus always present.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KnobReaction {
    pub effect: Effect,
    pub rotation: f32,
    pub transform: Transform,
    pub percent_label: Option<Label>,
    pub stored_value: Option<Label>,
    pub data_value: Label,
}

/// Pointer affordance the page should show.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cursor {
    #[default]
    Pointer,
    Grabbing,
}

/// Response of the control store to one input snapshot.
///
/// `prevent_default` is set when the down edge landed on a knob; the page
/// should then suppress the event's default action, so the drag does not
/// select text.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reaction {
    pub updates: Vec<KnobReaction, 5>,
    pub cursor: Cursor,
    pub prevent_default: bool,
}
