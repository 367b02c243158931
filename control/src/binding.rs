//! Structural binding of a knob to its page elements.

use crate::geometry::Rect;

/// Where a knob sits on the page and which companion outputs exist for it.
///
/// The embedding layer resolves its elements once at startup and states
/// what it found. Either companion may be absent; the corresponding
/// reaction output is then skipped rather than failing.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binding {
    pub rect: Rect,
    pub has_percent_display: bool,
    pub has_stored_field: bool,
}
