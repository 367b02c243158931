//! Formatting of reaction strings for the page contract.

use core::fmt::Write;

use heapless::String;

/// CSS-style transform, up to `rotate(-134.99998deg)`.
pub type Transform = String<32>;

/// Percentage label or two-decimal value, up to `100%`.
pub type Label = String<8>;

#[must_use]
pub fn rotation_transform(angle: f32) -> Transform {
    let mut transform = Transform::new();
    // The capacity covers the longest printout of a clamped angle.
    let _ = write!(transform, "rotate({angle}deg)");
    transform
}

#[must_use]
pub fn percent_label(percentage: u8) -> Label {
    let mut label = Label::new();
    let _ = write!(label, "{percentage}%");
    label
}

/// The submitted form of a normalized value, always two fraction digits.
#[must_use]
pub fn value_string(value: f32) -> Label {
    let mut string = Label::new();
    let _ = write!(string, "{value:.2}");
    string
}
