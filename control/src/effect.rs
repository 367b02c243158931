//! Identity of the five effect knobs.

/// Effect a knob is bound to.
///
/// The key is the value of the knob element's data attribute; the element
/// ids of the two optional companions are derived from it by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    Distortion,
    Chorus,
    Reverb,
    Delay,
    Compressor,
}

impl Effect {
    pub const ALL: [Effect; 5] = [
        Effect::Distortion,
        Effect::Chorus,
        Effect::Reverb,
        Effect::Delay,
        Effect::Compressor,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Distortion => "dist",
            Self::Chorus => "chorus",
            Self::Reverb => "reverb",
            Self::Delay => "delay",
            Self::Compressor => "comp",
        }
    }

    /// Id of the companion element showing the percentage readout.
    #[must_use]
    pub fn percent_display_id(self) -> &'static str {
        match self {
            Self::Distortion => "dist-value",
            Self::Chorus => "chorus-value",
            Self::Reverb => "reverb-value",
            Self::Delay => "delay-value",
            Self::Compressor => "comp-value",
        }
    }

    /// Id of the companion field storing the submitted value.
    #[must_use]
    pub fn stored_field_id(self) -> &'static str {
        match self {
            Self::Distortion => "dist-hidden-input",
            Self::Chorus => "chorus-hidden-input",
            Self::Reverb => "reverb-hidden-input",
            Self::Delay => "delay-hidden-input",
            Self::Compressor => "comp-hidden-input",
        }
    }
}
