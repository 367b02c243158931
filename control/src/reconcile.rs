//! Interpretation of knob values into effect chain attributes.

use stompbox_dsp::processor::Attributes;

// 30 dB of drive takes the waveshaper from clean into full saturation.
const DRIVE_DB_RANGE: (f32, f32) = (0.0, 30.0);

const CHORUS_RATE_HZ: f32 = 1.5;

const DELAY_RANGE_IN_SECONDS: (f32, f32) = (0.0, 1.0);
const DELAY_FEEDBACK: f32 = 0.3;

const COMPRESSOR_THRESHOLD_DB: f32 = -20.0;
const COMPRESSOR_RATIO_RANGE: (f32, f32) = (1.0, 5.0);

/// Current normalized value of every knob.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Values {
    pub distortion: f32,
    pub chorus: f32,
    pub reverb: f32,
    pub delay: f32,
    pub compressor: f32,
}

/// Translate knob values into the chain's attributes.
///
/// A knob resting at zero disables its effect; anything above scales
/// linearly into the effect's working range.
#[must_use]
pub fn cook_dsp_attributes(values: Values) -> Attributes {
    Attributes {
        distortion_enabled: values.distortion > 0.0,
        drive_db: scale(values.distortion, DRIVE_DB_RANGE),
        chorus_enabled: values.chorus > 0.0,
        chorus_rate_hz: CHORUS_RATE_HZ,
        chorus_depth: values.chorus.clamp(0.0, 1.0),
        reverb_enabled: values.reverb > 0.0,
        reverb_size: values.reverb.clamp(0.0, 1.0),
        delay_enabled: values.delay > 0.0,
        delay_seconds: scale(values.delay, DELAY_RANGE_IN_SECONDS),
        delay_feedback: DELAY_FEEDBACK,
        compressor_enabled: values.compressor > 0.0,
        compressor_threshold_db: COMPRESSOR_THRESHOLD_DB,
        compressor_ratio: scale(values.compressor, COMPRESSOR_RATIO_RANGE),
    }
}

fn scale(value: f32, range: (f32, f32)) -> f32 {
    range.0 + value.clamp(0.0, 1.0) * (range.1 - range.0)
}
