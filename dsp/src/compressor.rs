//! Dynamic range compressor stage.

use libm::{expf, fabsf, log10f, powf};

const ATTACK_IN_SECONDS: f32 = 0.005;
const RELEASE_IN_SECONDS: f32 = 0.1;
const SILENCE_FLOOR: f32 = 1.0e-6;

/// Feed-forward compressor with a dB-domain gain computer.
///
/// The level envelope follows attacks fast and releases slowly. Signal
/// above the threshold is scaled down by the configured ratio.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Compressor {
    envelope_db: f32,
    alpha_attack: f32,
    alpha_release: f32,
    threshold_db: f32,
    slope: f32,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attributes {
    pub threshold_db: f32,
    pub ratio: f32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            threshold_db: 0.0,
            ratio: 1.0,
        }
    }
}

impl Compressor {
    #[must_use]
    pub fn new(sample_rate: f32) -> Self {
        assert!(sample_rate > 0.0);
        Self {
            envelope_db: 20.0 * log10f(SILENCE_FLOOR),
            alpha_attack: expf(-1.0 / (sample_rate * ATTACK_IN_SECONDS)),
            alpha_release: expf(-1.0 / (sample_rate * RELEASE_IN_SECONDS)),
            threshold_db: 0.0,
            slope: 0.0,
        }
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        let ratio = attributes.ratio.max(1.0);
        self.threshold_db = attributes.threshold_db;
        self.slope = 1.0 / ratio - 1.0;
    }

    pub fn process(&mut self, block: &mut [f32]) {
        for x in block.iter_mut() {
            let level = fabsf(*x).max(SILENCE_FLOOR);
            let level_db = 20.0 * log10f(level);

            let alpha = if level_db > self.envelope_db {
                self.alpha_attack
            } else {
                self.alpha_release
            };
            self.envelope_db = alpha * self.envelope_db + (1.0 - alpha) * level_db;

            let overshoot_db = (self.envelope_db - self.threshold_db).max(0.0);
            let gain = powf(10.0, overshoot_db * self.slope / 20.0);

            *x *= gain;
        }
    }
}
