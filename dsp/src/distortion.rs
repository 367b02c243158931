//! Saturating waveshaper stage.

use libm::{powf, tanhf};

/// Hyperbolic tangent drive.
///
/// The input is boosted by the configured amount and passed through tanh,
/// which keeps the output within (-1, 1) no matter the drive.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Distortion {
    pre_gain: f32,
}

#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attributes {
    pub drive_db: f32,
}

impl Default for Distortion {
    fn default() -> Self {
        Self::new()
    }
}

impl Distortion {
    #[must_use]
    pub fn new() -> Self {
        Self { pre_gain: 1.0 }
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.pre_gain = powf(10.0, attributes.drive_db / 20.0);
    }

    pub fn process(&mut self, block: &mut [f32]) {
        for x in block.iter_mut() {
            *x = tanhf(*x * self.pre_gain);
        }
    }
}
