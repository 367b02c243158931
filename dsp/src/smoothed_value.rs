//! Exponential lag over attribute changes.
//!
//! Attributes arrive in control-rate steps. Running them through this lag
//! before they reach the audio path avoids zipper noise on every knob turn.

use libm::expf;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmoothedValue {
    current: f32,
    target: f32,
    coefficient: f32,
}

impl SmoothedValue {
    #[must_use]
    pub fn new(value: f32, sample_rate: f32, lag_in_seconds: f32) -> Self {
        assert!(sample_rate > 0.0);
        assert!(lag_in_seconds > 0.0);
        Self {
            current: value,
            target: value,
            coefficient: expf(-1.0 / (sample_rate * lag_in_seconds)),
        }
    }

    pub fn set(&mut self, target: f32) {
        self.target = target;
    }

    pub fn next(&mut self) -> f32 {
        self.current = self.target + (self.current - self.target) * self.coefficient;
        self.current
    }

    pub fn value(&self) -> f32 {
        self.current
    }
}
