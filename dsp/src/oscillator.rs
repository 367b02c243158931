//! Low frequency sine oscillator modulating delay taps.

use core::f32::consts::PI;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Oscillator {
    sample_rate: f32,
    frequency: f32,
    phase: f32,
}

impl Oscillator {
    #[must_use]
    pub fn new(sample_rate: f32) -> Self {
        assert!(sample_rate > 0.0);
        Self {
            sample_rate,
            frequency: 0.0,
            phase: 0.0,
        }
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn tick(&mut self) -> f32 {
        let value = libm::sinf(self.phase * 2.0 * PI);

        self.phase += self.frequency / self.sample_rate;
        while self.phase > 1.0 {
            self.phase -= 1.0;
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_frequency_is_zero_it_stays_silent() {
        let mut oscillator = Oscillator::new(100.0);
        for _ in 0..10 {
            assert_relative_eq!(oscillator.tick(), 0.0);
        }
    }

    #[test]
    fn when_ticked_it_traces_a_sine_period() {
        let mut oscillator = Oscillator::new(8.0);
        oscillator.set_frequency(1.0);

        assert_relative_eq!(oscillator.tick(), 0.0, epsilon = 1e-5);
        assert_relative_eq!(oscillator.tick(), 0.70710677, epsilon = 1e-5);
        assert_relative_eq!(oscillator.tick(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(oscillator.tick(), 0.70710677, epsilon = 1e-5);
        assert_relative_eq!(oscillator.tick(), 0.0, epsilon = 1e-5);
        assert_relative_eq!(oscillator.tick(), -0.70710677, epsilon = 1e-5);
        assert_relative_eq!(oscillator.tick(), -1.0, epsilon = 1e-5);
    }

    #[test]
    fn when_ticked_past_a_period_its_phase_wraps() {
        let mut oscillator = Oscillator::new(8.0);
        oscillator.set_frequency(1.0);

        let mut first_period = [0.0; 8];
        for x in first_period.iter_mut() {
            *x = oscillator.tick();
        }
        for x in first_period {
            assert_relative_eq!(oscillator.tick(), x, epsilon = 1e-4);
        }
    }
}
