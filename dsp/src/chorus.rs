//! Modulated short delay stage.

use core::fmt;

use crate::delay_line::DelayLine;
use crate::oscillator::Oscillator;

const CENTRE_DELAY_IN_SECONDS: f32 = 0.007;
const MIX: f32 = 0.5;

/// Chorus built from a single fractional tap swept by a sine LFO.
///
/// The tap oscillates around the centre delay, detuning the wet copy
/// against the dry signal. Depth 0 degenerates into a plain slapback.
pub struct Chorus {
    sample_rate: f32,
    delay_line: DelayLine,
    lfo: Oscillator,
    depth: f32,
}

#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attributes {
    pub rate_hz: f32,
    pub depth: f32,
}

impl fmt::Debug for Chorus {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Chorus(depth: {})", self.depth)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Chorus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Chorus(depth: {})", self.depth);
    }
}

impl Chorus {
    #[must_use]
    pub fn new(sample_rate: f32) -> Self {
        assert!(sample_rate > 0.0);
        let length = (sample_rate * CENTRE_DELAY_IN_SECONDS * 2.0) as usize + 2;
        Self {
            sample_rate,
            delay_line: DelayLine::new(length),
            lfo: Oscillator::new(sample_rate),
            depth: 0.0,
        }
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.lfo.set_frequency(attributes.rate_hz);
        self.depth = attributes.depth.clamp(0.0, 1.0);
    }

    pub fn process(&mut self, block: &mut [f32]) {
        let centre = CENTRE_DELAY_IN_SECONDS * self.sample_rate;
        for x in block.iter_mut() {
            let modulation = self.lfo.tick() * self.depth;
            let delay = (centre * (1.0 + modulation) - 1.0).max(0.0);
            let wet = self.delay_line.tap_fractional(delay);
            self.delay_line.write(*x);
            *x = *x * (1.0 - MIX) + wet * MIX;
        }
    }
}
