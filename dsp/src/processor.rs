//! Main interface of the effect chain.

use core::fmt;

use crate::chorus::{Attributes as ChorusAttributes, Chorus};
use crate::compressor::{Attributes as CompressorAttributes, Compressor};
use crate::distortion::{Attributes as DistortionAttributes, Distortion};
use crate::echo::{Attributes as EchoAttributes, Echo};
use crate::reverb::{Attributes as ReverbAttributes, Reverb};

/// Serial chain of the five effects.
///
/// Stages whose defining attribute sits at zero are flagged as disabled
/// and skipped entirely, so an untouched knob leaves the signal alone.
pub struct Processor {
    distortion: Distortion,
    chorus: Chorus,
    reverb: Reverb,
    echo: Echo,
    compressor: Compressor,
    attributes: Attributes,
}

/// Interpreted attributes of the whole chain.
///
/// This is the structure cooked by the control package from the current
/// knob values.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attributes {
    pub distortion_enabled: bool,
    pub drive_db: f32,
    pub chorus_enabled: bool,
    pub chorus_rate_hz: f32,
    pub chorus_depth: f32,
    pub reverb_enabled: bool,
    pub reverb_size: f32,
    pub delay_enabled: bool,
    pub delay_seconds: f32,
    pub delay_feedback: f32,
    pub compressor_enabled: bool,
    pub compressor_threshold_db: f32,
    pub compressor_ratio: f32,
}

impl fmt::Debug for Processor {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Processor({:?})", self.attributes)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Processor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Processor({})", self.attributes);
    }
}

impl Processor {
    #[must_use]
    pub fn new(sample_rate: f32) -> Self {
        let mut processor = Self {
            distortion: Distortion::new(),
            chorus: Chorus::new(sample_rate),
            reverb: Reverb::new(sample_rate),
            echo: Echo::new(sample_rate),
            compressor: Compressor::new(sample_rate),
            attributes: Attributes::default(),
        };
        processor.set_attributes(Attributes::default());
        processor
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.distortion.set_attributes(DistortionAttributes {
            drive_db: attributes.drive_db,
        });
        self.chorus.set_attributes(ChorusAttributes {
            rate_hz: attributes.chorus_rate_hz,
            depth: attributes.chorus_depth,
        });
        self.reverb.set_attributes(ReverbAttributes {
            size: attributes.reverb_size,
        });
        self.echo.set_attributes(EchoAttributes {
            time_in_seconds: attributes.delay_seconds,
            feedback: attributes.delay_feedback,
        });
        self.compressor.set_attributes(CompressorAttributes {
            threshold_db: attributes.compressor_threshold_db,
            ratio: attributes.compressor_ratio,
        });
        self.attributes = attributes;
    }

    pub fn process(&mut self, block: &mut [f32]) {
        if self.attributes.distortion_enabled {
            self.distortion.process(block);
        }
        if self.attributes.chorus_enabled {
            self.chorus.process(block);
        }
        if self.attributes.reverb_enabled {
            self.reverb.process(block);
        }
        if self.attributes.delay_enabled {
            self.echo.process(block);
        }
        if self.attributes.compressor_enabled {
            self.compressor.process(block);
        }
    }
}
