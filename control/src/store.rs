//! The main store of knob state and page bindings.

use heapless::Vec;
use stompbox_dsp::processor::Attributes as DSPAttributes;

use crate::binding::Binding;
use crate::display;
use crate::effect::Effect;
use crate::geometry::pointer_angle;
use crate::input::pointer::Pointer;
use crate::input::snapshot::Snapshot;
use crate::knob::Knob;
use crate::log;
use crate::output::{Cursor, KnobReaction, Reaction};
use crate::reconcile::{self, Values};

/// The central piece of the control package.
///
/// The store takes pointer snapshots on its input, dispatches them to the
/// mounted knobs, and produces reactions for the page together with cooked
/// attributes for the effect chain. Global pointer movement is routed
/// explicitly to the knobs whose drag is active, never to the others.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pointer: Pointer,
    knobs: Vec<Mounted, 5>,
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Mounted {
    effect: Effect,
    binding: Binding,
    knob: Knob,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a knob for an effect.
    ///
    /// Mounting an already mounted effect replaces its binding and resets
    /// the knob to the left stop.
    pub fn mount(&mut self, effect: Effect, binding: Binding) {
        let mounted = Mounted {
            effect,
            binding,
            knob: Knob::new(),
        };
        if let Some(slot) = self.knobs.iter_mut().find(|m| m.effect == effect) {
            *slot = mounted;
        } else {
            self.knobs
                .push(mounted)
                .expect("There is one slot per effect.");
        }
    }

    /// Apply the initial update to every mounted knob.
    ///
    /// Each knob starts at the left stop, so the stored value comes out as
    /// "0.00" regardless of what the page field held before.
    pub fn initialize(&mut self) -> Reaction {
        let mut reaction = Reaction::default();
        for mounted in self.knobs.iter_mut() {
            mounted.knob.rotate_to(crate::knob::MIN_ANGLE);
            push_update(&mut reaction, mounted);
        }
        reaction
    }

    /// Process one pointer snapshot.
    ///
    /// The down edge starts a drag on every knob under the pointer, a held
    /// button rotates the dragging knobs after the pointer, and the up edge
    /// ends every drag no matter where the pointer is.
    pub fn apply_input_snapshot(&mut self, snapshot: Snapshot) -> Reaction {
        self.pointer.update(snapshot);

        let mut reaction = Reaction::default();

        if self.pointer.button.clicked {
            for mounted in self
                .knobs
                .iter_mut()
                .filter(|m| m.binding.rect.contains(snapshot.position))
            {
                let angle = pointer_angle(mounted.binding.rect.center(), snapshot.position);
                mounted.knob.begin_drag(angle);
                reaction.prevent_default = true;
                log::info!("Drag started");
            }
        } else if self.pointer.button.released {
            for mounted in self.knobs.iter_mut().filter(|m| m.knob.is_dragging()) {
                mounted.knob.end_drag();
                log::info!("Drag ended");
            }
        } else if self.pointer.button.pressed {
            for mounted in self.knobs.iter_mut().filter(|m| m.knob.is_dragging()) {
                let angle = pointer_angle(mounted.binding.rect.center(), snapshot.position);
                mounted.knob.drag_to(angle);
                push_update(&mut reaction, mounted);
            }
        }

        reaction.cursor = if self.knobs.iter().any(|m| m.knob.is_dragging()) {
            Cursor::Grabbing
        } else {
            Cursor::Pointer
        };
        log::debug!("Reaction carries {} updates", reaction.updates.len());
        reaction
    }

    /// Cook the chain attributes from the current knob values.
    #[must_use]
    pub fn build_dsp_attributes(&self) -> DSPAttributes {
        reconcile::cook_dsp_attributes(self.values())
    }

    fn values(&self) -> Values {
        let mut values = Values::default();
        for mounted in &self.knobs {
            let value = mounted.knob.value();
            match mounted.effect {
                Effect::Distortion => values.distortion = value,
                Effect::Chorus => values.chorus = value,
                Effect::Reverb => values.reverb = value,
                Effect::Delay => values.delay = value,
                Effect::Compressor => values.compressor = value,
            }
        }
        values
    }
}

fn push_update(reaction: &mut Reaction, mounted: &Mounted) {
    let knob = &mounted.knob;
    let binding = &mounted.binding;
    let update = KnobReaction {
        effect: mounted.effect,
        rotation: knob.angle(),
        transform: display::rotation_transform(knob.angle()),
        percent_label: binding
            .has_percent_display
            .then(|| display::percent_label(knob.percentage())),
        stored_value: binding
            .has_stored_field
            .then(|| display::value_string(knob.value())),
        data_value: display::value_string(knob.value()),
    };
    reaction
        .updates
        .push(update)
        .expect("There is one update slot per effect.");
}
