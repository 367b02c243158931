//! Components of the knob control surface, passing pointer input to the
//! effect chain and display reactions back.
//!
//! The embedding layer owns the event loop and the page elements. It mounts
//! one knob per effect, then feeds pointer snapshots in and carries the
//! produced reactions out:
//!
//! ```text
//!   [ Pointer events ]
//!          |
//!      (Snapshot)
//!          V
//!      [ Store ] --(Attributes)--> [ Effect chain ]
//!          |
//!      (Reaction)
//!          V
//!   [ Rotation, percentage labels, stored values ]
//! ```

#![allow(clippy::items_after_statements)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod binding;
pub mod display;
pub mod effect;
pub mod geometry;
pub mod input;
pub mod knob;
mod log;
pub mod output;
pub mod reconcile;
pub mod store;
