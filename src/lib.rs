//! Precise Maneuver: interactive editing of planned trajectory-change events
//! that a separate orbit-simulation engine owns and may mutate concurrently.
//!
//! The library arbitrates between a locally buffered, partially typed edit
//! and the engine's authoritative event record, and derives orbital-geometry
//! quantities (ejection angle, node-crossing times, merged burn vectors)
//! from engine-supplied trajectory segments. Rendering, input capture, and
//! propagation itself stay with the host.

pub mod session;

pub use maneuver_config as config;
pub use maneuver_core::{angles, constants, time, units, vector};
pub use maneuver_editor as editor;
pub use maneuver_orbits as orbits;
pub use maneuver_plan as plan;
pub use maneuver_store as store;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
