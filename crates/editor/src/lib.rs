//! Buffered maneuver editing: per-field tolerant text buffers, snapshots of
//! the externally-owned event, and the per-tick reconciliation manager.

pub mod field;
pub mod increment;
pub mod manager;
pub mod snapshot;

pub use field::FieldBuffer;
pub use increment::IncrementStep;
pub use manager::{Field, Manager, TickState};
pub use snapshot::EventSnapshot;
