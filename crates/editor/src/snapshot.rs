//! Immutable capture of the externally-owned event for change detection.

use maneuver_core::vector::Vector3;
use maneuver_plan::ManeuverEvent;

/// Last-observed state of the engine-owned event. Compared by exact field
/// equality against the live event each tick; any difference means the
/// engine mutated the event behind the editor's back.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventSnapshot {
    pub delta_v: Vector3,
    pub ut: f64,
}

impl EventSnapshot {
    pub fn of(event: &ManeuverEvent) -> Self {
        EventSnapshot {
            delta_v: event.delta_v,
            ut: event.ut,
        }
    }
}
