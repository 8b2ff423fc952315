//! Tick-driven session over the engine-owned plan.
//!
//! The host calls [`Session::tick`] once per simulation update and once per
//! redraw; both sites are serialized by the host, so a tick never races
//! another. Each tick first settles which event the editor is bound to,
//! replacing the manager wholesale on any identity change, then runs one
//! reconciliation pass.

use maneuver_editor::{Manager, TickState};
use maneuver_orbits::{OrbitPatch, merge_burn_vector};
use maneuver_plan::{EventId, FlightPlan};

/// Host-side answer to "does an encounter lie ahead of this event?",
/// normally backed by [`maneuver_orbits::find_next_encounter`] over a patch
/// chain produced fresh from the engine.
pub trait TrajectoryQuery {
    fn encounter_ahead(&self, id: EventId) -> bool;
}

/// Stand-in for hosts without a patch chain (tests, offline tooling).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrajectory;

impl TrajectoryQuery for NoTrajectory {
    fn encounter_ahead(&self, _id: EventId) -> bool {
        false
    }
}

/// Owns the current [`Manager`] and applies its lifecycle rules.
#[derive(Debug)]
pub struct Session {
    manager: Manager,
}

impl Session {
    pub fn new() -> Self {
        Session {
            manager: Manager::empty(),
        }
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut Manager {
        &mut self.manager
    }

    /// One tick: settle the bound event, then reconcile.
    pub fn tick(&mut self, plan: &mut FlightPlan, trajectory: &impl TrajectoryQuery) -> TickState {
        self.refresh_manager(plan, trajectory);
        self.manager.reconcile(plan)
    }

    fn refresh_manager(&mut self, plan: &FlightPlan, trajectory: &impl TrajectoryQuery) {
        if plan.is_empty() {
            if self.manager.has_event() {
                self.manager = Manager::empty();
            }
            return;
        }
        let requested = self.manager.take_requested();
        let desired = requested
            .filter(|id| plan.contains(*id))
            .or_else(|| self.manager.current_event().filter(|id| plan.contains(*id)))
            .or_else(|| plan.first_id());
        let Some(desired) = desired else { return };
        if self.manager.current_event() != Some(desired) {
            if let Some(event) = plan.event(desired) {
                self.manager =
                    Manager::for_event(desired, event, trajectory.encounter_ahead(desired));
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// Fold the event following `id` into `id` as one combined burn, then remove
/// the following event — the atomic "merge burn into previous" operation.
///
/// `prior` is the segment the trajectory follows before `id`'s burn;
/// `resulting` is the segment produced by the following event's burn. The
/// merged vector replaces `id`'s delta-v outright. Returns the surviving
/// event's id, or `None` when `id` is missing or has no successor.
pub fn merge_next_event<O: OrbitPatch>(
    plan: &mut FlightPlan,
    id: EventId,
    prior: &O,
    resulting: &O,
) -> Option<EventId> {
    let index = plan.index_of(id)?;
    let next_id = plan.id_at(index + 1)?;
    let ut = plan.event(id)?.ut;
    let merged = merge_burn_vector(prior, resulting, ut);
    plan.event_mut(id)?.delta_v = merged;
    plan.remove(next_id);
    Some(id)
}
