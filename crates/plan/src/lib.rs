//! Ordered maneuver-event records and paging over the engine-owned list.
//!
//! The propagation engine owns the event list; editors refer to entries by
//! stable [`EventId`] and re-validate membership every tick instead of
//! holding references across ticks.

use maneuver_core::vector::Vector3;

/// Stable handle to an event. Ids survive insertions and removals of other
/// events and are never reused within one plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(u64);

/// A planned instantaneous velocity change: delta-v resolved into
/// radial/normal/prograde components plus a universal timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManeuverEvent {
    pub delta_v: Vector3,
    pub ut: f64,
}

/// Paging direction through the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The ordered, mutable list of planned events.
#[derive(Debug, Default)]
pub struct FlightPlan {
    next_id: u64,
    entries: Vec<(EventId, ManeuverEvent)>,
}

impl FlightPlan {
    pub fn new() -> Self {
        FlightPlan::default()
    }

    /// Append an event and return its handle.
    pub fn add(&mut self, delta_v: Vector3, ut: f64) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, ManeuverEvent { delta_v, ut }));
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: EventId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| *entry_id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<EventId> {
        self.entries.get(index).map(|(id, _)| *id)
    }

    pub fn first_id(&self) -> Option<EventId> {
        self.id_at(0)
    }

    pub fn event(&self, id: EventId) -> Option<&ManeuverEvent> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, event)| event)
    }

    pub fn event_mut(&mut self, id: EventId) -> Option<&mut ManeuverEvent> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, event)| event)
    }

    /// Remove an event, returning its last value.
    pub fn remove(&mut self, id: EventId) -> Option<ManeuverEvent> {
        let index = self.index_of(id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventId, &ManeuverEvent)> {
        self.entries.iter().map(|(id, event)| (*id, event))
    }

    /// Neighbouring event in the given direction with wraparound
    /// (first and last are adjacent). An id no longer in the plan falls
    /// back to the first event; an empty plan has no pages.
    pub fn page(&self, id: EventId, direction: Direction) -> Option<EventId> {
        if self.entries.is_empty() {
            return None;
        }
        let Some(index) = self.index_of(id) else {
            return self.first_id();
        };
        let count = self.entries.len();
        let target = match direction {
            Direction::Forward => (index + 1) % count,
            Direction::Backward => (index + count - 1) % count,
        };
        self.id_at(target)
    }

    /// Earliest event strictly after `now`, if any.
    pub fn next_upcoming(&self, now: f64) -> Option<EventId> {
        self.entries
            .iter()
            .filter(|(_, event)| event.ut > now)
            .min_by(|(_, a), (_, b)| a.ut.total_cmp(&b.ut))
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_event_plan() -> (FlightPlan, Vec<EventId>) {
        let mut plan = FlightPlan::new();
        let ids = (0..3)
            .map(|k| plan.add(Vector3::new(k as f64, 0.0, 0.0), 100.0 * (k + 1) as f64))
            .collect();
        (plan, ids)
    }

    #[test]
    fn paging_wraps_both_ways() {
        let (plan, ids) = three_event_plan();
        assert_eq!(plan.page(ids[2], Direction::Forward), Some(ids[0]));
        assert_eq!(plan.page(ids[0], Direction::Backward), Some(ids[2]));
        assert_eq!(plan.page(ids[0], Direction::Forward), Some(ids[1]));
        assert_eq!(plan.page(ids[1], Direction::Backward), Some(ids[0]));
    }

    #[test]
    fn paging_on_stale_id_falls_back_to_first() {
        let (mut plan, ids) = three_event_plan();
        plan.remove(ids[1]);
        assert_eq!(plan.page(ids[1], Direction::Forward), Some(ids[0]));
    }

    #[test]
    fn paging_empty_plan_yields_none() {
        let (mut plan, ids) = three_event_plan();
        for id in &ids {
            plan.remove(*id);
        }
        assert_eq!(plan.page(ids[0], Direction::Forward), None);
    }

    #[test]
    fn removal_keeps_remaining_ids_stable() {
        let (mut plan, ids) = three_event_plan();
        let removed = plan.remove(ids[0]).unwrap();
        assert_eq!(removed.ut, 100.0);
        assert!(!plan.contains(ids[0]));
        assert_eq!(plan.index_of(ids[1]), Some(0));
        assert_eq!(plan.event(ids[2]).unwrap().ut, 300.0);
    }

    #[test]
    fn ids_are_not_reused() {
        let (mut plan, ids) = three_event_plan();
        plan.remove(ids[2]);
        let fresh = plan.add(Vector3::ZERO, 400.0);
        assert_ne!(fresh, ids[2]);
    }

    #[test]
    fn next_upcoming_picks_earliest_future_event() {
        let (plan, ids) = three_event_plan();
        assert_eq!(plan.next_upcoming(0.0), Some(ids[0]));
        assert_eq!(plan.next_upcoming(150.0), Some(ids[1]));
        assert_eq!(plan.next_upcoming(300.0), None);
    }
}
