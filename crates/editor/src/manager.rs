//! Per-tick reconciliation between the buffered edit and the engine-owned
//! event.
//!
//! The manager is bound to one event identity for its whole lifetime. When
//! the selection moves, the event vanishes, or the plan empties, the session
//! replaces the manager wholesale instead of mutating it across identities.

use maneuver_core::vector::Vector3;
use maneuver_plan::{Direction, EventId, FlightPlan};

use crate::field::FieldBuffer;
use crate::snapshot::EventSnapshot;

/// The four editable scalars of a maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Radial,
    Normal,
    Prograde,
    Time,
}

/// Outcome of one reconciliation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickState {
    /// Buffers match the external event; nothing happened.
    Converged,
    /// A pending local edit was flushed to the event in a single write.
    LocalEdit,
    /// The event diverged externally; its values were adopted.
    ExternalChanged,
}

/// Arbitrates between the locally buffered edit and the externally mutable
/// event record.
#[derive(Debug)]
pub struct Manager {
    event: Option<EventId>,
    requested: Option<EventId>,
    snapshot: EventSnapshot,
    radial: FieldBuffer,
    normal: FieldBuffer,
    prograde: FieldBuffer,
    time: FieldBuffer,
    changed: bool,
    has_encounter: bool,
    needs_main_window_resize: bool,
    needs_clock_window_resize: bool,
}

impl Manager {
    /// Manager for a plan with no events: zeroed buffers, nothing to push.
    pub fn empty() -> Self {
        Manager {
            event: None,
            requested: None,
            snapshot: EventSnapshot::default(),
            radial: FieldBuffer::default(),
            normal: FieldBuffer::default(),
            prograde: FieldBuffer::default(),
            time: FieldBuffer::default(),
            changed: false,
            has_encounter: false,
            needs_main_window_resize: true,
            needs_clock_window_resize: true,
        }
    }

    /// Fresh manager bound to `id`, seeded from the live event values.
    /// `has_encounter` comes from the encounter search over the engine's
    /// current patch chain.
    pub fn for_event(id: EventId, event: &maneuver_plan::ManeuverEvent, has_encounter: bool) -> Self {
        Manager {
            event: Some(id),
            requested: None,
            snapshot: EventSnapshot::of(event),
            radial: FieldBuffer::from_value(event.delta_v.x),
            normal: FieldBuffer::from_value(event.delta_v.y),
            prograde: FieldBuffer::from_value(event.delta_v.z),
            time: FieldBuffer::from_value(event.ut),
            changed: false,
            has_encounter,
            needs_main_window_resize: true,
            needs_clock_window_resize: true,
        }
    }

    pub fn current_event(&self) -> Option<EventId> {
        self.event
    }

    pub fn has_event(&self) -> bool {
        self.event.is_some()
    }

    /// Pending page target, consumed by the session on the next tick.
    pub fn requested_event(&self) -> Option<EventId> {
        self.requested
    }

    pub fn take_requested(&mut self) -> Option<EventId> {
        self.requested.take()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Whether an encounter with another body lies along the plan from this
    /// event onward (cached at construction).
    pub fn has_encounter(&self) -> bool {
        self.has_encounter
    }

    /// Euclidean norm of the buffered delta-vector.
    pub fn magnitude(&self) -> f64 {
        self.buffered_delta_v().norm()
    }

    /// Current `(text, parsed)` pair for display.
    pub fn field_text(&self, field: Field) -> (&str, bool) {
        let buffer = self.buffer(field);
        (buffer.text(), buffer.is_parsed())
    }

    /// Route typed text to the matching buffer. Dirties only when the
    /// parsed value actually changes.
    pub fn set_field(&mut self, field: Field, text: &str) {
        if self.buffer_mut(field).set(text) {
            self.changed = true;
        }
    }

    /// Nudge the matching buffer by `amount`.
    pub fn add_delta(&mut self, field: Field, amount: f64) {
        if self.buffer_mut(field).nudge(amount) {
            self.changed = true;
        }
    }

    /// Record the wraparound page target for the next session tick. The
    /// switch is deferred so the current event's render is never torn
    /// mid-tick. Without a current event the first event is requested.
    pub fn advance(&mut self, plan: &FlightPlan, direction: Direction) {
        self.requested = match self.event {
            Some(current) => plan.page(current, direction),
            None => plan.first_id(),
        };
    }

    /// One reconciliation pass, in fixed priority order: external divergence
    /// wins over a pending local edit in the same tick, a pending edit is
    /// flushed as exactly one write, otherwise nothing happens.
    pub fn reconcile(&mut self, plan: &mut FlightPlan) -> TickState {
        let Some(id) = self.event else {
            // No event: local buffer activity is never observable outside.
            self.changed = false;
            return TickState::Converged;
        };
        let Some(live) = plan.event(id) else {
            // Event vanished; the session rebuilds next tick.
            return TickState::Converged;
        };

        let seen = EventSnapshot::of(live);
        if seen != self.snapshot {
            self.radial.reconcile_from(live.delta_v.x);
            self.normal.reconcile_from(live.delta_v.y);
            self.prograde.reconcile_from(live.delta_v.z);
            self.time.reconcile_from(live.ut);
            self.snapshot = seen;
            self.changed = false;
            return TickState::ExternalChanged;
        }

        if self.changed {
            let delta_v = self.buffered_delta_v();
            let ut = self.time.value();
            if let Some(live) = plan.event_mut(id) {
                live.delta_v = delta_v;
                live.ut = ut;
            }
            self.snapshot = EventSnapshot { delta_v, ut };
            self.changed = false;
            return TickState::LocalEdit;
        }

        TickState::Converged
    }

    /// Consume the main-window relayout request raised at construction.
    pub fn take_main_window_resize(&mut self) -> bool {
        std::mem::take(&mut self.needs_main_window_resize)
    }

    /// Consume the clock-window relayout request raised at construction.
    pub fn take_clock_window_resize(&mut self) -> bool {
        std::mem::take(&mut self.needs_clock_window_resize)
    }

    fn buffered_delta_v(&self) -> Vector3 {
        Vector3::new(self.radial.value(), self.normal.value(), self.prograde.value())
    }

    fn buffer(&self, field: Field) -> &FieldBuffer {
        match field {
            Field::Radial => &self.radial,
            Field::Normal => &self.normal,
            Field::Prograde => &self.prograde,
            Field::Time => &self.time,
        }
    }

    fn buffer_mut(&mut self, field: Field) -> &mut FieldBuffer {
        match field {
            Field::Radial => &mut self.radial,
            Field::Normal => &mut self.normal,
            Field::Prograde => &mut self.prograde,
            Field::Time => &mut self.time,
        }
    }
}
