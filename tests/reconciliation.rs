//! End-to-end reconciliation scenarios: buffered edits, external drags, and
//! session lifecycle over the engine-owned plan.

use precise_maneuver::editor::{Field, Manager, TickState};
use precise_maneuver::plan::{Direction, FlightPlan};
use precise_maneuver::session::{NoTrajectory, Session};
use precise_maneuver::vector::Vector3;

#[test]
fn pending_edit_is_flushed_as_exactly_one_write() {
    let mut plan = FlightPlan::new();
    let id = plan.add(Vector3::ZERO, 1_000.0);
    let mut manager = Manager::for_event(id, plan.event(id).unwrap(), false);

    manager.set_field(Field::Radial, "1");
    manager.set_field(Field::Normal, "2");
    manager.set_field(Field::Prograde, "3");
    manager.set_field(Field::Time, "1000");

    assert_eq!(manager.reconcile(&mut plan), TickState::LocalEdit);
    let live = plan.event(id).unwrap();
    assert_eq!(live.delta_v, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(live.ut, 1_000.0);

    // Steady state afterwards: no further writes, no drift.
    assert_eq!(manager.reconcile(&mut plan), TickState::Converged);
    assert_eq!(manager.reconcile(&mut plan), TickState::Converged);
}

#[test]
fn external_drag_overrides_pending_edit_in_the_same_tick() {
    let mut plan = FlightPlan::new();
    let id = plan.add(Vector3::ZERO, 1_000.0);
    let mut session = Session::new();
    assert_eq!(session.tick(&mut plan, &NoTrajectory), TickState::Converged);

    // The user types while the engine-side drag handle moves the event.
    session.manager_mut().set_field(Field::Prograde, "9");
    let live = plan.event_mut(id).unwrap();
    live.delta_v = Vector3::new(0.0, 0.0, 4.0);
    live.ut = 1_200.0;

    assert_eq!(session.tick(&mut plan, &NoTrajectory), TickState::ExternalChanged);
    let live = plan.event(id).unwrap();
    assert_eq!(live.delta_v, Vector3::new(0.0, 0.0, 4.0), "external value stands");
    assert_eq!(live.ut, 1_200.0);
    assert_eq!(session.manager().field_text(Field::Prograde), ("4", true));
    assert_eq!(session.tick(&mut plan, &NoTrajectory), TickState::Converged);
}

#[test]
fn mid_edit_text_survives_external_refresh() {
    let mut plan = FlightPlan::new();
    let id = plan.add(Vector3::new(5.0, 0.0, 0.0), 1_000.0);
    let mut session = Session::new();
    session.tick(&mut plan, &NoTrajectory);

    session.manager_mut().set_field(Field::Radial, "-");
    plan.event_mut(id).unwrap().ut = 1_500.0;
    session.tick(&mut plan, &NoTrajectory);

    assert_eq!(session.manager().field_text(Field::Radial), ("-", false));
    assert_eq!(session.manager().field_text(Field::Time), ("1500", true));

    // Completing the edit flushes it on the following tick.
    session.manager_mut().set_field(Field::Radial, "-2.5");
    assert_eq!(session.tick(&mut plan, &NoTrajectory), TickState::LocalEdit);
    assert_eq!(plan.event(id).unwrap().delta_v.x, -2.5);
}

#[test]
fn page_request_is_applied_on_the_following_tick() {
    let mut plan = FlightPlan::new();
    let first = plan.add(Vector3::ZERO, 100.0);
    let second = plan.add(Vector3::ZERO, 200.0);
    let mut session = Session::new();
    session.tick(&mut plan, &NoTrajectory);
    assert_eq!(session.manager().current_event(), Some(first));

    session.manager_mut().advance(&plan, Direction::Forward);
    // Not switched yet; the current render finishes on the old event.
    assert_eq!(session.manager().current_event(), Some(first));

    session.tick(&mut plan, &NoTrajectory);
    assert_eq!(session.manager().current_event(), Some(second));

    // Wraparound from the last event back to the first.
    session.manager_mut().advance(&plan, Direction::Forward);
    session.tick(&mut plan, &NoTrajectory);
    assert_eq!(session.manager().current_event(), Some(first));
}

#[test]
fn removed_event_falls_back_to_first_on_next_tick() {
    let mut plan = FlightPlan::new();
    let first = plan.add(Vector3::ZERO, 100.0);
    let second = plan.add(Vector3::ZERO, 200.0);
    let mut session = Session::new();
    session.tick(&mut plan, &NoTrajectory);

    session.manager_mut().advance(&plan, Direction::Forward);
    session.tick(&mut plan, &NoTrajectory);
    assert_eq!(session.manager().current_event(), Some(second));

    plan.remove(second);
    session.tick(&mut plan, &NoTrajectory);
    assert_eq!(session.manager().current_event(), Some(first));
}

#[test]
fn emptied_plan_collapses_to_an_empty_manager() {
    let mut plan = FlightPlan::new();
    let id = plan.add(Vector3::new(1.0, 1.0, 1.0), 100.0);
    let mut session = Session::new();
    session.tick(&mut plan, &NoTrajectory);
    assert!(session.manager().has_event());

    plan.remove(id);
    session.tick(&mut plan, &NoTrajectory);
    assert!(!session.manager().has_event());

    // Edits against the empty manager stay local and unobservable.
    session.manager_mut().add_delta(Field::Prograde, 5.0);
    assert_eq!(session.tick(&mut plan, &NoTrajectory), TickState::Converged);
    assert!(plan.is_empty());
}

#[test]
fn fresh_selection_raises_resize_requests_once() {
    let mut plan = FlightPlan::new();
    plan.add(Vector3::ZERO, 100.0);
    let mut session = Session::new();
    session.tick(&mut plan, &NoTrajectory);

    assert!(session.manager_mut().take_main_window_resize());
    assert!(!session.manager_mut().take_main_window_resize());
    assert!(session.manager_mut().take_clock_window_resize());

    // Ticking on the same event does not raise them again.
    session.tick(&mut plan, &NoTrajectory);
    assert!(!session.manager_mut().take_main_window_resize());
}
