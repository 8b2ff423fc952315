//! Orbital-geometry functions over engine-supplied trajectory segments.
//!
//! Everything here is a pure function of its arguments: orbit shapes,
//! positions, and velocities come from the propagation engine through the
//! [`OrbitPatch`] seam, never from ambient state. Angles returned to callers
//! are in degrees; trait-level anomalies are in radians.

use maneuver_core::angles::{fold_signed_degrees, normalize_degrees};
use maneuver_core::vector::Vector3;

/// A celestial body as far as geometry is concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    /// Name of the body this one orbits; `None` marks the universal root.
    pub parent: Option<String>,
    /// Normal of the body's equatorial plane, engine world frame.
    pub polar_axis: Vector3,
}

impl Body {
    pub fn new(name: &str, parent: Option<&str>, polar_axis: Vector3) -> Self {
        Body {
            name: name.to_string(),
            parent: parent.map(str::to_string),
            polar_axis,
        }
    }

    /// Whether this is the root/central body of the system.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// One trajectory segment ("patch") between two events or sphere-of-influence
/// transitions, as exposed by the propagation engine.
///
/// Positions and velocities are relative to the reference body, in the engine
/// world frame. `true_anomaly_of` and `ut_at_true_anomaly` mirror the
/// engine's anomaly lookups: radians in, absolute seconds out.
pub trait OrbitPatch {
    fn body(&self) -> &Body;
    fn position_at(&self, ut: f64) -> Vector3;
    fn velocity_at(&self, ut: f64) -> Vector3;
    /// Orbit plane normal.
    fn normal(&self) -> Vector3;
    /// True anomaly of the in-plane projection of `direction`, in `[0, 2π)`.
    fn true_anomaly_of(&self, direction: Vector3) -> f64;
    /// First time at or after `after_ut` when the orbit reaches the anomaly.
    fn ut_at_true_anomaly(&self, true_anomaly: f64, after_ut: f64) -> f64;
}

/// Signed ejection angle in degrees at `ut`: the in-plane angle from the
/// reference body's instantaneous prograde velocity direction to the event's
/// position vector, folded into `(-180, 180]`.
///
/// `None` when the patch orbits the root body (no ejection concept) or the
/// body's own orbit is not supplied.
pub fn ejection_angle<O: OrbitPatch>(patch: &O, body_orbit: Option<&O>, ut: f64) -> Option<f64> {
    if patch.body().is_root() {
        return None;
    }
    let body_orbit = body_orbit?;
    let plane = body_orbit.normal().normalized();
    let prograde = in_plane(body_orbit.velocity_at(ut), plane);
    let position = in_plane(patch.position_at(ut), plane);
    if prograde.norm() == 0.0 || position.norm() == 0.0 {
        return None;
    }
    let raw = signed_angle_degrees(prograde, position, plane);
    Some(fold_signed_degrees(normalize_degrees(raw)))
}

/// Time of the next equatorial ascending-node crossing at or after `after_ut`.
pub fn equatorial_ascending_node_ut<O: OrbitPatch>(orbit: &O, after_ut: f64) -> f64 {
    node_crossing_ut(orbit, orbit.body().polar_axis, after_ut, false)
}

/// Time of the next equatorial descending-node crossing at or after `after_ut`.
pub fn equatorial_descending_node_ut<O: OrbitPatch>(orbit: &O, after_ut: f64) -> f64 {
    node_crossing_ut(orbit, orbit.body().polar_axis, after_ut, true)
}

/// Ascending-node time against a target orbit's plane instead of the equator.
pub fn relative_ascending_node_ut<O: OrbitPatch>(orbit: &O, target: &O, after_ut: f64) -> f64 {
    node_crossing_ut(orbit, target.normal(), after_ut, false)
}

/// Descending-node time against a target orbit's plane instead of the equator.
pub fn relative_descending_node_ut<O: OrbitPatch>(orbit: &O, target: &O, after_ut: f64) -> f64 {
    node_crossing_ut(orbit, target.normal(), after_ut, true)
}

/// Ascending-node time against the selected target, falling back to the
/// equatorial crossing when no target is selected.
pub fn ascending_node_ut<O: OrbitPatch>(orbit: &O, target: Option<&O>, after_ut: f64) -> f64 {
    match target {
        Some(target) => relative_ascending_node_ut(orbit, target, after_ut),
        None => equatorial_ascending_node_ut(orbit, after_ut),
    }
}

/// Descending-node counterpart of [`ascending_node_ut`].
pub fn descending_node_ut<O: OrbitPatch>(orbit: &O, target: Option<&O>, after_ut: f64) -> f64 {
    match target {
        Some(target) => relative_descending_node_ut(orbit, target, after_ut),
        None => equatorial_descending_node_ut(orbit, after_ut),
    }
}

/// First segment at or after `start` whose reference body differs from the
/// starting segment's body and is not the root body. The slice is expected
/// fresh from the engine each call; nothing is cached here.
pub fn find_next_encounter<O: OrbitPatch>(path: &[O], start: usize) -> Option<&O> {
    let origin = path.get(start)?;
    path[start..].iter().find(|patch| {
        let body = patch.body();
        body.name != origin.body().name && !body.is_root()
    })
}

/// Combined delta-v that folds a following burn into the preceding event:
/// orbital velocity of `resulting` (the following event's post-burn segment)
/// minus that of `prior` (the segment before the preceding event), both at
/// `ut`, reordered from the engine world axes to maneuver axes (radial,
/// normal, prograde).
pub fn merge_burn_vector<O: OrbitPatch>(prior: &O, resulting: &O, ut: f64) -> Vector3 {
    let world = resulting.velocity_at(ut) - prior.velocity_at(ut);
    // The engine stores world vectors as (radial, prograde, normal).
    Vector3::new(world.x, world.z, world.y)
}

fn in_plane(v: Vector3, unit_normal: Vector3) -> Vector3 {
    v - unit_normal * v.dot(unit_normal)
}

fn signed_angle_degrees(from: Vector3, to: Vector3, unit_normal: Vector3) -> f64 {
    from.cross(to).dot(unit_normal).atan2(from.dot(to)).to_degrees()
}

fn node_crossing_ut<O: OrbitPatch>(
    orbit: &O,
    plane_normal: Vector3,
    after_ut: f64,
    descending: bool,
) -> f64 {
    let mut node_direction = plane_normal.cross(orbit.normal());
    if descending {
        node_direction = -node_direction;
    }
    let anomaly = orbit.true_anomaly_of(node_direction);
    orbit.ut_at_true_anomaly(anomaly, after_ut)
}
