//! Plain-text persistence of the planned-burn list.
//!
//! One `node = x,y,z,ut` line per event, components comma-joined and
//! formatted with shortest-roundtrip notation so every delta-v component and
//! timestamp survives a save/load cycle bit-for-bit. Lines that do not parse
//! are skipped on load rather than failing the whole file, matching how the
//! editor treats malformed input everywhere else.

use std::fs;
use std::path::Path;

use maneuver_core::vector::Vector3;
use maneuver_plan::{FlightPlan, ManeuverEvent};
use thiserror::Error;

/// Errors raised while reading or writing a plan file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access plan file: {0}")]
    Io(#[from] std::io::Error),
}

/// Comma-joined record for one event: `x,y,z,ut`.
pub fn encode_event(event: &ManeuverEvent) -> String {
    format!(
        "{},{},{},{}",
        event.delta_v.x, event.delta_v.y, event.delta_v.z, event.ut
    )
}

/// Parse a comma-joined record. `None` for anything but four finite-ish
/// numeric fields.
pub fn decode_event(record: &str) -> Option<ManeuverEvent> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return None;
    }
    let mut values = [0.0_f64; 4];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field.parse().ok()?;
    }
    Some(ManeuverEvent {
        delta_v: Vector3::new(values[0], values[1], values[2]),
        ut: values[3],
    })
}

/// Write every event of the plan, one `node = ...` line each.
pub fn save_plan(path: impl AsRef<Path>, plan: &FlightPlan) -> Result<(), StoreError> {
    let mut out = String::new();
    for (_, event) in plan.iter() {
        out.push_str("node = ");
        out.push_str(&encode_event(event));
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

/// Read every decodable `node = ...` line from a plan file. Blank lines,
/// `#` comments, and malformed records are skipped.
pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<ManeuverEvent>, StoreError> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().filter_map(parse_line).collect())
}

/// Build a plan from restored events, dropping any that are not strictly in
/// the future; a stale record must not resurrect an already-passed burn.
pub fn restore_plan(events: &[ManeuverEvent], now: f64) -> FlightPlan {
    let mut plan = FlightPlan::new();
    for event in events {
        if event.ut > now {
            plan.add(event.delta_v, event.ut);
        }
    }
    plan
}

fn parse_line(line: &str) -> Option<ManeuverEvent> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let record = line.strip_prefix("node")?.trim_start().strip_prefix('=')?;
    decode_event(record)
}
