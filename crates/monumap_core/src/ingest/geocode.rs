//! Coordinate resolution for inconsistently encoded location data.
//!
//! # Responsibility
//! - Resolve the upstream coordinate/location value into a `(lat, lon)` pair.
//! - Keep the place-name fallback a narrow, explicit table.
//!
//! # Invariants
//! - A resolved pair always holds exactly two finite numbers.
//! - Place lookup is exact and case-sensitive; this is not a geocoder.
//! - Unresolvable input yields `None`, never an error.

use crate::model::Coordinates;
use serde_json::Value;

/// Fixed place-name fallback for locations stored as free text upstream.
///
/// Intentionally tiny: entries mirror the handful of labels the content
/// team actually uses. Unknown labels leave the entity off the map.
const PLACE_TABLE: &[(&str, Coordinates)] = &[
    ("New York, NY", Coordinates { lat: 40.7128, lon: -74.0060 }),
    ("Washington, DC", Coordinates { lat: 38.9072, lon: -77.0369 }),
    ("South Dakota", Coordinates { lat: 43.9695, lon: -99.9018 }),
    ("California", Coordinates { lat: 36.7783, lon: -119.4179 }),
    ("Texas", Coordinates { lat: 31.9686, lon: -99.9018 }),
    ("Florida", Coordinates { lat: 27.7663, lon: -82.6404 }),
];

/// Resolves a raw coordinate/location value into a coordinate pair.
///
/// Resolution order:
/// 1. A two-element array of finite numbers is used verbatim. Any other
///    array shape does not resolve.
/// 2. A string containing a comma is split and parsed as `lat, lon`;
///    accepted only when exactly two pieces result and both are finite.
/// 3. Any remaining string (including comma strings that failed step 2,
///    such as `"New York, NY"`) is matched against the fixed place table.
/// 4. Everything else is unresolvable: the entity stays in list/search
///    results without map placement.
pub fn resolve_coordinates(value: Option<&Value>) -> Option<Coordinates> {
    match value? {
        Value::Array(elements) => pair_from_array(elements),
        Value::String(text) => parse_pair(text).or_else(|| geocode_place(text)),
        _ => None,
    }
}

fn pair_from_array(elements: &[Value]) -> Option<Coordinates> {
    if let [lat, lon] = elements {
        let lat = finite_number(lat)?;
        let lon = finite_number(lon)?;
        return Some(Coordinates::new(lat, lon));
    }
    None
}

fn parse_pair(text: &str) -> Option<Coordinates> {
    if !text.contains(',') {
        return None;
    }
    let pieces: Vec<&str> = text.split(',').map(str::trim).collect();
    if let [lat, lon] = pieces.as_slice() {
        let lat = finite_parse(lat)?;
        let lon = finite_parse(lon)?;
        return Some(Coordinates::new(lat, lon));
    }
    None
}

fn geocode_place(name: &str) -> Option<Coordinates> {
    PLACE_TABLE
        .iter()
        .find(|(place, _)| *place == name)
        .map(|(_, coords)| *coords)
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|number| number.is_finite())
}

fn finite_parse(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|number| number.is_finite())
}
