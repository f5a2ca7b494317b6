//! Canonical domain model for the map/directory core.
//!
//! # Responsibility
//! - Define the uniform internal shape of upstream entity records.
//! - Keep one canonical identity scheme across both record families.
//!
//! # Invariants
//! - Every entity is identified by a stable upstream-assigned `EntityId`.
//! - Entities are built once at load time and never mutated in-session.
//! - `Coordinates` components are always finite.

use serde::{Deserialize, Serialize};

pub mod ecosystem;
pub mod monument;

/// Stable identifier assigned by the upstream content API.
///
/// Kept as a type alias to make semantic intent explicit in signatures; the
/// core never mints ids of its own.
pub type EntityId = String;

/// Geographic position resolved for a monument.
///
/// Serialized as a `[lat, lon]` pair to match the upstream convention
/// consumed by the map collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Builds a coordinate pair. Callers are responsible for only passing
    /// finite components; resolution code enforces this before constructing.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(value: Coordinates) -> Self {
        (value.lat, value.lon)
    }
}
