//! Monument canonical record.
//!
//! # Responsibility
//! - Define the normalized shape of one upstream monument entry.
//!
//! # Invariants
//! - `id` uniquely identifies a monument within its collection.
//! - `coordinates`, when present, holds exactly two finite numbers.
//! - `description` and `tags` are always present (possibly empty), never
//!   absent.

use crate::model::{Coordinates, EntityId};
use serde::{Deserialize, Serialize};

/// Normalized monument entry as consumed by the sidebar list and the map.
///
/// Optional fields stay optional on purpose: the upstream collection is
/// inconsistently filled and a missing value must render as "nothing", not
/// fail the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monument {
    /// Upstream-assigned stable id.
    pub id: EntityId,
    pub name: String,
    pub status: Option<String>,
    /// Free-text location label, distinct from resolved `coordinates`.
    pub location: Option<String>,
    /// `None` when no coordinate source resolved; the entity is then kept in
    /// list/search results but omitted from map placement.
    pub coordinates: Option<Coordinates>,
    /// Plain text with markup already stripped.
    pub description: String,
    pub year: Option<String>,
    pub height: Option<String>,
    pub built_by: Option<String>,
    pub funded_by: Option<String>,
    pub conceptualized_by: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

impl Monument {
    /// Creates a monument with all optional fields absent.
    ///
    /// Used by tests and by normalization paths that fill fields
    /// incrementally from resolved aliases.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: None,
            location: None,
            coordinates: None,
            description: String::new(),
            year: None,
            height: None,
            built_by: None,
            funded_by: None,
            conceptualized_by: None,
            tags: Vec::new(),
            link: None,
        }
    }

    /// Returns whether this monument can be placed on the map.
    pub fn is_mappable(&self) -> bool {
        self.coordinates.is_some()
    }
}
