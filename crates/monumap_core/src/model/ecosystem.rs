//! Ecosystem-member canonical record.
//!
//! # Responsibility
//! - Define the normalized shape of one non-monument entity (person,
//!   organization, program, or concept) related to monuments.
//!
//! # Invariants
//! - `id` uniquely identifies a member within its collection.
//! - `member_type` is a free string upstream; the four values `Person`,
//!   `Organization`, `Program` and `Concept` are the ones filtering keys on.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// Member type value used by the patrons filter.
pub const MEMBER_TYPE_PERSON: &str = "Person";
/// Member type value used by the organizations filter.
pub const MEMBER_TYPE_ORGANIZATION: &str = "Organization";
/// Member type value used by the programs filter.
pub const MEMBER_TYPE_PROGRAM: &str = "Program";
/// Member type value used by the concepts filter.
pub const MEMBER_TYPE_CONCEPT: &str = "Concept";

/// Normalized ecosystem entry. Never selectable and never mapped; it only
/// participates in list rendering and global search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemMember {
    /// Upstream-assigned stable id.
    pub id: EntityId,
    pub name: String,
    /// Serialized as `type` to match the upstream schema naming.
    #[serde(rename = "type")]
    pub member_type: String,
    pub category: Option<String>,
    pub association: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    /// Plain text with markup already stripped.
    pub description: String,
    pub tags: Vec<String>,
}

impl EcosystemMember {
    /// Creates a member with all optional fields absent.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        member_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            member_type: member_type.into(),
            category: None,
            association: None,
            location: None,
            website: None,
            description: String::new(),
            tags: Vec::new(),
        }
    }
}
