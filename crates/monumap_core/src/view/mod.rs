//! Search/filter/selection view layer.
//!
//! # Responsibility
//! - Expose the unified, queryable view over both canonical collections.
//! - Keep session view state transitions pure and unit-testable without a
//!   rendering environment.
//!
//! # Invariants
//! - Category filtering applies only when the trimmed search term is empty;
//!   a non-empty search is global across both collections.
//! - An unknown category string falls back to `Monuments`.

use serde::{Deserialize, Serialize};

pub mod engine;

/// Category used to narrow the view when no search term is present.
///
/// `Monuments` selects the monument collection; the other four select
/// ecosystem members by their `type` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    #[default]
    Monuments,
    Patrons,
    Organizations,
    Programs,
    Concepts,
}

impl FilterCategory {
    /// Stable string id used by the presentation layer and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monuments => "monuments",
            Self::Patrons => "patrons",
            Self::Organizations => "organizations",
            Self::Programs => "programs",
            Self::Concepts => "concepts",
        }
    }

    /// Parses a category id, falling back to `Monuments` for unknown input.
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "patrons" => Self::Patrons,
            "organizations" => Self::Organizations,
            "programs" => Self::Programs,
            "concepts" => Self::Concepts,
            _ => Self::Monuments,
        }
    }

    /// Ecosystem `type` value this category selects, if any.
    pub fn member_type(self) -> Option<&'static str> {
        match self {
            Self::Monuments => None,
            Self::Patrons => Some(crate::model::ecosystem::MEMBER_TYPE_PERSON),
            Self::Organizations => Some(crate::model::ecosystem::MEMBER_TYPE_ORGANIZATION),
            Self::Programs => Some(crate::model::ecosystem::MEMBER_TYPE_PROGRAM),
            Self::Concepts => Some(crate::model::ecosystem::MEMBER_TYPE_CONCEPT),
        }
    }
}
