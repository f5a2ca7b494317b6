//! Core domain logic for the monument map/directory application.
//! This crate is the single source of truth for business invariants.

pub mod ingest;
pub mod logging;
pub mod model;
pub mod view;

pub use ingest::geocode::resolve_coordinates;
pub use ingest::normalize::{
    normalize_ecosystem, normalize_ecosystem_member, normalize_monument, normalize_monuments,
    resolve_tags, strip_markup,
};
pub use ingest::{unwrap_items, ContentSource, FetchError, IngestResult, Resource, StaticSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::ecosystem::EcosystemMember;
pub use model::monument::Monument;
pub use model::{Coordinates, EntityId};
pub use view::engine::{FocusIntent, Item, ViewEngine, MIN_FOCUS_ZOOM};
pub use view::FilterCategory;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
