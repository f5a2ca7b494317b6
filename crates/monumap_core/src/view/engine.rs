//! Query/selection engine over both canonical collections.
//!
//! # Responsibility
//! - Derive the active result set from `(search_term, active_filter)`.
//! - Own single-selection state and emit map-focus intents for it.
//! - Gate all queries behind the initial two-resource load.
//!
//! # Invariants
//! - Result order is the original concatenation order, monuments first;
//!   search applies no ranking.
//! - Any change to the search term or active filter clears the selection
//!   unconditionally.
//! - Only monuments are selectable; activating any other id clears the
//!   selection with no map motion.
//! - Collections are populated once per resource and immutable afterward.

use crate::ingest::normalize::{normalize_ecosystem, normalize_monuments};
use crate::ingest::{unwrap_items, ContentSource, IngestResult, Resource};
use crate::model::ecosystem::EcosystemMember;
use crate::model::monument::Monument;
use crate::model::{Coordinates, EntityId};
use crate::view::FilterCategory;
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;

/// Minimum zoom the map collaborator raises to when panning to a selected
/// monument. Zoom levels already closer than this are left unchanged.
pub const MIN_FOCUS_ZOOM: u8 = 8;

/// Borrowed view over one entity of either collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<'a> {
    Monument(&'a Monument),
    Member(&'a EcosystemMember),
}

impl<'a> Item<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Self::Monument(monument) => &monument.id,
            Self::Member(member) => &member.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Self::Monument(monument) => &monument.name,
            Self::Member(member) => &member.name,
        }
    }

    /// Case-insensitive substring match across the searchable fields.
    ///
    /// `needle` must already be lowercased. Absent optional fields never
    /// match and never error.
    fn matches(&self, needle: &str) -> bool {
        let (name, description, tags, location) = match self {
            Self::Monument(monument) => (
                &monument.name,
                &monument.description,
                &monument.tags,
                monument.location.as_deref(),
            ),
            Self::Member(member) => (
                &member.name,
                &member.description,
                &member.tags,
                member.location.as_deref(),
            ),
        };

        if contains_insensitive(name, needle) || contains_insensitive(description, needle) {
            return true;
        }
        if tags.iter().any(|tag| contains_insensitive(tag, needle)) {
            return true;
        }
        if let Self::Member(member) = self {
            if contains_insensitive(&member.member_type, needle) {
                return true;
            }
            if member
                .category
                .as_deref()
                .is_some_and(|category| contains_insensitive(category, needle))
            {
                return true;
            }
        }
        location.is_some_and(|location| contains_insensitive(location, needle))
    }
}

fn contains_insensitive(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Map-focus side effect emitted by a successful monument selection.
///
/// Consumed by the map-rendering collaborator, which owns actual marker and
/// viewport manipulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum FocusIntent {
    /// Open the popup/detail panel for this entity.
    OpenDetail { id: EntityId },
    /// Recenter on the coordinates, raising zoom to at least `min_zoom`.
    PanTo {
        coordinates: Coordinates,
        min_zoom: u8,
    },
}

/// Per-resource load slot; collections become queryable only after both
/// slots settle, in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadSlot {
    Pending,
    Settled,
}

/// Session-scoped query and selection state over both collections.
///
/// Single-writer by construction: every mutation takes `&mut self` and
/// derived views are recomputed per call, so no torn intermediate state is
/// observable within one transition.
#[derive(Debug)]
pub struct ViewEngine {
    monuments: Vec<Monument>,
    members: Vec<EcosystemMember>,
    search_term: String,
    active_filter: FilterCategory,
    selected: Option<EntityId>,
    monuments_slot: LoadSlot,
    ecosystem_slot: LoadSlot,
}

impl Default for ViewEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewEngine {
    /// Creates an engine in the loading state with both slots pending.
    pub fn new() -> Self {
        Self {
            monuments: Vec::new(),
            members: Vec::new(),
            search_term: String::new(),
            active_filter: FilterCategory::Monuments,
            selected: None,
            monuments_slot: LoadSlot::Pending,
            ecosystem_slot: LoadSlot::Pending,
        }
    }

    /// Creates a settled engine directly from canonical collections.
    pub fn from_collections(monuments: Vec<Monument>, members: Vec<EcosystemMember>) -> Self {
        let mut engine = Self::new();
        engine.monuments = monuments;
        engine.members = members;
        engine.monuments_slot = LoadSlot::Settled;
        engine.ecosystem_slot = LoadSlot::Settled;
        engine
    }

    /// Fetches and normalizes both resources, returning a settled engine.
    ///
    /// Transport failures degrade the affected resource to an empty
    /// collection; the session proceeds with whatever succeeded. Retry, if
    /// any, belongs to the bootstrap collaborator.
    pub fn load(source: &dyn ContentSource) -> Self {
        let mut engine = Self::new();
        engine.ingest_monuments(source.fetch(Resource::Monuments));
        engine.ingest_ecosystem(source.fetch(Resource::Ecosystem));
        engine
    }

    /// Settles the monuments slot from one fetch outcome.
    ///
    /// Idempotence guard: a slot settles exactly once; later outcomes are
    /// ignored since collections are immutable for the session.
    pub fn ingest_monuments(&mut self, payload: IngestResult<Value>) {
        if self.monuments_slot == LoadSlot::Settled {
            warn!("event=resource_ignored module=view status=error resource=monuments reason=already_settled");
            return;
        }
        self.monuments = match payload {
            Ok(payload) => {
                let records = unwrap_items(Resource::Monuments, payload);
                normalize_monuments(&records)
            }
            Err(error) => {
                warn!("event=resource_failed module=view status=error resource=monuments error={error}");
                Vec::new()
            }
        };
        self.monuments_slot = LoadSlot::Settled;
        info!(
            "event=resource_loaded module=view status=ok resource=monuments count={}",
            self.monuments.len()
        );
    }

    /// Settles the ecosystem slot from one fetch outcome.
    pub fn ingest_ecosystem(&mut self, payload: IngestResult<Value>) {
        if self.ecosystem_slot == LoadSlot::Settled {
            warn!("event=resource_ignored module=view status=error resource=ecosystem reason=already_settled");
            return;
        }
        self.members = match payload {
            Ok(payload) => {
                let records = unwrap_items(Resource::Ecosystem, payload);
                normalize_ecosystem(&records)
            }
            Err(error) => {
                warn!("event=resource_failed module=view status=error resource=ecosystem error={error}");
                Vec::new()
            }
        };
        self.ecosystem_slot = LoadSlot::Settled;
        info!(
            "event=resource_loaded module=view status=ok resource=ecosystem count={}",
            self.members.len()
        );
    }

    /// Loading state reported to the presentation layer. True until both
    /// resources settle (success or failure), in either order.
    pub fn is_loading(&self) -> bool {
        self.monuments_slot == LoadSlot::Pending || self.ecosystem_slot == LoadSlot::Pending
    }

    pub fn monuments(&self) -> &[Monument] {
        &self.monuments
    }

    pub fn ecosystem_members(&self) -> &[EcosystemMember] {
        &self.members
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_filter(&self) -> FilterCategory {
        self.active_filter
    }

    /// Currently selected monument id, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Updates the search term. Clears the selection unconditionally, even
    /// when the new term equals the old one.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        self.clear_selection("search_changed");
    }

    /// Updates the active filter. Clears the selection unconditionally.
    pub fn set_filter(&mut self, category: FilterCategory) {
        self.active_filter = category;
        self.clear_selection("filter_changed");
    }

    /// Concatenation of both collections, monuments first, stable order.
    pub fn all_items(&self) -> Vec<Item<'_>> {
        if self.is_loading() {
            return Vec::new();
        }
        self.monuments
            .iter()
            .map(Item::Monument)
            .chain(self.members.iter().map(Item::Member))
            .collect()
    }

    /// Active result set derived from the current view state.
    ///
    /// A non-empty trimmed search term searches globally across both
    /// collections, ignoring the active filter; otherwise exactly one
    /// category is returned. Empty collections produce empty views.
    pub fn filtered_view(&self) -> Vec<Item<'_>> {
        if self.is_loading() {
            return Vec::new();
        }

        let needle = self.search_term.trim().to_lowercase();
        if !needle.is_empty() {
            return self
                .all_items()
                .into_iter()
                .filter(|item| item.matches(&needle))
                .collect();
        }

        match self.active_filter.member_type() {
            None => self.monuments.iter().map(Item::Monument).collect(),
            Some(member_type) => self
                .members
                .iter()
                .filter(|member| member.member_type == member_type)
                .map(Item::Member)
                .collect(),
        }
    }

    /// Activates one list/marker entry by id.
    ///
    /// Only monuments are selectable. Selecting a monument records it and
    /// emits the detail-panel intent plus, when coordinates are present, a
    /// pan intent with [`MIN_FOCUS_ZOOM`]. Any other id clears the
    /// selection and emits nothing.
    pub fn select_item(&mut self, id: &str) -> Vec<FocusIntent> {
        if self.is_loading() {
            return Vec::new();
        }

        let Some(monument) = self.monuments.iter().find(|monument| monument.id == id) else {
            self.clear_selection("non_monument_activated");
            return Vec::new();
        };

        self.selected = Some(monument.id.clone());
        debug!(
            "event=selection_set module=view status=ok id={} mappable={}",
            monument.id,
            monument.is_mappable()
        );

        let mut intents = vec![FocusIntent::OpenDetail {
            id: monument.id.clone(),
        }];
        if let Some(coordinates) = monument.coordinates {
            intents.push(FocusIntent::PanTo {
                coordinates,
                min_zoom: MIN_FOCUS_ZOOM,
            });
        }
        intents
    }

    fn clear_selection(&mut self, reason: &str) {
        if self.selected.take().is_some() {
            debug!("event=selection_cleared module=view status=ok reason={reason}");
        }
    }
}
