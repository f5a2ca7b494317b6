//! Record normalization from raw upstream shapes to canonical entities.
//!
//! # Responsibility
//! - Resolve every canonical field through its fixed, ordered alias list.
//! - Strip markup from description text and canonicalize tag lists.
//!
//! # Invariants
//! - Normalization is per-record total: a malformed record yields a
//!   canonical entity with absent optional fields, never an error.
//! - Alias resolution is an explicit candidate list per field, first
//!   present non-null value wins; no dynamic property probing.
//! - Batch normalization drops records whose id resolves under no alias,
//!   with a diagnostic; it never aborts the batch.

use crate::ingest::geocode::resolve_coordinates;
use crate::model::ecosystem::EcosystemMember;
use crate::model::monument::Monument;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Record identity lives on the outer record, `id` before `_id`.
const ID_ALIASES: &[&str] = &["id", "_id"];

const NAME_ALIASES: &[&str] = &["name", "Name"];
const STATUS_ALIASES: &[&str] = &["status", "Status"];
const LOCATION_ALIASES: &[&str] = &["location", "Location"];
const COORDINATE_ALIASES: &[&str] = &["locationcoords", "coordinates", "Location"];
const DESCRIPTION_ALIASES: &[&str] = &["description", "Description"];
const YEAR_ALIASES: &[&str] = &["year", "Year"];
const HEIGHT_ALIASES: &[&str] = &["height", "Height"];
const BUILT_BY_ALIASES: &[&str] = &["built-by", "Built By"];
const FUNDED_BY_ALIASES: &[&str] = &["funded-by", "Funded By"];
const CONCEPTUALIZED_BY_ALIASES: &[&str] = &["conceptualized-by", "Conceptualized By"];
const TAGS_ALIASES: &[&str] = &["tags", "Tags"];
const LINK_ALIASES: &[&str] = &["link-2", "link", "Link"];
const TYPE_ALIASES: &[&str] = &["type", "Type"];
const CATEGORY_ALIASES: &[&str] = &["category", "Category"];
const ASSOCIATION_ALIASES: &[&str] = &["association", "Association"];
const WEBSITE_ALIASES: &[&str] = &["website", "Website"];

static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("markup pattern must compile"));

/// Normalizes one raw monument record.
///
/// A missing name becomes an empty string; a missing id resolves to an
/// empty id, which [`normalize_monuments`] subsequently drops.
pub fn normalize_monument(record: &Value) -> Monument {
    let fields = unwrap_field_data(record);
    let mut monument = Monument::new(
        pick_text(record, ID_ALIASES).unwrap_or_default(),
        pick_text(fields, NAME_ALIASES).unwrap_or_default(),
    );
    monument.status = pick_text(fields, STATUS_ALIASES);
    monument.location = pick_text(fields, LOCATION_ALIASES);
    monument.coordinates = resolve_coordinates(pick(fields, COORDINATE_ALIASES));
    monument.description = strip_markup(pick_text(fields, DESCRIPTION_ALIASES).as_deref());
    monument.year = pick_text(fields, YEAR_ALIASES);
    monument.height = pick_text(fields, HEIGHT_ALIASES);
    monument.built_by = pick_text(fields, BUILT_BY_ALIASES);
    monument.funded_by = pick_text(fields, FUNDED_BY_ALIASES);
    monument.conceptualized_by = pick_text(fields, CONCEPTUALIZED_BY_ALIASES);
    monument.tags = resolve_tags(pick(fields, TAGS_ALIASES));
    monument.link = pick_text(fields, LINK_ALIASES);
    monument
}

/// Normalizes one raw ecosystem-member record.
pub fn normalize_ecosystem_member(record: &Value) -> EcosystemMember {
    let fields = unwrap_field_data(record);
    let mut member = EcosystemMember::new(
        pick_text(record, ID_ALIASES).unwrap_or_default(),
        pick_text(fields, NAME_ALIASES).unwrap_or_default(),
        pick_text(fields, TYPE_ALIASES).unwrap_or_default(),
    );
    member.category = pick_text(fields, CATEGORY_ALIASES);
    member.association = pick_text(fields, ASSOCIATION_ALIASES);
    member.location = pick_text(fields, LOCATION_ALIASES);
    member.website = pick_text(fields, WEBSITE_ALIASES);
    member.description = strip_markup(pick_text(fields, DESCRIPTION_ALIASES).as_deref());
    member.tags = resolve_tags(pick(fields, TAGS_ALIASES));
    member
}

/// Normalizes a fetched monument collection, dropping id-less records.
pub fn normalize_monuments(records: &[Value]) -> Vec<Monument> {
    records
        .iter()
        .map(normalize_monument)
        .filter(|monument| keep_identified("monuments", &monument.id, &monument.name))
        .collect()
}

/// Normalizes a fetched ecosystem collection, dropping id-less records.
pub fn normalize_ecosystem(records: &[Value]) -> Vec<EcosystemMember> {
    records
        .iter()
        .map(normalize_ecosystem_member)
        .filter(|member| keep_identified("ecosystem", &member.id, &member.name))
        .collect()
}

fn keep_identified(resource: &str, id: &str, name: &str) -> bool {
    if id.is_empty() {
        // An empty id cannot satisfy id-uniqueness and cannot be selected.
        warn!(
            "event=record_dropped module=ingest status=error resource={resource} reason=missing_id name={name:?}"
        );
        return false;
    }
    true
}

/// Unwraps the optional `fieldData` envelope around one record's fields.
fn unwrap_field_data(record: &Value) -> &Value {
    match record.get("fieldData") {
        Some(fields) if fields.is_object() => fields,
        _ => record,
    }
}

/// Returns the first present non-null value among the alias candidates.
fn pick<'a>(source: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|alias| source.get(alias))
        .find(|value| !value.is_null())
}

/// Alias resolution for text fields. Numbers are rendered as text because
/// the upstream CMS is inconsistent about quoting years and heights.
fn pick_text(source: &Value, aliases: &[&str]) -> Option<String> {
    match pick(source, aliases)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Canonicalizes a raw tag value into an ordered tag list.
///
/// Arrays pass through keeping string elements in order; comma-separated
/// strings are split, trimmed and cleared of empty pieces; anything else
/// yields an empty list.
pub fn resolve_tags(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(elements)) => elements
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Removes `<...>` markup spans and surrounding whitespace.
///
/// The pattern is deliberately permissive: upstream descriptions carry
/// fragments of rich-text markup, not well-formed documents.
pub fn strip_markup(text: Option<&str>) -> String {
    match text {
        Some(raw) => MARKUP_TAG.replace_all(raw, "").trim().to_string(),
        None => String::new(),
    }
}
