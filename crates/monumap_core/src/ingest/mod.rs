//! Upstream content ingestion boundary.
//!
//! # Responsibility
//! - Define the abstract fetch contract the normalizer consumes.
//! - Unwrap the envelope variants the upstream API is known to emit.
//!
//! # Invariants
//! - Transport failures never cross this boundary as panics or aborts; the
//!   caller degrades the failed resource to an empty collection.
//! - Envelope unwrapping accepts both a bare record array and an
//!   `{ "items": [...] }` object; anything else yields zero records.

use log::warn;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod geocode;
pub mod normalize;

/// Result type for ingestion APIs.
pub type IngestResult<T> = Result<T, FetchError>;

/// Logical upstream resource, one per entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Monuments,
    Ecosystem,
}

impl Resource {
    /// Stable string id used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monuments => "monuments",
            Self::Ecosystem => "ecosystem",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-level ingestion failure.
///
/// Covers network errors, non-2xx statuses and undecodable payloads. All
/// variants are recovered by the session loader: the resource is treated as
/// empty and the failure is logged, never raised to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network/connection failure before a response was read.
    Transport { resource: Resource, message: String },
    /// Response arrived with a non-success status code.
    Status { resource: Resource, code: u16 },
    /// Response body could not be decoded as JSON.
    Decode { resource: Resource, message: String },
}

impl FetchError {
    /// Resource this failure belongs to.
    pub fn resource(&self) -> Resource {
        match self {
            Self::Transport { resource, .. }
            | Self::Status { resource, .. }
            | Self::Decode { resource, .. } => *resource,
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { resource, message } => {
                write!(f, "transport failure fetching `{resource}`: {message}")
            }
            Self::Status { resource, code } => {
                write!(f, "unexpected status {code} fetching `{resource}`")
            }
            Self::Decode { resource, message } => {
                write!(f, "undecodable `{resource}` payload: {message}")
            }
        }
    }
}

impl Error for FetchError {}

/// Abstract fetch contract over the upstream content API.
///
/// The core stays transport-agnostic: HTTP, proxy or fixture-backed sources
/// all plug in here. Implementations own any caching or retry policy.
pub trait ContentSource {
    /// Fetches the raw payload for one logical resource.
    fn fetch(&self, resource: Resource) -> IngestResult<Value>;
}

/// Fixture-backed source serving payloads held in memory.
///
/// Used by tests and the CLI smoke probe; doubles as the reference
/// implementation of the [`ContentSource`] contract.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    monuments: Option<Value>,
    ecosystem: Option<Value>,
}

impl StaticSource {
    /// Creates a source answering both resources from the given payloads.
    pub fn new(monuments: Value, ecosystem: Value) -> Self {
        Self {
            monuments: Some(monuments),
            ecosystem: Some(ecosystem),
        }
    }

    /// Creates a source that fails every fetch, for degraded-path tests.
    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self, resource: Resource) -> IngestResult<Value> {
        let payload = match resource {
            Resource::Monuments => &self.monuments,
            Resource::Ecosystem => &self.ecosystem,
        };
        payload.clone().ok_or(FetchError::Status {
            resource,
            code: 503,
        })
    }
}

/// Unwraps one fetched payload into its raw record sequence.
///
/// Accepts either a bare array of records or an envelope object whose
/// `items` key holds the array. Any other shape yields zero records with a
/// diagnostic, matching the never-fatal ingestion contract.
pub fn unwrap_items(resource: Resource, payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(records) => records,
        Value::Object(mut envelope) => match envelope.remove("items") {
            Some(Value::Array(records)) => records,
            _ => {
                warn!(
                    "event=payload_unwrapped module=ingest status=error resource={resource} reason=missing_items"
                );
                Vec::new()
            }
        },
        _ => {
            warn!(
                "event=payload_unwrapped module=ingest status=error resource={resource} reason=not_a_collection"
            );
            Vec::new()
        }
    }
}
