//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `monumap_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use monumap_core::{StaticSource, ViewEngine};
use serde_json::json;

fn main() {
    println!("monumap_core version={}", monumap_core::core_version());

    // Tiny embedded payload exercising the full normalize + query path
    // without a browser runtime or a live content API.
    let source = StaticSource::new(
        json!({
            "items": [
                {
                    "id": "m-rushmore",
                    "fieldData": {
                        "name": "Mount Rushmore",
                        "Location": "South Dakota",
                        "description": "<p>Carved granite faces</p>",
                        "tags": "granite, presidents"
                    }
                }
            ]
        }),
        json!([
            {"id": "e-robinson", "name": "Doane Robinson", "type": "Person"}
        ]),
    );

    let engine = ViewEngine::load(&source);
    println!("monumap_core loading={}", engine.is_loading());
    println!(
        "monumap_core monuments={} ecosystem={}",
        engine.monuments().len(),
        engine.ecosystem_members().len()
    );
    for item in engine.filtered_view() {
        println!("monumap_core item id={} name={}", item.id(), item.name());
    }
}
